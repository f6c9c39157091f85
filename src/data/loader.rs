//! CSV Data Loader Module
//! Loads club records from CSV using Polars and applies the cleanup rules.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use super::table::{Club, ClubTable};

/// Columns every club CSV must carry, in report order.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "club_name",
    "county",
    "province",
    "league",
    "lat",
    "lon",
    "members",
    "performance",
];

/// Label used for a missing province or league so the row still forms a group.
/// Python-style stringification would give `nan` here; `NA` matches the popup's
/// label for missing metrics instead.
pub const MISSING_LABEL: &str = "NA";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Missing data file: {}", path.display())]
    MissingFile { path: PathBuf },
    #[error("CSV missing required columns: {missing:?}")]
    MissingColumns { missing: Vec<String> },
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Load and clean the club CSV at `csv_path`.
///
/// Every column is read as text so a malformed cell never aborts the read.
/// Numeric columns are then cast non-strictly: anything that does not parse
/// becomes missing. Rows without a finite latitude and longitude are dropped.
pub fn load_clubs(csv_path: impl AsRef<Path>) -> Result<ClubTable, LoadError> {
    let csv_path = csv_path.as_ref();
    if !csv_path.exists() {
        return Err(LoadError::MissingFile {
            path: csv_path.to_path_buf(),
        });
    }

    let raw = read_raw(csv_path)?;
    check_columns(&raw)?;

    let total = raw.height();
    let cleaned = clean(raw)?;
    let clubs = into_clubs(&cleaned)?;
    let dropped = total - clubs.len();

    info!(
        path = %csv_path.display(),
        rows = total,
        kept = clubs.len(),
        dropped,
        "loaded club records"
    );

    Ok(ClubTable::new(clubs, dropped))
}

fn read_raw(csv_path: &Path) -> Result<DataFrame, LoadError> {
    // Schema inference off: every column arrives as String
    let df = LazyCsvReader::new(csv_path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()?
        .collect()?;

    debug!(rows = df.height(), columns = df.width(), "read raw CSV");
    Ok(df)
}

fn check_columns(df: &DataFrame) -> Result<(), LoadError> {
    let present: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !present.iter().any(|name| name == *required))
        .map(|s| s.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::MissingColumns { missing })
    }
}

fn clean(df: DataFrame) -> Result<DataFrame, LoadError> {
    let cleaned = df
        .lazy()
        .with_columns([
            label_column("province"),
            label_column("league"),
            numeric_column("members"),
            numeric_column("performance"),
            numeric_column("lat"),
            numeric_column("lon"),
        ])
        .filter(col("lat").is_not_null().and(col("lon").is_not_null()))
        .collect()?;

    Ok(cleaned)
}

fn label_column(name: &str) -> Expr {
    col(name)
        .str()
        .strip_chars(lit(NULL))
        .fill_null(lit(MISSING_LABEL))
}

fn numeric_column(name: &str) -> Expr {
    // Non-strict cast: unparsable text becomes null
    col(name)
        .str()
        .strip_chars(lit(NULL))
        .cast(DataType::Float64)
}

fn into_clubs(df: &DataFrame) -> Result<Vec<Club>, LoadError> {
    let club_name = df.column("club_name")?.str()?;
    let county = df.column("county")?.str()?;
    let province = df.column("province")?.str()?;
    let league = df.column("league")?.str()?;
    let lat = df.column("lat")?.f64()?;
    let lon = df.column("lon")?.f64()?;
    let members = df.column("members")?.f64()?;
    let performance = df.column("performance")?.f64()?;

    let mut clubs = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let (Some(lat), Some(lon)) = (lat.get(i), lon.get(i)) else {
            continue;
        };
        // "nan" and "inf" parse as floats but are not locations
        if !lat.is_finite() || !lon.is_finite() {
            continue;
        }

        clubs.push(Club {
            club_name: club_name.get(i).unwrap_or_default().to_string(),
            county: county.get(i).unwrap_or_default().to_string(),
            province: province.get(i).unwrap_or(MISSING_LABEL).to_string(),
            league: league.get(i).unwrap_or(MISSING_LABEL).to_string(),
            lat,
            lon,
            // "inf" parses too; a metric must be finite to count
            members: members.get(i).filter(|v| v.is_finite()),
            performance: performance.get(i).filter(|v| v.is_finite()),
        });
    }

    Ok(clubs)
}
