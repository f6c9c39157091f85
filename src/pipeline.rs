//! Load -> build -> save, as run by the binary.

use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::data::load_clubs;
use crate::error::{Error, Result};
use crate::map::build_map;

/// Generate the club map described by `config` and return where it was written.
///
/// # Errors
///
/// Fails if the CSV is missing or malformed, if no club survives cleanup, or
/// if the page cannot be written.
pub fn generate_map(config: &Config) -> Result<PathBuf> {
    let table = load_clubs(&config.paths.input)?;
    if table.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let map = build_map(&table, &config.map)?;
    map.save(&config.paths.output)?;

    info!(
        input = %config.paths.input.display(),
        output = %config.paths.output.display(),
        clubs = table.len(),
        "map generated"
    );
    Ok(config.paths.output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathsConfig;
    use std::fs;

    fn config_for(name: &str, csv: &str) -> (Config, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "clubmap_pipeline_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("temp dir");
        let input = dir.join("clubs.csv");
        fs::write(&input, csv).expect("write csv");

        let config = Config {
            paths: PathsConfig {
                input,
                output: dir.join("maps").join("clubs.html"),
            },
            ..Config::default()
        };
        (config, dir)
    }

    #[test]
    fn test_empty_after_cleanup_is_an_error() {
        let (config, dir) = config_for(
            "empty",
            "club_name,county,province,league,lat,lon,members,performance\n\
             Nowhere,Cork,Munster,Senior,,,10,10\n",
        );

        let err = generate_map(&config).unwrap_err();
        assert!(matches!(err, Error::EmptyDataset));
        assert!(!config.paths.output.exists());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_input_is_reported() {
        let config = Config {
            paths: PathsConfig {
                input: std::env::temp_dir().join("clubmap_pipeline_missing.csv"),
                output: std::env::temp_dir().join("clubmap_pipeline_missing.html"),
            },
            ..Config::default()
        };
        let err = generate_map(&config).unwrap_err();
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_writes_output() {
        let (config, dir) = config_for(
            "ok",
            "club_name,county,province,league,lat,lon,members,performance\n\
             Glen,Derry,Ulster,Senior,54.85,-6.65,600,88\n",
        );

        let written = generate_map(&config).expect("generate");
        assert_eq!(written, config.paths.output);
        assert!(written.exists());

        fs::remove_dir_all(dir).ok();
    }
}
