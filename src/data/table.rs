//! Club Table Module
//! Cleaned club records plus the aggregates the map needs (center, color range, groups).

use statrs::statistics::{Data, Max, Median, Min};
use std::collections::BTreeMap;

/// Performance range used when no club carries a performance score.
pub const DEFAULT_PERFORMANCE_RANGE: (f64, f64) = (0.0, 100.0);

/// One club's identity, location, and metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub club_name: String,
    pub county: String,
    pub province: String,
    pub league: String,
    pub lat: f64,
    pub lon: f64,
    pub members: Option<f64>,
    pub performance: Option<f64>,
}

/// Group key: (province, league).
pub type GroupKey = (String, String);

/// Clubs that survived loading, in file order.
#[derive(Debug, Clone, Default)]
pub struct ClubTable {
    clubs: Vec<Club>,
    dropped: usize,
}

impl ClubTable {
    pub fn new(clubs: Vec<Club>, dropped: usize) -> Self {
        Self { clubs, dropped }
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    /// Number of rows removed during cleanup.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Median latitude and longitude. NaN for an empty table.
    pub fn center(&self) -> (f64, f64) {
        if self.clubs.is_empty() {
            return (f64::NAN, f64::NAN);
        }

        let lats = Data::new(self.clubs.iter().map(|c| c.lat).collect::<Vec<_>>());
        let lons = Data::new(self.clubs.iter().map(|c| c.lon).collect::<Vec<_>>());
        (lats.median(), lons.median())
    }

    /// Min and max of the known, finite performance scores.
    pub fn performance_range(&self) -> (f64, f64) {
        let scores: Vec<f64> = self
            .clubs
            .iter()
            .filter_map(|c| c.performance)
            .filter(|v| v.is_finite())
            .collect();
        if scores.is_empty() {
            return DEFAULT_PERFORMANCE_RANGE;
        }

        let scores = Data::new(scores);
        (scores.min(), scores.max())
    }

    /// Clubs grouped by (province, league), keys sorted, row order kept inside a group.
    pub fn groups(&self) -> BTreeMap<GroupKey, Vec<&Club>> {
        let mut groups: BTreeMap<GroupKey, Vec<&Club>> = BTreeMap::new();
        for club in &self.clubs {
            groups
                .entry((club.province.clone(), club.league.clone()))
                .or_default()
                .push(club);
        }
        groups
    }
}

#[cfg(test)]
pub(crate) fn club(name: &str, province: &str, league: &str, lat: f64, lon: f64) -> Club {
    Club {
        club_name: name.to_string(),
        county: "Test".to_string(),
        province: province.to_string(),
        league: league.to_string(),
        lat,
        lon,
        members: None,
        performance: None,
    }
}
