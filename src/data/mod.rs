//! Data module - CSV loading and club table

mod loader;
mod table;

pub use loader::{load_clubs, LoadError, MISSING_LABEL, REQUIRED_COLUMNS};
pub use table::{Club, ClubTable, GroupKey, DEFAULT_PERFORMANCE_RANGE};

#[cfg(test)]
pub(crate) use table::club;
