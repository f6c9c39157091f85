//! `clubmap` - Render geolocated club records as an interactive HTML map
//!
//! Loads a club CSV with Polars, styles each club as a circle marker (radius
//! from membership, color from performance) and writes a Leaflet page with
//! one togglable layer per province and league plus an "All clubs" layer.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod map;
pub mod pipeline;

pub use config::{Config, MapSettings};
pub use data::{load_clubs, Club, ClubTable, LoadError};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use map::{build_map, radius_from_members, ClubMap, ColorScale, RenderError};
pub use pipeline::generate_map;
