//! Map Builder Module
//! Turns a club table into layers of styled markers ready for rendering.
//!
//! Layout:
//! 1. One hidden layer per (province, league) pair, sorted, named "{province}  {league}"
//! 2. A final "All clubs" layer, shown on load
//! 3. Each layer clusters its markers
//! 4. A legend for the performance color scale

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

use super::style::{radius_from_members, ColorScale};
use crate::config::MapSettings;
use crate::data::{Club, ClubTable};

pub const ALL_CLUBS_LAYER: &str = "All clubs";

const FILL_OPACITY: f64 = 0.85;
const STROKE_WEIGHT: f64 = 2.0;
const NOT_AVAILABLE: &str = "NA";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No clubs to draw")]
    NoClubs,
    #[error("Failed to encode map data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write map to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One circle marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    pub color: String,
    pub fill_opacity: f64,
    pub weight: f64,
    /// Escaped HTML.
    pub tooltip: String,
    /// Escaped HTML.
    pub popup: String,
}

/// A togglable overlay holding one marker cluster.
#[derive(Debug, Clone, Serialize)]
pub struct Layer {
    pub name: String,
    pub show: bool,
    pub markers: Vec<Marker>,
}

/// Color bar legend for the performance scale.
#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub caption: String,
    pub vmin: f64,
    pub vmax: f64,
    pub gradient: String,
}

/// Everything the HTML page needs to draw the map.
#[derive(Debug, Clone, Serialize)]
pub struct ClubMap {
    pub center: [f64; 2],
    pub zoom_start: u8,
    pub tiles: String,
    pub attribution: String,
    pub popup_max_width: u32,
    pub collapsed_control: bool,
    pub layers: Vec<Layer>,
    pub legend: Legend,
}

impl ClubMap {
    /// Layer by name.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }
}

/// Build the map model for `table`.
pub fn build_map(table: &ClubTable, settings: &MapSettings) -> Result<ClubMap, RenderError> {
    if table.is_empty() {
        return Err(RenderError::NoClubs);
    }

    let (center_lat, center_lon) = table.center();
    let (vmin, vmax) = table.performance_range();
    let scale = ColorScale::performance(vmin, vmax);

    let mut layers = Vec::new();
    for ((province, league), clubs) in table.groups() {
        let name = format!("{province}  {league}");
        debug!(layer = %name, clubs = clubs.len(), "building layer");
        layers.push(Layer {
            name,
            show: false,
            markers: clubs.iter().map(|c| marker_for(c, &scale)).collect(),
        });
    }

    layers.push(Layer {
        name: ALL_CLUBS_LAYER.to_string(),
        show: true,
        markers: table.clubs().iter().map(|c| marker_for(c, &scale)).collect(),
    });

    info!(
        clubs = table.len(),
        layers = layers.len(),
        vmin,
        vmax,
        "built club map"
    );

    Ok(ClubMap {
        center: [center_lat, center_lon],
        zoom_start: settings.zoom_start,
        tiles: settings.tiles.clone(),
        attribution: settings.attribution.clone(),
        popup_max_width: settings.popup_max_width,
        collapsed_control: false,
        layers,
        legend: Legend {
            caption: scale.caption.clone(),
            vmin: scale.vmin(),
            vmax: scale.vmax(),
            gradient: scale.gradient_css(),
        },
    })
}

fn marker_for(club: &Club, scale: &ColorScale) -> Marker {
    Marker {
        lat: club.lat,
        lon: club.lon,
        radius: radius_from_members(club.members),
        color: scale.marker_color(club.performance),
        fill_opacity: FILL_OPACITY,
        weight: STROKE_WEIGHT,
        tooltip: format!(
            "{} ({})",
            escape_html(&club.club_name),
            escape_html(&club.county)
        ),
        popup: popup_html(club),
    }
}

/// Popup body: name, location labels and the two metrics.
pub fn popup_html(club: &Club) -> String {
    let members = club
        .members
        .filter(|m| m.is_finite())
        .map(|m| format!("{}", m.trunc() as i64))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let performance = club
        .performance
        .filter(|p| p.is_finite())
        .map(format_number)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    format!(
        "<div style=\"font-family: Arial; font-size: 13px;\">\
         <b>{}</b><br/>\
         County: {}<br/>\
         Province: {}<br/>\
         League: {}<br/>\
         Members: {}<br/>\
         Performance: {}\
         </div>",
        escape_html(&club.club_name),
        escape_html(&club.county),
        escape_html(&club.province),
        escape_html(&club.league),
        members,
        performance,
    )
}

/// Whole numbers keep one decimal place ("80.0"), others print shortest form.
///
/// Scores are always held as floats, so an all-integer column still prints
/// `88.0` rather than `88`.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Escape text for inclusion in HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
