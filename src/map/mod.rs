//! Map module - marker styling, layer building, HTML output

mod builder;
mod html;
mod style;

pub use builder::{
    build_map, escape_html, format_number, popup_html, ClubMap, Layer, Legend, Marker,
    RenderError, ALL_CLUBS_LAYER,
};
pub use style::{
    radius_from_members, ColorScale, Rgb, DEFAULT_RADIUS, MAX_RADIUS, MIN_RADIUS, MISSING_COLOR,
};
