//! Marker styling: radius from membership, color from performance.

/// Radius for a club whose membership is unknown.
pub const DEFAULT_RADIUS: f64 = 6.0;
pub const MIN_RADIUS: f64 = 5.0;
pub const MAX_RADIUS: f64 = 22.0;

/// Marker color for a club with no performance score.
pub const MISSING_COLOR: &str = "#666666";

pub const PERFORMANCE_CAPTION: &str = "Performance (higher = better)";

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Yellow -> Green -> Blue, 9 classes, evenly spaced.
pub const YL_GN_BU_9: [Rgb; 9] = [
    Rgb::new(0xff, 0xff, 0xd9),
    Rgb::new(0xed, 0xf8, 0xb1),
    Rgb::new(0xc7, 0xe9, 0xb4),
    Rgb::new(0x7f, 0xcd, 0xbb),
    Rgb::new(0x41, 0xb6, 0xc4),
    Rgb::new(0x1d, 0x91, 0xc0),
    Rgb::new(0x22, 0x5e, 0xa8),
    Rgb::new(0x25, 0x34, 0x94),
    Rgb::new(0x08, 0x1d, 0x58),
];

/// Marker radius scaled from membership.
///
/// Square-root growth keeps large clubs from swamping the map while small
/// clubs stay visible. Bounded to `[MIN_RADIUS, MAX_RADIUS]`; negative
/// membership counts as zero.
pub fn radius_from_members(members: Option<f64>) -> f64 {
    match members {
        Some(m) if !m.is_nan() => (4.0 + m.max(0.0).sqrt() / 3.0).clamp(MIN_RADIUS, MAX_RADIUS),
        _ => DEFAULT_RADIUS,
    }
}

/// Linear color scale mapping `[vmin, vmax]` onto evenly spaced color stops.
#[derive(Debug, Clone)]
pub struct ColorScale {
    vmin: f64,
    vmax: f64,
    stops: &'static [Rgb],
    pub caption: String,
}

impl ColorScale {
    /// YlGnBu scale over the given performance range.
    pub fn performance(vmin: f64, vmax: f64) -> Self {
        Self {
            vmin,
            vmax,
            stops: &YL_GN_BU_9,
            caption: PERFORMANCE_CAPTION.to_string(),
        }
    }

    pub fn vmin(&self) -> f64 {
        self.vmin
    }

    pub fn vmax(&self) -> f64 {
        self.vmax
    }

    /// Value at which stop `i` sits.
    fn stop_value(&self, i: usize) -> f64 {
        let n = self.stops.len() - 1;
        self.vmin + (self.vmax - self.vmin) * i as f64 / n as f64
    }

    /// Interpolated color for `value` as `#rrggbb`.
    pub fn color(&self, value: f64) -> String {
        let last = self.stops.len() - 1;
        if value <= self.vmin {
            return self.stops[0].to_hex();
        }
        if value >= self.vmax {
            return self.stops[last].to_hex();
        }

        // First stop at or above value; exists because vmin < value < vmax
        let upper = (1..=last)
            .find(|&i| self.stop_value(i) >= value)
            .unwrap_or(last);
        let lo = self.stop_value(upper - 1);
        let hi = self.stop_value(upper);
        let t = if hi > lo { (value - lo) / (hi - lo) } else { 1.0 };

        lerp_color(self.stops[upper - 1], self.stops[upper], t).to_hex()
    }

    /// Color for an optional score; missing or non-finite scores get `MISSING_COLOR`.
    pub fn marker_color(&self, value: Option<f64>) -> String {
        match value {
            Some(v) if v.is_finite() => self.color(v),
            _ => MISSING_COLOR.to_string(),
        }
    }

    /// CSS gradient running through every stop, left to right.
    pub fn gradient_css(&self) -> String {
        let last = self.stops.len() - 1;
        let stops: Vec<String> = self
            .stops
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{} {:.1}%", c.to_hex(), 100.0 * i as f64 / last as f64))
            .collect();
        format!("linear-gradient(to right, {})", stops.join(", "))
    }
}

// Channels interpolate in unit floats and truncate back, so the endpoints
// reproduce the stop colors exactly.
fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a) / 255.0;
    let b = f64::from(b) / 255.0;
    (((1.0 - t) * a + t * b) * 255.9999) as u8
}

fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp_channel(c1.r, c2.r, t),
        lerp_channel(c1.g, c2.g, t),
        lerp_channel(c1.b, c2.b, t),
    )
}
