//! src/surface.rs
//!
//! The 2-D drawing context the graph renders into, and its implementations.

pub mod raster;
pub mod recording;

use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use ratatui::style::Color;

pub use raster::{RasterSurface, SharedRaster, TextLabel};
pub use recording::{DrawOp, RecordingSurface};

/// Largest width or height, in pixels, a surface or graph may take.
pub const MAX_DIMENSION: f64 = 4096.0;

/// Clamp a configured size into `[0, MAX_DIMENSION]`.
pub fn clamp_dimension(value: f64) -> f64 {
    if value > MAX_DIMENSION {
        log::warn!("size {value} exceeds {MAX_DIMENSION}, clamping");
    }
    value.clamp(0.0, MAX_DIMENSION)
}

/// Horizontal anchoring of `fill_text` relative to its x coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchoring of `fill_text` relative to its y coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Bottom,
}

/// Canvas-like drawing context. Coordinates are pixels, origin top-left.
pub trait Surface {
    /// Set the surface dimensions, discarding its contents.
    fn resize(&mut self, width: f64, height: f64);
    fn set_fill_style(&mut self, colour: &str);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// Surfaces are shared between the graph that draws and the panel that
/// displays them.
impl<S: Surface> Surface for Arc<RwLock<S>> {
    fn resize(&mut self, width: f64, height: f64) {
        self.write()
            .unwrap_or_else(PoisonError::into_inner)
            .resize(width, height);
    }

    fn set_fill_style(&mut self, colour: &str) {
        self.write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_fill_style(colour);
    }

    fn set_font(&mut self, font: &str) {
        self.write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_text_align(align);
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_text_baseline(baseline);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.write()
            .unwrap_or_else(PoisonError::into_inner)
            .fill_rect(x, y, w, h);
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear_rect(x, y, w, h);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.write()
            .unwrap_or_else(PoisonError::into_inner)
            .fill_text(text, x, y);
    }
}

/// Parse a CSS-style colour (`#rgb`, `#rrggbb` or a named colour).
pub fn parse_colour(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 3 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
            return Color::from_str(&format!("#{expanded}")).ok();
        }
    }
    Color::from_str(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(parse_colour("#ddd"), Some(Color::Rgb(0xdd, 0xdd, 0xdd)));
        assert_eq!(parse_colour("#00cccc"), Some(Color::Rgb(0, 0xcc, 0xcc)));
        assert_eq!(parse_colour("red"), Some(Color::Red));
        assert_eq!(parse_colour("#zzz"), None);
    }

    #[test]
    fn shared_surface_forwards_calls() {
        let mut shared = Arc::new(RwLock::new(RecordingSurface::default()));
        shared.fill_rect(1.0, 2.0, 3.0, 4.0);
        let inner = shared.read().unwrap();
        assert_eq!(inner.fill_rects(), vec![[1.0, 2.0, 3.0, 4.0]]);
    }
}
