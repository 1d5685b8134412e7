//! src/surface/raster.rs
//!
//! In-memory pixel surface. Filled rectangles are rasterised into a grid of
//! optional colours; text is kept as anchored labels so the terminal panel
//! can lay it out in cells instead of pixels.

use std::ops::Range;
use std::sync::{Arc, RwLock};

use log::warn;
use ratatui::style::Color;

use super::{Surface, TextAlign, TextBaseline, clamp_dimension, parse_colour};

/// A piece of text placed by `fill_text`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub colour: Color,
}

#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: usize,
    height: usize,
    /// row-major, `None` is transparent
    pixels: Vec<Option<Color>>,
    labels: Vec<TextLabel>,
    fill: Color,
    font: String,
    align: TextAlign,
    baseline: TextBaseline,
}

/// Alias: Arc<RwLock<RasterSurface>>
pub type SharedRaster = Arc<RwLock<RasterSurface>>;

impl Default for RasterSurface {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
            labels: Vec::new(),
            fill: Color::White,
            font: String::new(),
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
        }
    }
}

impl RasterSurface {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    /// Colour at pixel (x, y), `None` when transparent or out of range.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[y * self.width + x]
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// Number of non-transparent pixels.
    pub fn painted(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_some()).count()
    }

    fn paint(&mut self, x: f64, y: f64, w: f64, h: f64, colour: Option<Color>) {
        let cols = span(x, w, self.width);
        let rows = span(y, h, self.height);
        for row in rows {
            let base = row * self.width;
            for col in cols.clone() {
                self.pixels[base + col] = colour;
            }
        }
    }
}

/// Pixel indices covered by `[start, start + len)`, clipped to `[0, limit)`.
fn span(start: f64, len: f64, limit: usize) -> Range<usize> {
    let (start, len) = if len < 0.0 { (start + len, -len) } else { (start, len) };
    if !start.is_finite() || !len.is_finite() {
        return 0..0;
    }
    let a = start.max(0.0).round() as usize;
    let b = (start + len).min(limit as f64).max(0.0).round() as usize;
    a.min(limit)..b.min(limit)
}

impl Surface for RasterSurface {
    fn resize(&mut self, width: f64, height: f64) {
        let width = clamp_dimension(width).round() as usize;
        let height = clamp_dimension(height).round() as usize;
        let Some(area) = width.checked_mul(height) else {
            warn!("surface {}x{} too large, leaving it empty", width, height);
            self.width = 0;
            self.height = 0;
            self.pixels.clear();
            self.labels.clear();
            return;
        };
        self.width = width;
        self.height = height;
        self.pixels = vec![None; area];
        self.labels.clear();
    }

    fn set_fill_style(&mut self, colour: &str) {
        match parse_colour(colour) {
            Some(c) => self.fill = c,
            None => warn!("unrecognised fill colour {:?}, keeping {:?}", colour, self.fill),
        }
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let fill = self.fill;
        self.paint(x, y, w, h, Some(fill));
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.paint(x, y, w, h, None);
        self.labels
            .retain(|l| !(l.x >= x && l.x <= x + w && l.y >= y && l.y <= y + h));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.labels.retain(|l| !(l.x == x && l.y == y));
        self.labels.push(TextLabel {
            text: text.to_string(),
            x,
            y,
            align: self.align,
            baseline: self.baseline,
            colour: self.fill,
        });
    }
}
