//! src/surface/recording.rs
//!
//! Display-list surface: remembers every drawing call in order, along with
//! the current drawing state. Useful for headless hosts and for asserting on
//! exactly what the graph drew.

use super::{Surface, TextAlign, TextBaseline};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Resize { width: f64, height: f64 },
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    ClearRect { x: f64, y: f64, w: f64, h: f64 },
    FillText { text: String, x: f64, y: f64 },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    pub width: f64,
    pub height: f64,
    pub fill_style: String,
    pub font: String,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
}

impl RecordingSurface {
    /// Forget recorded calls, keeping the drawing state.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    pub fn fill_rects(&self) -> Vec<[f64; 4]> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::FillRect { x, y, w, h } => Some([x, y, w, h]),
                _ => None,
            })
            .collect()
    }

    pub fn clear_rects(&self) -> Vec<[f64; 4]> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::ClearRect { x, y, w, h } => Some([x, y, w, h]),
                _ => None,
            })
            .collect()
    }

    pub fn fill_texts(&self) -> Vec<(String, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, x, y } => Some((text.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.ops.push(DrawOp::Resize { width, height });
    }

    fn set_fill_style(&mut self, colour: &str) {
        self.fill_style = colour.to_string();
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.text_baseline = baseline;
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::FillRect { x, y, w, h });
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::ClearRect { x, y, w, h });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}
