//! src/graph/render.rs
//!
//! Draws the two stacked layers: a static background of empty bar slots
//! (plus y-axis labels when rescaling) and the history bars on top.

use log::debug;

use super::config::{AxisCeiling, GraphConfig};
use super::data::HistoryBuffer;
use super::layout::{AXIS_LABEL_OFFSET, axis_label_rows, axis_points, bar_positions};
use crate::surface::{Surface, TextAlign, TextBaseline};

pub struct Layers<S> {
    pub background: S,
    pub history: S,

    /// Current top of the y-axes; `None` until the first rescale.
    max_axes_point: Option<u64>,
}

impl<S: Surface> Layers<S> {
    pub fn new(background: S, history: S) -> Self {
        Self {
            background,
            history,
            max_axes_point: None,
        }
    }

    pub fn max_axes_point(&self) -> Option<u64> {
        self.max_axes_point
    }

    pub fn set_max_axes_point(&mut self, ceiling: Option<u64>) {
        self.max_axes_point = ceiling;
    }

    pub fn init_background(&mut self, cfg: &GraphConfig) {
        self.background.resize(cfg.width, cfg.height);
        self.background.set_fill_style(&cfg.background_bar_colour);
    }

    pub fn init_history(&mut self, cfg: &GraphConfig) {
        self.history.resize(cfg.width, cfg.height);
        self.history.set_fill_style(&cfg.history_bar_colour);
    }

    /// Fill every bar slot on the background layer.
    pub fn draw_background(&mut self, cfg: &GraphConfig) {
        let top = cfg.effective_gutter();
        let h = cfg.drawing_height();
        for x in bar_positions(cfg) {
            self.background.fill_rect(x, top, cfg.bar_width, h);
        }
    }

    /// Redraw the history layer.
    ///
    /// Returns the new axis points when the y-axes were rescaled.
    pub fn draw_history(&mut self, cfg: &GraphConfig, history: &HistoryBuffer) -> Option<[u64; 5]> {
        let max_hits = history.max();
        let mut rescaled = None;

        let scale = if cfg.rescale_axes {
            if self.needs_rescale(cfg, max_hits) {
                rescaled = Some(self.draw_axes(cfg, max_hits));
            }
            let ceiling = self.max_axes_point.unwrap_or(1) as f64;
            cfg.drawing_height() / ceiling
        } else if max_hits == 0 {
            0.0
        } else {
            cfg.height * cfg.scale_threshold / max_hits as f64
        };

        let base = cfg.height - cfg.effective_gutter();
        self.history.clear_rect(0.0, 0.0, cfg.width, cfg.height);
        for (x, hits) in bar_positions(cfg).zip(history.recent()) {
            let h = hits as f64 * scale;
            self.history.fill_rect(x, base - h, cfg.bar_width, h);
        }
        rescaled
    }

    fn needs_rescale(&self, cfg: &GraphConfig, max_hits: u64) -> bool {
        match self.max_axes_point {
            None => true,
            Some(ceiling) if max_hits >= ceiling => true,
            Some(ceiling) => {
                cfg.axis_ceiling == AxisCeiling::Follow && axis_points(max_hits)[4] != ceiling
            }
        }
    }

    /// Recompute the axis points from `max_hits` and relabel both y-axes.
    pub fn draw_axes(&mut self, cfg: &GraphConfig, max_hits: u64) -> [u64; 5] {
        let points = axis_points(max_hits);
        debug!(
            "rescaling axes: max {} -> ceiling {} (was {:?})",
            max_hits, points[4], self.max_axes_point
        );
        self.max_axes_point = Some(points[4]);
        self.background.set_font(&cfg.axes_font);
        self.draw_left_y_axis(cfg, &points);
        self.draw_right_y_axis(cfg, &points);
        points
    }

    pub fn draw_left_y_axis(&mut self, cfg: &GraphConfig, points: &[u64; 5]) {
        let x = cfg.effective_gutter() - AXIS_LABEL_OFFSET;
        self.background.clear_rect(0.0, 0.0, x, cfg.height);
        self.background.set_text_align(TextAlign::Right);
        self.draw_axis_labels(cfg, points, x);
    }

    pub fn draw_right_y_axis(&mut self, cfg: &GraphConfig, points: &[u64; 5]) {
        let x = cfg.width - cfg.effective_gutter() + AXIS_LABEL_OFFSET;
        self.background.clear_rect(x, 0.0, cfg.width - x, cfg.height);
        self.background.set_text_align(TextAlign::Left);
        self.draw_axis_labels(cfg, points, x);
    }

    // top label first
    fn draw_axis_labels(&mut self, cfg: &GraphConfig, points: &[u64; 5], x: f64) {
        self.background.set_text_baseline(TextBaseline::Middle);
        let rows = axis_label_rows(cfg);
        for i in (0..points.len()).rev() {
            self.background.fill_text(&points[i].to_string(), x, rows[i]);
        }
    }
}
