//! src/graph/config.rs
//!
//! Display parameters for a hit graph: bar geometry, surface size, colours,
//! sampling rate and the variant flags selecting scaling behaviour.

use serde::Deserialize;

use crate::surface::MAX_DIMENSION;

/// How the rescaling variant treats its axis ceiling once it has grown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisCeiling {
    /// Only ever grows: a single spike keeps the scale up indefinitely.
    #[default]
    Sticky,
    /// Recomputed from the visible history on every redraw, so it also shrinks.
    Follow,
}

/// Preset bundles of defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Gutter, labelled y-axes rescaled to four times the peak.
    #[default]
    Skyline,
    /// Full-height bars scaled to a fixed ceiling, with per-second counters.
    Activity,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    pub bar_width: f64,
    pub bar_spacing: f64,
    pub width: f64,
    pub height: f64,

    /// Margin above and below the bars reserved for axis labels.
    pub gutter: f64,

    pub background_bar_colour: String,
    pub history_bar_colour: String,
    pub axes_font: String,

    /// Samples per second.
    pub frame_rate: f64,

    /// Fraction of the height the tallest bar may use (fixed-ceiling scaling).
    pub scale_threshold: f64,

    pub rescale_axes: bool,
    pub track_per_second_stats: bool,

    /// Make repeated `start()` calls no-ops instead of starting another loop.
    pub start_guard: bool,

    pub axis_ceiling: AxisCeiling,
}

impl GraphConfig {
    pub fn skyline() -> Self {
        Self {
            bar_width: 4.0,
            bar_spacing: 2.0,
            width: 780.0,
            height: 280.0,
            gutter: 40.0,
            background_bar_colour: "#ddd".to_string(),
            history_bar_colour: "#00cccc".to_string(),
            axes_font: "13px sans-serif".to_string(),
            frame_rate: 20.0,
            scale_threshold: 0.9,
            rescale_axes: true,
            track_per_second_stats: false,
            start_guard: false,
            axis_ceiling: AxisCeiling::Sticky,
        }
    }

    pub fn activity() -> Self {
        Self {
            gutter: 0.0,
            background_bar_colour: "#cdcdcd".to_string(),
            frame_rate: 10.0,
            rescale_axes: false,
            track_per_second_stats: true,
            ..Self::skyline()
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Skyline => Self::skyline(),
            Variant::Activity => Self::activity(),
        }
    }

    /// Milliseconds between sample ticks.
    pub fn sample_interval(&self) -> f64 {
        1000.0 / self.frame_rate
    }

    /// Horizontal distance between the left edges of neighbouring bars.
    pub fn bar_step(&self) -> f64 {
        self.bar_width + self.bar_spacing
    }

    /// Number of intervals kept in the history window, at most one per
    /// pixel of the largest surface.
    pub fn history_len(&self) -> usize {
        let step = self.bar_step();
        if step <= 0.0 || !step.is_finite() || self.width <= 0.0 {
            return 0;
        }
        (self.width / step).floor().min(MAX_DIMENSION) as usize
    }

    /// Gutter in effect; fixed-ceiling graphs draw edge to edge.
    pub fn effective_gutter(&self) -> f64 {
        if self.rescale_axes { self.gutter } else { 0.0 }
    }

    /// Height available to bars between the gutters.
    pub fn drawing_height(&self) -> f64 {
        self.height - self.effective_gutter() * 2.0
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::skyline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_len_floors() {
        let mut cfg = GraphConfig::skyline();
        assert_eq!(cfg.history_len(), 130);
        cfg.width = 16.0;
        assert_eq!(cfg.history_len(), 2);
        cfg.width = 18.0;
        assert_eq!(cfg.history_len(), 3);
        cfg.bar_width = 0.0;
        cfg.bar_spacing = 0.0;
        assert_eq!(cfg.history_len(), 0);
    }

    #[test]
    fn history_len_is_bounded() {
        let cfg = GraphConfig {
            width: 4096.0,
            bar_width: 0.001,
            bar_spacing: 0.0,
            ..GraphConfig::skyline()
        };
        assert_eq!(cfg.history_len(), 4096);
        let cfg = GraphConfig {
            width: 1e12,
            ..GraphConfig::skyline()
        };
        assert_eq!(cfg.history_len(), 4096);
    }

    #[test]
    fn activity_preset_draws_edge_to_edge() {
        let cfg = GraphConfig::activity();
        assert_eq!(cfg.effective_gutter(), 0.0);
        assert_eq!(cfg.drawing_height(), cfg.height);
        assert_eq!(cfg.sample_interval(), 100.0);
        assert!(cfg.track_per_second_stats);
    }

    #[test]
    fn skyline_preset_reserves_gutter() {
        let cfg = GraphConfig::skyline();
        assert_eq!(cfg.drawing_height(), 200.0);
        assert_eq!(cfg.sample_interval(), 50.0);
    }
}
