//! src/graph/options.rs
//!
//! Untyped options object accepted by `HitGraph::from_options`. Keys mirror
//! the setters in camelCase; `width` and `height` may hold any TOML value and
//! are checked to be numbers when the graph is built.

use serde::Deserialize;

use super::config::{AxisCeiling, GraphConfig};
use crate::error::GraphError;
use crate::surface::clamp_dimension;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphOptions {
    pub width: Option<toml::Value>,
    pub height: Option<toml::Value>,
    pub bar_width: Option<f64>,
    pub bar_spacing: Option<f64>,
    pub gutter: Option<f64>,
    pub background_bar_colour: Option<String>,
    pub history_bar_colour: Option<String>,
    pub axes_font: Option<String>,
    pub frame_rate: Option<f64>,
    pub scale_threshold: Option<f64>,
    pub rescale_axes: Option<bool>,
    pub track_per_second_stats: Option<bool>,
    pub start_guard: Option<bool>,
    pub axis_ceiling: Option<AxisCeiling>,
}

/// Accepts TOML integers and finite floats.
fn number(value: Option<&toml::Value>) -> Option<f64> {
    match value? {
        toml::Value::Integer(i) => Some(*i as f64),
        toml::Value::Float(f) if f.is_finite() => Some(*f),
        _ => None,
    }
}

impl GraphOptions {
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width: Some(toml::Value::Float(width)),
            height: Some(toml::Value::Float(height)),
            ..Self::default()
        }
    }

    /// Overlay these options on `base`. Height is checked before width;
    /// both are clamped to the largest surface size.
    pub fn apply(&self, base: GraphConfig) -> Result<GraphConfig, GraphError> {
        let height = number(self.height.as_ref()).ok_or(GraphError::InvalidHeight)?;
        let width = number(self.width.as_ref()).ok_or(GraphError::InvalidWidth)?;
        let (width, height) = (clamp_dimension(width), clamp_dimension(height));

        let mut cfg = base;
        cfg.width = width;
        cfg.height = height;
        if let Some(v) = self.bar_width {
            cfg.bar_width = v;
        }
        if let Some(v) = self.bar_spacing {
            cfg.bar_spacing = v;
        }
        if let Some(v) = self.gutter {
            cfg.gutter = v;
        }
        if let Some(v) = &self.background_bar_colour {
            cfg.background_bar_colour = v.clone();
        }
        if let Some(v) = &self.history_bar_colour {
            cfg.history_bar_colour = v.clone();
        }
        if let Some(v) = &self.axes_font {
            cfg.axes_font = v.clone();
        }
        if let Some(v) = self.frame_rate.filter(|r| *r > 0.0) {
            cfg.frame_rate = v;
        }
        if let Some(v) = self.scale_threshold {
            cfg.scale_threshold = v.clamp(f64::MIN_POSITIVE, 1.0);
        }
        if let Some(v) = self.rescale_axes {
            cfg.rescale_axes = v;
        }
        if let Some(v) = self.track_per_second_stats {
            cfg.track_per_second_stats = v;
        }
        if let Some(v) = self.start_guard {
            cfg.start_guard = v;
        }
        if let Some(v) = self.axis_ceiling {
            cfg.axis_ceiling = v;
        }
        Ok(cfg)
    }
}
