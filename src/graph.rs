//! src/graph.rs
//!
//! Top-level `graph` module: configuration, history data, layout, rendering
//! and the `HitGraph` widget tying them together.

pub mod animate;
pub mod config;
pub mod container;
pub mod data;
pub mod layout;
pub mod options;
pub mod render;
pub mod shared;
pub mod widget;

/// Re-exports
pub use config::{AxisCeiling, GraphConfig, Variant};
pub use container::{Container, CounterElements, SharedText, TextSink};
pub use data::{Accumulator, HistoryBuffer};
pub use options::GraphOptions;
pub use shared::{GraphShared, SharedGraph};
pub use widget::HitGraph;
