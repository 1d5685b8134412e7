//! src/ui.rs
//!
//! Top-level UI module re-exporting the screen layout helpers.

pub mod node;

pub use node::{Node, Panel, columns, leaf, rows};
