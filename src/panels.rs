//! src/panels.rs
//!
//! Terminal panels drawn by the host application.

pub mod graph;
pub mod history;
pub mod info;
pub mod paragraph;
pub mod title;

pub use graph::{GraphPanel, LayerView};
pub use history::HistoryPanel;
pub use info::InfoPanel;
pub use paragraph::ParagraphPanel;
pub use title::TitlePanel;
