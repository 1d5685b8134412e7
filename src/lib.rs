//! src/lib.rs
//!
//! Real-time scrolling bar graphs of discrete "hit" events.
//!
//! A [`graph::HitGraph`] counts hits as they arrive, samples the count into a
//! fixed-length history window at a configured frame rate and redraws two
//! stacked layers: a static background of bar slots and the history bars on
//! top, scaled to the busiest interval. Time, repaint scheduling and drawing
//! are injected ([`clock::Clock`], [`frame::FrameScheduler`],
//! [`surface::Surface`]) so the same widget runs in a terminal host or a
//! headless test.
//!
//! ```
//! use hitgraph::clock::ManualClock;
//! use hitgraph::frame::RepaintScheduler;
//! use hitgraph::graph::{GraphConfig, HitGraph};
//! use hitgraph::stage::Stage;
//! use hitgraph::surface::RecordingSurface;
//!
//! let stage: Stage<RecordingSurface> = Stage::template("skyline");
//! let clock = ManualClock::new(0.0);
//! let mut graph = HitGraph::new(
//!     &stage,
//!     GraphConfig::skyline(),
//!     Box::new(clock.clone()),
//!     Box::new(RepaintScheduler::new()),
//! )
//! .unwrap();
//!
//! graph.start();
//! graph.add_hit();
//! clock.advance(60.0);
//! graph.pump();
//! assert_eq!(graph.history().latest(), Some(1));
//! ```

pub mod clock;
pub mod error;
pub mod frame;
pub mod graph;
pub mod net;
pub mod panels;
pub mod settings;
pub mod source;
pub mod stage;
pub mod surface;
pub mod ui;
