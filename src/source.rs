//! src/source.rs
//!
//! Local hit sources feeding shared graphs from background threads.

pub mod demo;
pub mod serial;

pub use demo::start_demo_traffic;
pub use serial::start_serial_reader;
