//! src/net.rs
//!
//! Network hit sources.

pub mod remote;
