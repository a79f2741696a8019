//! Core utilities for the Sleeper Fantasy Football CLI
//!
//! - `logging`: tracing subscriber setup for the binary

pub mod logging;

pub use logging::init_logging;
