//! Test fixtures for trip-viz.
//!
//! Provides realistic test data including:
//! - Real Chicago-to-Denver corridor waypoints
//! - Builders for plan events and full trip-plan payloads

pub mod corridor;

pub use corridor::*;
