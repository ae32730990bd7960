//! trip-viz core
//!
//! Turns a computed trip plan into map annotations (route markers plus a
//! viewport bounding box) and printable duty-log grid data.

pub mod plan;
pub mod polyline;
pub mod timeline;
pub mod interpolate;
pub mod fuel;
pub mod annotate;
pub mod log_grid;
pub mod planner_api;
