//! Driving-time to coordinate-index interpolation.
//!
//! Maps a cumulative driving-hours value to an index into the decoded
//! route geometry. Two rounding rules exist on purpose: driving-segment
//! endpoints must never overshoot the last index, while stationary-event
//! markers use the looser bound since they represent "reached up to this
//! point". The asymmetry is kept for compatibility with the existing
//! planner output.

/// Index for a position inside a driving segment (fuel stops, segment
/// endpoints): `floor(ratio * (point_count - 1))`.
pub fn segment_index(
    cumulative_hours: f64,
    total_driving_hours: f64,
    point_count: usize,
) -> Option<usize> {
    let ratio = hours_ratio(cumulative_hours, total_driving_hours)?;
    if point_count == 0 {
        return None;
    }
    Some((ratio * (point_count - 1) as f64).floor() as usize)
}

/// Index for a stationary event's marker:
/// `min(floor(ratio * point_count), point_count - 1)`.
pub fn event_index(
    cumulative_hours: f64,
    total_driving_hours: f64,
    point_count: usize,
) -> Option<usize> {
    let ratio = hours_ratio(cumulative_hours, total_driving_hours)?;
    if point_count == 0 {
        return None;
    }
    let index = (ratio * point_count as f64).floor() as usize;
    Some(index.min(point_count - 1))
}

fn hours_ratio(cumulative_hours: f64, total_driving_hours: f64) -> Option<f64> {
    if total_driving_hours <= 0.0 {
        return None;
    }
    Some((cumulative_hours / total_driving_hours).clamp(0.0, 1.0))
}
