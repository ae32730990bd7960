//! Fuel-stop threshold planning.
//!
//! Walks the driving segments of a timeline and finds every fixed-mileage
//! refueling threshold crossed along the way. Distance within a segment is
//! derived from its share of total driving time against the declared route
//! distance (constant-speed assumption — a modeling limitation, not a
//! per-point geometry measurement).

use crate::timeline::EventTimeline;

/// Mileage interval between refueling stops.
pub const FUEL_STOP_INTERVAL_MILES: f64 = 1000.0;

/// One crossed refueling threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelStop {
    /// The threshold mileage (a multiple of the stop interval).
    pub threshold_miles: f64,
    /// Global cumulative driving hours at the crossing.
    pub at_hours: f64,
    /// Index of the driving event that crossed the threshold.
    pub event_index: usize,
}

/// Finds every fuel-stop threshold crossed over the whole plan.
///
/// Stops come out in ascending threshold order; a single long segment can
/// contribute several. Returns nothing when the timeline has no driving
/// time.
pub fn plan_fuel_stops(timeline: &EventTimeline, route_distance_miles: f64) -> Vec<FuelStop> {
    if !timeline.has_driving() {
        return Vec::new();
    }

    let total_hours = timeline.total_driving_hours;
    let mut stops = Vec::new();
    let mut cumulative_distance = 0.0;
    let mut next_threshold = FUEL_STOP_INTERVAL_MILES;

    for checkpoint in timeline.checkpoints.iter().filter(|c| c.is_driving()) {
        let segment_duration = checkpoint.driving_hours;
        let segment_distance = (segment_duration / total_hours) * route_distance_miles;

        while next_threshold < cumulative_distance + segment_distance {
            let ratio_within_segment = (next_threshold - cumulative_distance) / segment_distance;
            stops.push(FuelStop {
                threshold_miles: next_threshold,
                at_hours: checkpoint.hours_before + segment_duration * ratio_within_segment,
                event_index: checkpoint.event_index,
            });
            next_threshold += FUEL_STOP_INTERVAL_MILES;
        }

        cumulative_distance += segment_distance;
    }

    stops
}
