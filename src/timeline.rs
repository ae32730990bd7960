//! Event timeline reduction.
//!
//! Reduces the chronological plan event list into cumulative driving-hour
//! checkpoints. Only driving time maps to distance travelled, so the
//! checkpoints form the time axis for all spatial interpolation.

use crate::plan::PlanEvent;

/// One plan event projected onto the driving-time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    /// Index of the source event in the plan sequence.
    pub event_index: usize,
    /// Cumulative driving hours elapsed before this event. For a
    /// non-driving event this is its projection point onto the route.
    pub hours_before: f64,
    /// Driving hours this event contributes (zero for non-driving).
    pub driving_hours: f64,
}

impl Checkpoint {
    pub fn is_driving(&self) -> bool {
        self.driving_hours > 0.0
    }
}

/// The reduced timeline: total driving hours plus one checkpoint per event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventTimeline {
    pub total_driving_hours: f64,
    pub checkpoints: Vec<Checkpoint>,
}

impl EventTimeline {
    /// Whether any driving time exists to interpolate against.
    ///
    /// When false the engine cannot place time-correlated markers and
    /// must fall back to the declared route endpoints.
    pub fn has_driving(&self) -> bool {
        self.total_driving_hours > 0.0
    }
}

/// Builds the checkpoint list for an ordered event sequence.
pub fn build_checkpoints(events: &[PlanEvent]) -> EventTimeline {
    let mut cumulative = 0.0;
    let mut checkpoints = Vec::with_capacity(events.len());

    for (event_index, event) in events.iter().enumerate() {
        let driving_hours = if event.is_driving() { event.duration_hours } else { 0.0 };
        checkpoints.push(Checkpoint {
            event_index,
            hours_before: cumulative,
            driving_hours,
        });
        cumulative += driving_hours;
    }

    EventTimeline {
        total_driving_hours: cumulative,
        checkpoints,
    }
}
