//! Trip-plan and daily-log wire types.
//!
//! These mirror the trip-planning collaborator's JSON contract. The engine
//! consumes them as-is; nothing here is mutated after deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Driver duty status for a single plan event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DutyStatus {
    Driving,
    OnDuty,
    OffDuty,
}

/// One entry in the chronological plan event sequence.
///
/// Order is significant: events are applied in sequence when mapping
/// driving time onto the route geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEvent {
    pub status: DutyStatus,
    pub duration_hours: f64,
    /// Free-text reason for non-driving events ("Pickup", "30-min break", ...).
    #[serde(default)]
    pub reason: Option<String>,
}

impl PlanEvent {
    pub fn is_driving(&self) -> bool {
        self.status == DutyStatus::Driving
    }
}

/// The pre-computed route attached to a trip plan.
///
/// `geometry` is an encoded polyline; coordinates are (lat, lon) and
/// serialize as two-element arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub distance_miles: f64,
    pub duration_hours: f64,
    pub geometry: String,
    pub start_coords: (f64, f64),
    pub end_coords: (f64, f64),
}

/// Full plan payload returned by the trip-planning collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlanResponse {
    pub events: Vec<PlanEvent>,
    pub routes: RoutePlan,
}

/// Trip header fields passed through to log-sheet display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: u64,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_hours_used: f64,
    pub available_cycle_hours: f64,
}

/// The four duty-hour totals recorded on a daily log.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DutyTotals {
    pub off_duty_hours: f64,
    pub sleeper_berth_hours: f64,
    pub driving_hours: f64,
    pub on_duty_not_driving_hours: f64,
}

/// One daily log record, as stored by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub totals: DutyTotals,
}
