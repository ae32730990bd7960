//! Chicago-to-Denver corridor waypoints for realistic route fixtures.
//!
//! Coordinates follow the I-80 / I-76 corridor; the densified chain stands
//! in for the planner's road geometry without needing a routing backend.

use trip_viz::plan::{DutyStatus, PlanEvent, RoutePlan, TripPlanResponse};
use trip_viz::polyline::{self, DEFAULT_PRECISION};

/// A named waypoint with coordinates.
#[derive(Debug, Clone)]
pub struct Waypoint {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Waypoint {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

// ============================================================================
// Corridor Waypoints (Chicago → Denver)
// ============================================================================

pub const CHICAGO_DENVER: &[Waypoint] = &[
    Waypoint::new("Chicago, IL", 41.8781, -87.6298),
    Waypoint::new("Joliet, IL", 41.5250, -88.0817),
    Waypoint::new("Davenport, IA", 41.5236, -90.5776),
    Waypoint::new("Iowa City, IA", 41.6611, -91.5302),
    Waypoint::new("Des Moines, IA", 41.5868, -93.6250),
    Waypoint::new("Omaha, NE", 41.2565, -95.9345),
    Waypoint::new("Lincoln, NE", 40.8136, -96.7026),
    Waypoint::new("Kearney, NE", 40.6993, -99.0817),
    Waypoint::new("North Platte, NE", 41.1239, -100.7654),
    Waypoint::new("Sterling, CO", 40.6255, -103.2077),
    Waypoint::new("Fort Morgan, CO", 40.2503, -103.8000),
    Waypoint::new("Denver, CO", 39.7392, -104.9903),
];

// ============================================================================
// Route Builders
// ============================================================================

/// Densifies the corridor into a coordinate chain, `points_per_leg`
/// interpolated steps per waypoint pair plus the final endpoint.
pub fn densified_route(points_per_leg: usize) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    for leg in CHICAGO_DENVER.windows(2) {
        let (from, to) = (leg[0].coords(), leg[1].coords());
        for step in 0..points_per_leg {
            let t = step as f64 / points_per_leg as f64;
            points.push((from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t));
        }
    }
    if let Some(last) = CHICAGO_DENVER.last() {
        points.push(last.coords());
    }
    points
}

/// Encodes a coordinate chain as planner-style route geometry.
pub fn geometry_for(points: &[(f64, f64)]) -> String {
    polyline::encode(points, DEFAULT_PRECISION)
}

/// Builds a full plan payload over the given coordinate chain.
pub fn plan_over(
    events: Vec<PlanEvent>,
    distance_miles: f64,
    points: &[(f64, f64)],
) -> TripPlanResponse {
    let total_driving: f64 = events
        .iter()
        .filter(|e| e.status == DutyStatus::Driving)
        .map(|e| e.duration_hours)
        .sum();

    TripPlanResponse {
        events,
        routes: RoutePlan {
            distance_miles,
            duration_hours: total_driving,
            geometry: geometry_for(points),
            start_coords: points.first().copied().unwrap_or((0.0, 0.0)),
            end_coords: points.last().copied().unwrap_or((0.0, 0.0)),
        },
    }
}

// ============================================================================
// Event Builders
// ============================================================================

pub fn driving(hours: f64) -> PlanEvent {
    PlanEvent {
        status: DutyStatus::Driving,
        duration_hours: hours,
        reason: None,
    }
}

pub fn off_duty(hours: f64, reason: &str) -> PlanEvent {
    PlanEvent {
        status: DutyStatus::OffDuty,
        duration_hours: hours,
        reason: Some(reason.to_string()),
    }
}

pub fn on_duty(hours: f64, reason: &str) -> PlanEvent {
    PlanEvent {
        status: DutyStatus::OnDuty,
        duration_hours: hours,
        reason: Some(reason.to_string()),
    }
}
