//! Marker assembly for trip-plan map annotation.
//!
//! Orchestrates geometry decoding, timeline reduction, interpolation and
//! fuel-stop planning into the ordered marker list consumed by the map
//! renderer, plus a bounding box for viewport fitting. Pure function of
//! the plan; every failure mode degrades to a smaller marker set.

use serde::Serialize;
use tracing::{debug, warn};

use crate::fuel::{FuelStop, plan_fuel_stops};
use crate::interpolate;
use crate::plan::TripPlanResponse;
use crate::polyline::{self, DEFAULT_PRECISION};
use crate::timeline::{EventTimeline, build_checkpoints};

/// Kind of map annotation, in display vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Start,
    Pickup,
    Fuel,
    Rest,
    Sleep,
    Dropoff,
}

impl MarkerKind {
    /// Label shown next to the marker on the map.
    pub fn label(self) -> &'static str {
        match self {
            MarkerKind::Start => "Start",
            MarkerKind::Pickup => "Pickup",
            MarkerKind::Fuel => "Fuel",
            MarkerKind::Rest => "Rest",
            MarkerKind::Sleep => "Sleep",
            MarkerKind::Dropoff => "Destination",
        }
    }
}

/// One map annotation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    /// (lat, lon)
    pub position: (f64, f64),
    pub label: String,
    pub popup: Option<String>,
}

impl Marker {
    fn new(kind: MarkerKind, position: (f64, f64), popup: Option<String>) -> Self {
        Self {
            kind,
            position,
            label: kind.label().to_string(),
            popup,
        }
    }
}

/// Geometric envelope of the decoded route, for viewport auto-fitting.
///
/// Corners are meaningful only while `is_valid`; an invalid box tells the
/// renderer to fall back to a neutral view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    sw: (f64, f64),
    ne: (f64, f64),
    is_valid: bool,
}

impl BoundingBox {
    pub fn empty() -> Self {
        Self {
            sw: (0.0, 0.0),
            ne: (0.0, 0.0),
            is_valid: false,
        }
    }

    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let mut bounds = Self::empty();
        for &point in points {
            bounds.extend(point);
        }
        bounds
    }

    /// Grows the box to cover `point`.
    pub fn extend(&mut self, point: (f64, f64)) {
        if self.is_valid {
            self.sw = (self.sw.0.min(point.0), self.sw.1.min(point.1));
            self.ne = (self.ne.0.max(point.0), self.ne.1.max(point.1));
        } else {
            self.sw = point;
            self.ne = point;
            self.is_valid = true;
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// South-west corner.
    pub fn sw(&self) -> (f64, f64) {
        self.sw
    }

    /// North-east corner.
    pub fn ne(&self) -> (f64, f64) {
        self.ne
    }
}

/// Builds the ordered marker list and bounding box for a trip plan.
///
/// The first marker is always `start` at the declared route start and the
/// last is always `dropoff` at the declared route end; everything in
/// between is interpolated from driving time. A plan with no driving time
/// yields exactly those two markers.
pub fn annotate_plan(plan: &TripPlanResponse) -> (Vec<Marker>, BoundingBox) {
    let decoded = match polyline::decode(&plan.routes.geometry, DEFAULT_PRECISION) {
        Ok(line) => line,
        Err(err) => {
            warn!(error = %err, "route geometry malformed; continuing with decoded prefix");
            err.into_decoded()
        }
    };
    let points = decoded.points();
    let bounds = BoundingBox::from_points(points);

    let timeline = build_checkpoints(&plan.events);

    let mut markers = vec![Marker::new(MarkerKind::Start, plan.routes.start_coords, None)];

    if timeline.has_driving() {
        let fuel_stops = plan_fuel_stops(&timeline, plan.routes.distance_miles);
        let mut pending_fuel = fuel_stops.iter().peekable();

        for (event, checkpoint) in plan.events.iter().zip(&timeline.checkpoints) {
            if event.is_driving() {
                while let Some(stop) =
                    pending_fuel.next_if(|stop| stop.event_index == checkpoint.event_index)
                {
                    push_fuel_marker(&mut markers, stop, &timeline, points);
                }
            } else if let Some(reason) = event.reason.as_deref() {
                if let Some(kind) = classify_stop(reason) {
                    push_stop_marker(&mut markers, kind, reason, checkpoint.hours_before, &timeline, points);
                }
            }
        }
    }

    markers.push(Marker::new(
        MarkerKind::Dropoff,
        plan.routes.end_coords,
        Some("Final Destination".to_string()),
    ));

    (markers, bounds)
}

fn push_fuel_marker(
    markers: &mut Vec<Marker>,
    stop: &FuelStop,
    timeline: &EventTimeline,
    points: &[(f64, f64)],
) {
    let position = interpolate::segment_index(stop.at_hours, timeline.total_driving_hours, points.len())
        .and_then(|index| points.get(index).copied());

    match position {
        Some(position) => markers.push(Marker::new(
            MarkerKind::Fuel,
            position,
            Some(format!("Fuel Stop (~{:.0} miles)", stop.threshold_miles)),
        )),
        None => debug!(
            threshold_miles = stop.threshold_miles,
            "no geometry point for fuel stop; marker omitted"
        ),
    }
}

fn push_stop_marker(
    markers: &mut Vec<Marker>,
    kind: MarkerKind,
    reason: &str,
    hours_before: f64,
    timeline: &EventTimeline,
    points: &[(f64, f64)],
) {
    let position = interpolate::event_index(hours_before, timeline.total_driving_hours, points.len())
        .and_then(|index| points.get(index).copied());

    match position {
        Some(position) => {
            markers.push(Marker::new(kind, position, Some(reason.to_string())));
        }
        None => debug!(reason, "no geometry point for stop event; marker omitted"),
    }
}

/// Resolves a non-driving event's reason to a marker kind.
///
/// Unmatched reasons produce no marker; that is expected, not an error.
fn classify_stop(reason: &str) -> Option<MarkerKind> {
    if reason == "Pickup" {
        Some(MarkerKind::Pickup)
    } else if reason.contains("30-min") {
        Some(MarkerKind::Rest)
    } else if reason.contains("10-hour") {
        Some(MarkerKind::Sleep)
    } else {
        None
    }
}
