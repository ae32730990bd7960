//! Daily duty-log grid and printable log-sheet assembly.
//!
//! Independent of the map-annotation pipeline: fed by a daily-log record,
//! it stacks the four duty-hour totals into non-overlapping 24-hour grid
//! segments and assembles the header fields the print layout needs.

use chrono::NaiveDate;
use serde::Serialize;

use crate::plan::{DailyLog, DutyTotals, Trip};

/// Duty-status category, in the fixed row order of the printed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyCategory {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDutyNotDriving,
}

impl DutyCategory {
    /// Fixed grid order; stacking consumes categories in this order.
    pub const ALL: [DutyCategory; 4] = [
        DutyCategory::OffDuty,
        DutyCategory::SleeperBerth,
        DutyCategory::Driving,
        DutyCategory::OnDutyNotDriving,
    ];

    /// Printed row label.
    pub fn label(self) -> &'static str {
        match self {
            DutyCategory::OffDuty => "1. Off Duty",
            DutyCategory::SleeperBerth => "2. Sleeper Berth",
            DutyCategory::Driving => "3. Driving",
            DutyCategory::OnDutyNotDriving => "4. On Duty (not driving)",
        }
    }
}

/// One stacked timeline segment on the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutySegment {
    pub category: DutyCategory,
    /// Hour-of-day the bar starts at, in [0, 24).
    pub start_hour: f64,
    pub duration_hours: f64,
}

/// A category's raw total for numeric display, reported even when zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: DutyCategory,
    pub hours: f64,
}

/// Grid data for one daily log: stacked segments plus numeric totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutyGrid {
    pub segments: Vec<DutySegment>,
    pub totals: Vec<CategoryTotal>,
}

/// Stacks the four duty totals into non-overlapping grid segments.
///
/// Each non-zero category starts where the previous non-zero category
/// ended; zero categories contribute no segment but still report their
/// total. This is a stacked display convention, not a chronological
/// reconstruction of when each status occurred during the day.
pub fn build_grid(totals: &DutyTotals) -> DutyGrid {
    let mut cumulative = 0.0;
    let mut segments = Vec::new();
    let mut reported = Vec::with_capacity(DutyCategory::ALL.len());

    for category in DutyCategory::ALL {
        let hours = hours_for(totals, category);
        if hours > 0.0 {
            segments.push(DutySegment {
                category,
                start_hour: cumulative,
                duration_hours: hours,
            });
            cumulative += hours;
        }
        reported.push(CategoryTotal { category, hours });
    }

    DutyGrid {
        segments,
        totals: reported,
    }
}

/// Printable log-sheet data: the grid plus header and recap fields.
///
/// Header fields are pass-through display data owned by the trip and log
/// records; only the on-duty recap is computed here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogSheet {
    pub date: NaiveDate,
    pub from_location: String,
    pub to_location: String,
    /// On-duty hours today (grid lines 3 and 4).
    pub on_duty_today: f64,
    /// Total hours on duty over the last 7 days.
    pub cycle_hours_used: f64,
    /// Hours available tomorrow.
    pub cycle_hours_available: f64,
    pub grid: DutyGrid,
}

/// Assembles the printable sheet for one daily log of a trip.
pub fn build_log_sheet(trip: &Trip, log: &DailyLog) -> LogSheet {
    LogSheet {
        date: log.date,
        from_location: trip.pickup_location.clone(),
        to_location: trip.dropoff_location.clone(),
        on_duty_today: log.totals.driving_hours + log.totals.on_duty_not_driving_hours,
        cycle_hours_used: trip.current_cycle_hours_used,
        cycle_hours_available: trip.available_cycle_hours,
        grid: build_grid(&log.totals),
    }
}

fn hours_for(totals: &DutyTotals, category: DutyCategory) -> f64 {
    match category {
        DutyCategory::OffDuty => totals.off_duty_hours,
        DutyCategory::SleeperBerth => totals.sleeper_berth_hours,
        DutyCategory::Driving => totals.driving_hours,
        DutyCategory::OnDutyNotDriving => totals.on_duty_not_driving_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(off: f64, sleeper: f64, driving: f64, on_duty: f64) -> DutyTotals {
        DutyTotals {
            off_duty_hours: off,
            sleeper_berth_hours: sleeper,
            driving_hours: driving,
            on_duty_not_driving_hours: on_duty,
        }
    }

    #[test]
    fn segments_stack_in_fixed_order() {
        let grid = build_grid(&totals(8.0, 2.0, 10.0, 4.0));

        assert_eq!(grid.segments.len(), 4);
        assert_eq!(grid.segments[0].category, DutyCategory::OffDuty);
        assert_eq!(grid.segments[0].start_hour, 0.0);
        assert_eq!(grid.segments[1].start_hour, 8.0);
        assert_eq!(grid.segments[2].start_hour, 10.0);
        assert_eq!(grid.segments[3].start_hour, 20.0);
    }

    #[test]
    fn segment_durations_sum_to_input_total() {
        let input = totals(7.5, 0.0, 11.0, 3.5);
        let grid = build_grid(&input);

        let segment_sum: f64 = grid.segments.iter().map(|s| s.duration_hours).sum();
        assert_eq!(segment_sum, 7.5 + 11.0 + 3.5);
    }

    #[test]
    fn segments_never_overlap() {
        let grid = build_grid(&totals(6.0, 2.0, 9.0, 5.0));
        for pair in grid.segments.windows(2) {
            assert!(pair[0].start_hour + pair[0].duration_hours <= pair[1].start_hour);
        }
    }

    #[test]
    fn zero_category_yields_no_segment_but_reports_total() {
        let grid = build_grid(&totals(10.0, 0.0, 12.0, 2.0));

        assert_eq!(grid.segments.len(), 3);
        assert!(grid.segments.iter().all(|s| s.category != DutyCategory::SleeperBerth));

        assert_eq!(grid.totals.len(), 4);
        assert_eq!(grid.totals[1].category, DutyCategory::SleeperBerth);
        assert_eq!(grid.totals[1].hours, 0.0);
    }

    #[test]
    fn all_zero_totals_yield_empty_grid() {
        let grid = build_grid(&totals(0.0, 0.0, 0.0, 0.0));
        assert!(grid.segments.is_empty());
        assert_eq!(grid.totals.len(), 4);
    }

    #[test]
    fn zero_following_category_keeps_offset() {
        // Sleeper berth is zero: driving starts right after off duty.
        let grid = build_grid(&totals(8.0, 0.0, 10.0, 0.0));
        assert_eq!(grid.segments[1].category, DutyCategory::Driving);
        assert_eq!(grid.segments[1].start_hour, 8.0);
    }

    #[test]
    fn row_labels_match_printed_sheet() {
        assert_eq!(DutyCategory::OffDuty.label(), "1. Off Duty");
        assert_eq!(DutyCategory::SleeperBerth.label(), "2. Sleeper Berth");
        assert_eq!(DutyCategory::Driving.label(), "3. Driving");
        assert_eq!(DutyCategory::OnDutyNotDriving.label(), "4. On Duty (not driving)");
    }

    #[test]
    fn log_sheet_recap_sums_driving_and_on_duty() {
        let trip = Trip {
            id: 1,
            current_location: "Chicago, IL".to_string(),
            pickup_location: "Chicago, IL".to_string(),
            dropoff_location: "Denver, CO".to_string(),
            current_cycle_hours_used: 45.5,
            available_cycle_hours: 24.5,
        };
        let log = DailyLog {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            totals: totals(8.0, 2.0, 10.0, 4.0),
        };

        let sheet = build_log_sheet(&trip, &log);
        assert_eq!(sheet.on_duty_today, 14.0);
        assert_eq!(sheet.cycle_hours_used, 45.5);
        assert_eq!(sheet.cycle_hours_available, 24.5);
        assert_eq!(sheet.from_location, "Chicago, IL");
        assert_eq!(sheet.to_location, "Denver, CO");
        assert_eq!(sheet.grid.segments.len(), 4);
    }
}
