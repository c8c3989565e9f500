//! Per-driver counters and tour breakdown.

use crate::models::TourEntry;
use crate::utils::date::SATURDAY;
use serde::Serialize;
use std::collections::BTreeMap;

/// Tour ids marking an absence instead of a driven tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absence {
    Sick,
    Vacation,
    Compensatory,
}

impl Absence {
    pub const ALL: [Absence; 3] = [Absence::Sick, Absence::Vacation, Absence::Compensatory];

    pub fn marker(self) -> &'static str {
        match self {
            Absence::Sick => "krank",
            Absence::Vacation => "urlaub",
            Absence::Compensatory => "ausgleich",
        }
    }

    /// Case-insensitive substring match on the tour id.
    pub fn of(tour_id: &str) -> Option<Absence> {
        let lower = tour_id.to_lowercase();
        Self::ALL.into_iter().find(|a| lower.contains(a.marker()))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DriverSummary {
    pub sick: usize,
    pub vacation: usize,
    pub compensatory: usize,
    pub days_worked: usize,
    pub saturdays_worked: usize,
}

impl DriverSummary {
    pub fn from_entries(entries: &[TourEntry]) -> Self {
        let mut s = DriverSummary::default();

        for e in entries {
            let lower = e.tour_id.to_lowercase();
            // an id may name several categories; each counter checks on its own
            if lower.contains(Absence::Sick.marker()) {
                s.sick += 1;
            }
            if lower.contains(Absence::Vacation.marker()) {
                s.vacation += 1;
            }
            if lower.contains(Absence::Compensatory.marker()) {
                s.compensatory += 1;
            }

            if e.has_time() {
                s.days_worked += 1;
                if e.date_display.contains(SATURDAY) {
                    s.saturdays_worked += 1;
                }
            }
        }

        s
    }

    /// Label/value rows in report order.
    pub fn rows(&self) -> [(&'static str, usize); 5] {
        [
            ("Krank", self.sick),
            ("Urlaub", self.vacation),
            ("Ausgleich", self.compensatory),
            ("Arbeitstage", self.days_worked),
            ("davon Samstage", self.saturdays_worked),
        ]
    }
}

/// Occurrences of every driven tour id, sorted by id.
pub fn tour_breakdown(entries: &[TourEntry]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for e in entries.iter().filter(|e| Absence::of(&e.tour_id).is_none()) {
        *counts.entry(e.tour_id.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(tour, n)| (tour.to_string(), n))
        .collect()
}

/// Everything the per-driver report adds next to the week blocks.
#[derive(Debug, Clone, Serialize)]
pub struct DriverReport {
    pub driver: String,
    pub summary: DriverSummary,
    pub tours: Vec<(String, usize)>,
}

impl DriverReport {
    pub fn new(driver: &str, entries: &[TourEntry]) -> Self {
        Self {
            driver: driver.to_string(),
            summary: DriverSummary::from_entries(entries),
            tours: tour_breakdown(entries),
        }
    }
}
