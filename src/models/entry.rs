use chrono::NaiveDate;
use serde::Serialize;

/// Sentinel shown when a tour has no usable start time.
pub const TIME_NOT_AVAILABLE: &str = "n. A.";

/// One driver assignment extracted from a tour sheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourEntry {
    pub week: u32,
    pub year: i32,
    pub date_display: String,
    pub date_sortable: NaiveDate,
    pub driver_name: String,
    pub tour_id: String,
    pub time_display: String,
    pub vehicle_id: String,
}

impl TourEntry {
    pub fn has_time(&self) -> bool {
        self.time_display != TIME_NOT_AVAILABLE
    }

    /// Grouping key of the report blocks.
    pub fn week_key(&self) -> (i32, u32) {
        (self.year, self.week)
    }
}
