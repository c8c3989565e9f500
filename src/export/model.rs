// src/export/model.rs

use crate::models::TourEntry;

/// Column headers of the week blocks and the flat exports.
pub(crate) const HEADERS: [&str; 7] = ["KW", "Jahr", "Datum", "Name", "Tour", "Uhrzeit", "LKW"];

/// Header of the per-driver summary panel.
pub(crate) const SUMMARY_TITLE: &str = "Zusammenfassung";

/// Headers of the tour breakdown panel.
pub(crate) const BREAKDOWN_HEADERS: [&str; 2] = ["Tour", "Anzahl"];

/// Report cells of one entry, in header order.
pub(crate) fn entry_to_row(e: &TourEntry) -> [String; 7] {
    [
        e.week.to_string(),
        e.year.to_string(),
        e.date_display.clone(),
        e.driver_name.clone(),
        e.tour_id.clone(),
        e.time_display.clone(),
        e.vehicle_id.clone(),
    ]
}
