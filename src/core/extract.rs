//! Tour record extraction: one worksheet row in, zero to two entries out.

use crate::core::calendar::week_and_year;
use crate::core::time_format::format_time;
use crate::models::{CellValue, ColumnLayout, TourEntry, WeekRule};
use crate::utils::date::{date_display, parse_date_text};
use crate::utils::excel_date::serial_to_date;
use chrono::NaiveDate;

/// Builds the entries of one row.
///
/// A row carries up to two driver assignments sharing date, tour, time and
/// vehicle. Each name pair with both cells filled yields one entry, first pair
/// before second. Rows without a readable date yield nothing.
pub fn extract_entries(row: &[CellValue], layout: &ColumnLayout, rule: WeekRule) -> Vec<TourEntry> {
    let Some(date) = parse_date_cell(CellValue::at(row, layout.date)) else {
        tracing::debug!(column = layout.date, "row skipped: no readable date");
        return Vec::new();
    };

    let (week, year) = week_and_year(date, rule);
    let display = date_display(date);
    let time_display = format_time(CellValue::at(row, layout.time));
    let tour_id = CellValue::at(row, layout.tour).to_string();
    let vehicle_id = CellValue::at(row, layout.vehicle).to_string();

    layout
        .name_pairs()
        .iter()
        .filter_map(|&(a, b)| driver_name(row, a, b))
        .map(|driver_name| TourEntry {
            week,
            year,
            date_display: display.clone(),
            date_sortable: date,
            driver_name,
            tour_id: tour_id.clone(),
            time_display: time_display.clone(),
            vehicle_id: vehicle_id.clone(),
        })
        .collect()
}

/// Joins a name pair, or `None` unless both cells are filled.
fn driver_name(row: &[CellValue], a: usize, b: usize) -> Option<String> {
    let (a, b) = (CellValue::at(row, a), CellValue::at(row, b));
    if a.is_blank() || b.is_blank() {
        return None;
    }
    Some(format!("{} {}", a.to_string().trim(), b.to_string().trim()))
}

/// Reads the date column: date-time cells, common text formats, or Excel serials.
pub fn parse_date_cell(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::DateTime(dt) => Some(dt.date()),
        CellValue::Text(s) => parse_date_text(s),
        CellValue::Number(n) => serial_to_date(*n),
        CellValue::Empty | CellValue::Bool(_) | CellValue::Time(_) => None,
    }
}
