// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{HEADERS, entry_to_row};
use crate::export::notify_export_success;
use crate::models::TourEntry;
use std::fs;
use std::path::Path;

/// Flat CSV with the report's column names, one line per entry.
pub(crate) fn export_csv(entries: &[TourEntry], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(HEADERS)?;
    for e in entries {
        wtr.write_record(entry_to_row(e))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Pretty-printed JSON array of the entries.
pub(crate) fn export_json(entries: &[TourEntry], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(entries)?;
    fs::write(path, json_data)?;

    notify_export_success("JSON", path);
    Ok(())
}
