// src/export/logic.rs

use crate::core::grouping::{flatten, group_by_week};
use crate::core::summary::DriverReport;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_report_xlsx;
use crate::models::TourEntry;
use crate::ui::messages::warning;
use std::path::Path;

/// What to write and where.
pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    pub path: &'a Path,
    /// Adds the summary and tour breakdown panels (xlsx only).
    pub driver: Option<&'a DriverReport>,
    pub force: bool,
    pub width_factor: f64,
}

/// High-level export of extracted entries.
pub struct ExportLogic;

impl ExportLogic {
    /// Sorts, groups and writes `entries`.
    ///
    /// Returns `Ok(false)` without touching the filesystem when there is
    /// nothing to export.
    pub fn export(entries: Vec<TourEntry>, req: &ExportRequest<'_>) -> AppResult<bool> {
        if entries.is_empty() {
            warning("No entries found for the selected files and driver. Nothing to export.");
            return Ok(false);
        }

        ensure_writable(req.path, req.force)?;

        let groups = group_by_week(entries);
        tracing::debug!(
            format = req.format.as_str(),
            path = %req.path.display(),
            weeks = groups.len(),
            "writing report"
        );

        match req.format {
            ExportFormat::Xlsx => export_report_xlsx(&groups, req.driver, req.path, req.width_factor)?,
            ExportFormat::Csv => export_csv(&flatten(groups), req.path)?,
            ExportFormat::Json => export_json(&flatten(groups), req.path)?,
        }

        Ok(true)
    }
}
