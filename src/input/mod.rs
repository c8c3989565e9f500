//! Readers turning input files into [`RawRow`]s.

mod csv_reader;
mod spreadsheet;

pub use csv_reader::read_csv;
pub use spreadsheet::{cell_from_data, read_spreadsheet};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::RawRow;
use std::path::Path;

/// Reads the data rows of `path` (header block already removed).
pub fn read_rows(path: &Path, cfg: &Config) -> AppResult<Vec<RawRow>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let rows = match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_spreadsheet(path, cfg.sheet.as_deref())?,
        "csv" => read_csv(path, cfg.csv_delimiter as u8)?,
        _ => {
            return Err(AppError::UnsupportedInput(format!(
                "{} (expected .xlsx, .xlsm, .xlsb, .xls, .ods or .csv)",
                path.display()
            )));
        }
    };

    Ok(rows.into_iter().skip(cfg.header_rows).collect())
}
