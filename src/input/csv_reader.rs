use crate::errors::AppResult;
use crate::models::{CellValue, RawRow};
use std::path::Path;

/// Reads a delimited export of a tour sheet. Every non-blank field is text;
/// the header block is treated like any other row.
pub fn read_csv(path: &Path, delimiter: u8) -> AppResult<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|field| {
                if field.trim().is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::text(field)
                }
            })
            .collect();
        rows.push(row);
    }

    Ok(rows)
}
