use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, RawRow};
use calamine::{Data, Reader, open_workbook_auto};
use chrono::{NaiveDateTime, NaiveTime};
use std::path::Path;

/// Reads a worksheet into rows addressed by absolute column (A = 0).
///
/// Calamine trims the used range, so a sheet whose first column or row is
/// empty would otherwise shift every position.
pub fn read_spreadsheet(path: &Path, sheet: Option<&str>) -> AppResult<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| AppError::NoWorksheet(format!("{} has no worksheets", path.display())))?,
    };

    if !workbook.sheet_names().contains(&sheet_name) {
        return Err(AppError::NoWorksheet(format!(
            "'{sheet_name}' in {}",
            path.display()
        )));
    }

    let range = workbook.worksheet_range(&sheet_name)?;
    let Some((last_row, last_col)) = range.end() else {
        return Ok(Vec::new());
    };

    let rows: Vec<RawRow> = (0..=last_row)
        .map(|r| {
            (0..=last_col)
                .map(|c| range.get_value((r, c)).map(cell_from_data).unwrap_or_default())
                .collect::<RawRow>()
        })
        .collect();

    Ok(rows)
}

/// Maps a calamine cell to a [`CellValue`].
pub fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => parse_iso_time(s)
            .map(CellValue::Time)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d"]
        .iter()
        .find_map(|fmt| {
            NaiveDateTime::parse_from_str(s, fmt).ok().or_else(|| {
                chrono::NaiveDate::parse_from_str(s, fmt)
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
        })
}

/// ODS stores times of day as ISO durations such as "PT07H30M00S".
fn parse_iso_time(s: &str) -> Option<NaiveTime> {
    let body = s.strip_prefix("PT")?;
    let (h, rest) = body.split_once('H')?;
    let (m, _) = rest.split_once('M')?;
    NaiveTime::from_hms_opt(h.parse().ok()?, m.parse().ok()?, 0)
}
