// src/export/xlsx.rs

use crate::core::grouping::WeekGroup;
use crate::core::summary::DriverReport;
use crate::errors::AppResult;
use crate::export::model::{BREAKDOWN_HEADERS, HEADERS, SUMMARY_TITLE, entry_to_row};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use crate::utils::excel_date::time_to_serial;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub const SHEET_NAME: &str = "Alle_KWs";

/// First column of the summary panel (one blank column after the week blocks).
const SUMMARY_COL: u16 = HEADERS.len() as u16 + 1;
/// First column of the tour breakdown panel.
const BREAKDOWN_COL: u16 = SUMMARY_COL + 3;

/// Column index of "Uhrzeit" in a data row.
const TIME_COL: usize = 5;

struct Styles {
    title: Format,
    header: Format,
    cell: Format,
    time: Format,
}

impl Styles {
    fn new() -> Self {
        let centered = Format::new()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        Self {
            title: centered
                .clone()
                .set_bold()
                .set_font_size(14)
                .set_background_color(Color::RGB(0xBDD7EE))
                .set_pattern(FormatPattern::Solid),
            header: centered
                .clone()
                .set_bold()
                .set_background_color(Color::RGB(0xD9E1F2))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin),
            time: centered.clone().set_num_format("hh:mm"),
            cell: centered,
        }
    }
}

/// Tracks the widest display value per column.
#[derive(Default)]
struct ColumnWidths(Vec<usize>);

impl ColumnWidths {
    fn track(&mut self, col: u16, s: &str) {
        let col = col as usize;
        if self.0.len() <= col {
            self.0.resize(col + 1, 0);
        }
        self.0[col] = self.0[col].max(UnicodeWidthStr::width(s));
    }

    fn apply(&self, worksheet: &mut Worksheet, factor: f64) -> AppResult<()> {
        for (col, w) in self.0.iter().enumerate().filter(|(_, w)| **w > 0) {
            worksheet.set_column_width(col as u16, (*w as f64 * factor).trunc())?;
        }
        Ok(())
    }
}

/// Writes the week-block report, optionally with the per-driver panels.
///
/// Each (year, week) group gets a merged title row, a header row and one row
/// per entry, followed by an empty row.
pub(crate) fn export_report_xlsx(
    groups: &[WeekGroup],
    driver: Option<&DriverReport>,
    path: &Path,
    width_factor: f64,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let styles = Styles::new();
    let mut widths = ColumnWidths::default();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let last_col = HEADERS.len() as u16 - 1;
    let mut row: u32 = 0;

    for group in groups {
        worksheet.merge_range(row, 0, row, last_col, &group.title(), &styles.title)?;
        row += 1;

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_with_format(row, col as u16, *header, &styles.header)?;
            widths.track(col as u16, header);
        }
        row += 1;

        for entry in &group.entries {
            for (col, value) in entry_to_row(entry).iter().enumerate() {
                let fmt = if col == TIME_COL { &styles.time } else { &styles.cell };
                write_cell(worksheet, row, col as u16, value, fmt)?;
                widths.track(col as u16, value);
            }
            row += 1;
        }

        // spacer between weeks
        row += 1;
    }

    if let Some(report) = driver {
        write_driver_panels(worksheet, report, &styles, &mut widths)?;
    }

    widths.apply(worksheet, width_factor)?;
    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_driver_panels(
    worksheet: &mut Worksheet,
    report: &DriverReport,
    styles: &Styles,
    widths: &mut ColumnWidths,
) -> AppResult<()> {
    // summary
    worksheet.merge_range(0, SUMMARY_COL, 0, SUMMARY_COL + 1, SUMMARY_TITLE, &styles.header)?;
    worksheet.write_with_format(1, SUMMARY_COL, "Fahrer", &styles.cell)?;
    worksheet.write_with_format(1, SUMMARY_COL + 1, report.driver.as_str(), &styles.cell)?;
    widths.track(SUMMARY_COL + 1, &report.driver);

    for (i, (label, count)) in report.summary.rows().iter().enumerate() {
        let row = i as u32 + 2;
        worksheet.write_with_format(row, SUMMARY_COL, *label, &styles.cell)?;
        worksheet.write_with_format(row, SUMMARY_COL + 1, *count as f64, &styles.cell)?;
        widths.track(SUMMARY_COL, label);
    }

    // tour breakdown
    for (i, header) in BREAKDOWN_HEADERS.iter().enumerate() {
        let col = BREAKDOWN_COL + i as u16;
        worksheet.write_with_format(0, col, *header, &styles.header)?;
        widths.track(col, header);
    }
    for (i, (tour, count)) in report.tours.iter().enumerate() {
        let row = i as u32 + 1;
        write_cell(worksheet, row, BREAKDOWN_COL, tour, &styles.cell)?;
        worksheet.write_with_format(row, BREAKDOWN_COL + 1, *count as f64, &styles.cell)?;
        widths.track(BREAKDOWN_COL, tour);
        widths.track(BREAKDOWN_COL + 1, &count.to_string());
    }

    Ok(())
}

/// Writes plain integers as numbers and "HH:MM" as a time; everything else as text.
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, fmt: &Format) -> AppResult<()> {
    if let Some(serial) = time_to_serial(s) {
        worksheet.write_with_format(row, col, serial, fmt)?;
        return Ok(());
    }

    if let Some(num) = plain_integer(s) {
        worksheet.write_with_format(row, col, num, fmt)?;
        return Ok(());
    }

    worksheet.write_with_format(row, col, s, fmt)?;
    Ok(())
}

/// Digits only, no leading zero, exact as f64. Ids like "0042" or "1e3" stay text.
fn plain_integer(s: &str) -> Option<f64> {
    let exact = !s.is_empty()
        && s.len() <= 15
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s == "0" || !s.starts_with('0'));

    if exact { s.parse::<f64>().ok() } else { None }
}
