#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::{Path, PathBuf};
use tourreport::models::{CellValue, RawRow};

/// Columns of the default layout.
pub const FIRST_NAME: (usize, usize) = (3, 4);
pub const SECOND_NAME: (usize, usize) = (6, 7);
pub const TIME: usize = 8;
pub const VEHICLE: usize = 11;
pub const DATE: usize = 14;
pub const TOUR: usize = 15;
pub const WIDTH: usize = 16;

pub fn tr() -> Command {
    cargo_bin_cmd!("tourreport")
}

/// `tourreport --config <dir>/tourreport.conf`, so tests never touch $HOME.
pub fn tr_in(dir: &Path) -> Command {
    let mut cmd = tr();
    cmd.arg("--config").arg(dir.join("tourreport.conf"));
    cmd
}

/// One data row of a tour sheet, as text fields.
pub struct SheetRow<'a> {
    pub first: Option<(&'a str, &'a str)>,
    pub second: Option<(&'a str, &'a str)>,
    pub date: &'a str,
    pub time: &'a str,
    pub tour: &'a str,
    pub vehicle: &'a str,
}

impl SheetRow<'_> {
    pub fn fields(&self) -> Vec<String> {
        let mut f = vec![String::new(); WIDTH];
        if let Some((a, b)) = self.first {
            f[FIRST_NAME.0] = a.to_string();
            f[FIRST_NAME.1] = b.to_string();
        }
        if let Some((a, b)) = self.second {
            f[SECOND_NAME.0] = a.to_string();
            f[SECOND_NAME.1] = b.to_string();
        }
        f[DATE] = self.date.to_string();
        f[TIME] = self.time.to_string();
        f[TOUR] = self.tour.to_string();
        f[VEHICLE] = self.vehicle.to_string();
        f
    }

    /// Same row as extractor input; blank fields become `Empty`.
    pub fn raw(&self) -> RawRow {
        self.fields()
            .into_iter()
            .map(|s| if s.is_empty() { CellValue::Empty } else { CellValue::Text(s) })
            .collect()
    }
}

/// Five header lines followed by `rows`, `;`-separated.
pub fn write_tour_csv(dir: &Path, name: &str, rows: &[SheetRow<'_>]) -> PathBuf {
    let mut content = String::new();
    for i in 0..5 {
        content.push_str(&format!("Tourenplan Kopfzeile {i}\n"));
    }
    for row in rows {
        content.push_str(&row.fields().join(";"));
        content.push('\n');
    }

    let path = dir.join(name);
    fs::write(&path, content).expect("write csv fixture");
    path
}

/// The two rows of the New Year scenario: X on Sunday 2024-12-29 (first
/// pair), Y on Monday 2025-01-06 (second pair).
pub fn new_year_rows() -> Vec<SheetRow<'static>> {
    vec![
        SheetRow {
            first: Some(("Fuhlbrügge", "Justin")),
            second: None,
            date: "2024-12-29",
            time: "07:00",
            tour: "12221",
            vehicle: "5001",
        },
        SheetRow {
            first: None,
            second: Some(("Rimba", "Gona")),
            date: "2025-01-06",
            time: "6:00",
            tour: "12224",
            vehicle: "6003",
        },
    ]
}

/// Workbook with real date and time cells. Column A and row 1 are left empty
/// so the used range does not start at A1.
pub fn write_tour_xlsx(dir: &Path, name: &str) -> PathBuf {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    let date_fmt = Format::new().set_num_format("dd.mm.yyyy");
    let time_fmt = Format::new().set_num_format("hh:mm");

    ws.write(1, 1, "Tourenplan").unwrap();
    ws.write(2, 1, "Depot Nord").unwrap();

    // row 5: X, 2024-12-29 (serial 45655), 07:00 as time cell
    ws.write(5, 3, "Fuhlbrügge").unwrap();
    ws.write(5, 4, "Justin").unwrap();
    ws.write(5, 6, "Adler").unwrap();
    ws.write(5, 7, "Philipp").unwrap();
    ws.write_number_with_format(5, TIME as u16, 7.0 / 24.0, &time_fmt).unwrap();
    ws.write_number(5, VEHICLE as u16, 5001).unwrap();
    ws.write_number_with_format(5, DATE as u16, 45655, &date_fmt).unwrap();
    ws.write_number(5, TOUR as u16, 12221).unwrap();

    // row 6: Y, 2025-01-06 (serial 45663), 0.25 as plain fraction
    ws.write(6, 6, "Rimba").unwrap();
    ws.write(6, 7, "Gona").unwrap();
    ws.write_number(6, TIME as u16, 0.25).unwrap();
    ws.write_number(6, VEHICLE as u16, 6003).unwrap();
    ws.write_number_with_format(6, DATE as u16, 45663, &date_fmt).unwrap();
    ws.write_number(6, TOUR as u16, 12224).unwrap();

    // row 7: no date, must be skipped
    ws.write(7, 3, "Holtz").unwrap();
    ws.write(7, 4, "Ch.").unwrap();
    ws.write(7, TOUR as u16, "urlaub").unwrap();

    let path = dir.join(name);
    workbook.save(&path).expect("write xlsx fixture");
    path
}
