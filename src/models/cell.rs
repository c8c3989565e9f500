use chrono::{NaiveDateTime, NaiveTime};
use std::fmt;

/// A single spreadsheet cell, independent of the reader that produced it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
}

/// One worksheet row, addressed by 0-based column position.
pub type RawRow = Vec<CellValue>;

static EMPTY: CellValue = CellValue::Empty;

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Empty cells and whitespace-only text count as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Cell at `col`, or `Empty` when the row is shorter.
    pub fn at(row: &[CellValue], col: usize) -> &CellValue {
        row.get(col).unwrap_or(&EMPTY)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s.trim()),
            // 12221.0 is a tour number, not a fraction
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
        }
    }
}
