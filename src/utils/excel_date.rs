//! Conversions between chrono values and Excel serial numbers (1900 system).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Serial numbers outside this range are not dates (9999-12-31 is 2958465).
const SERIAL_RANGE: std::ops::Range<f64> = 1.0..2_958_466.0;

fn excel_epoch() -> NaiveDateTime {
    // 1899-12-30 absorbs the Lotus 1900 leap-year bug for all serials > 60
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Interprets a numeric cell as an Excel date serial.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !SERIAL_RANGE.contains(&serial) {
        return None;
    }

    let days = serial.trunc() as i64;
    excel_epoch()
        .date()
        .checked_add_signed(chrono::Duration::days(days))
}

/// Interprets an "HH:MM" string as a fraction of a day, for `hh:mm` cells.
pub fn time_to_serial(s: &str) -> Option<f64> {
    let t = NaiveTime::parse_from_str(s, "%H:%M").ok()?;
    Some(t.num_seconds_from_midnight() as f64 / 86_400.0)
}

