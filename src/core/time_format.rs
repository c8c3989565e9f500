//! Normalisation of tour start times to "HH:MM".
//!
//! Tour sheets carry the start time in whatever shape the cell happened to
//! get: typed text ("7:00", "07:00:00"), a fraction of a day (0.25), or a real
//! date-time/time cell. Anything else maps to [`TIME_NOT_AVAILABLE`].

use crate::models::CellValue;
use crate::models::entry::TIME_NOT_AVAILABLE;

/// Formats a time cell as zero-padded "HH:MM", or "n. A." when it is absent or
/// not recognisable. Never fails.
pub fn format_time(value: &CellValue) -> String {
    let formatted = match value {
        CellValue::Empty | CellValue::Bool(_) => None,
        CellValue::Text(s) => format_time_text(s),
        CellValue::Number(n) => format_day_fraction(*n),
        CellValue::DateTime(dt) => Some(dt.format("%H:%M").to_string()),
        CellValue::Time(t) => Some(t.format("%H:%M").to_string()),
    };

    formatted.unwrap_or_else(|| TIME_NOT_AVAILABLE.to_string())
}

/// "9:5" → "09:05", "07:30:15" → "07:30". Both parts must be plain digits.
fn format_time_text(s: &str) -> Option<String> {
    let (hours, rest) = s.trim().split_once(':')?;
    let minutes = rest.split(':').next().unwrap_or(rest);

    let h = parse_digits(hours)?;
    let m = parse_digits(minutes)?;
    Some(format!("{h:02}:{m:02}"))
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// 0.25 → "06:00". Only values in [0, 1) are a time of day.
fn format_day_fraction(n: f64) -> Option<String> {
    if !(0.0..1.0).contains(&n) {
        return None;
    }
    if n == 0.0 {
        return Some("00:00".to_string());
    }

    // truncated, not rounded
    let hours = (n * 24.0).trunc() as u32;
    let minutes = (n * 1440.0).trunc() as u32 % 60;
    Some(format!("{hours:02}:{minutes:02}"))
}
