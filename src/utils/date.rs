//! Date helpers: German weekday names and display/parse formats.

use chrono::{Datelike, NaiveDate, Weekday};

/// Weekday names used in reports, Monday first. Fixed, independent of the locale.
pub const WEEKDAYS_DE: [&str; 7] = [
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
    "Sonntag",
];

pub const SATURDAY: &str = WEEKDAYS_DE[5];

pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAYS_DE[day.num_days_from_monday() as usize]
}

/// "Sonntag, 29.12.2024"
pub fn date_display(date: NaiveDate) -> String {
    format!("{}, {}", weekday_name(date.weekday()), date.format("%d.%m.%Y"))
}

/// Text formats accepted in the date column, tried in order.
/// "%d.%m.%y" must precede "%d.%m.%Y", which would read "24" as year 24.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d.%m.%y", "%d.%m.%Y", "%d/%m/%Y"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d.%m.%Y %H:%M"];

pub fn parse_date_text(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| chrono::NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}
