//! Calendar-week attribution.
//!
//! Two strategies exist and they disagree at year boundaries, so callers pick
//! one explicitly through [`WeekRule`].

use crate::models::WeekRule;
use chrono::{Datelike, NaiveDate};

/// Weeks at or above this number seen in January belong to the previous year
/// under the Sunday-start rule.
pub const JANUARY_CARRYOVER_WEEK: u32 = 52;

/// Returns `(week, year)` for `date` under `rule`.
pub fn week_and_year(date: NaiveDate, rule: WeekRule) -> (u32, i32) {
    match rule {
        WeekRule::Iso => iso_week(date),
        WeekRule::SundayStart => {
            let week = sunday_start_week(date);
            (week, attribute_year(date, week))
        }
    }
}

/// ISO-8601 week number and ISO week-year (Monday start).
pub fn iso_week(date: NaiveDate) -> (u32, i32) {
    let iso = date.iso_week();
    (iso.week(), iso.year())
}

/// Week number with Sunday as the first day of the week.
///
/// Days before the first Sunday of the year form week 1 and every Sunday
/// opens a new week, so the result is within 1..=54.
pub fn sunday_start_week(date: NaiveDate) -> u32 {
    let ordinal0 = date.ordinal0();
    let from_sunday = date.weekday().num_days_from_sunday();
    (ordinal0 + 7 - from_sunday) / 7 + 1
}

/// Year a Sunday-start week is reported under.
///
/// The calendar year of `date`, except for January dates carrying week 52 or
/// higher: those are attributed to the previous year.
pub fn attribute_year(date: NaiveDate, week: u32) -> i32 {
    if date.month() == 1 && week >= JANUARY_CARRYOVER_WEEK {
        date.year() - 1
    } else {
        date.year()
    }
}
