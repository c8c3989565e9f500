use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Strategy used to attribute a date to a (week, year) pair.
///
/// The two rules disagree around New Year, so a report must use exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum WeekRule {
    /// ISO-8601 week and week-year, weeks start on Monday.
    Iso,
    /// Weeks start on Sunday; early-January days of week 52/53 belong to the previous year.
    SundayStart,
}

impl WeekRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekRule::Iso => "iso",
            WeekRule::SundayStart => "sunday_start",
        }
    }
}
