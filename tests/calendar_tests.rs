use chrono::NaiveDate;
use tourreport::core::calendar::{attribute_year, iso_week, sunday_start_week, week_and_year};
use tourreport::models::WeekRule;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_iso_rule_uses_iso_week_year() {
    assert_eq!(week_and_year(d(2024, 12, 29), WeekRule::Iso), (52, 2024));
    assert_eq!(week_and_year(d(2024, 12, 30), WeekRule::Iso), (1, 2025));
    assert_eq!(week_and_year(d(2021, 1, 1), WeekRule::Iso), (53, 2020));
    assert_eq!(iso_week(d(2025, 1, 6)), (2, 2025));
}

#[test]
fn test_sunday_opens_the_week() {
    // Saturday 2022-01-01 alone forms week 1, Sunday 2022-01-02 opens week 2
    assert_eq!(sunday_start_week(d(2022, 1, 1)), 1);
    assert_eq!(sunday_start_week(d(2022, 1, 2)), 2);
    assert_eq!(sunday_start_week(d(2022, 1, 8)), 2);
    assert_eq!(sunday_start_week(d(2022, 1, 9)), 3);

    // a year starting on Sunday has no partial first week
    assert_eq!(sunday_start_week(d(2023, 1, 1)), 1);
    assert_eq!(sunday_start_week(d(2023, 1, 7)), 1);
    assert_eq!(sunday_start_week(d(2023, 1, 8)), 2);

    // same dates under ISO: the Sunday still belongs to the old week
    assert_eq!(iso_week(d(2022, 1, 2)).0, 52);
    assert_eq!(iso_week(d(2022, 1, 9)).0, 1);
}

#[test]
fn test_sunday_rule_new_year_blocks() {
    assert_eq!(week_and_year(d(2024, 12, 29), WeekRule::SundayStart), (53, 2024));
    assert_eq!(week_and_year(d(2024, 12, 30), WeekRule::SundayStart), (53, 2024));
    assert_eq!(week_and_year(d(2024, 12, 31), WeekRule::SundayStart), (53, 2024));
    assert_eq!(week_and_year(d(2025, 1, 4), WeekRule::SundayStart), (1, 2025));
    assert_eq!(week_and_year(d(2025, 1, 5), WeekRule::SundayStart), (2, 2025));
    assert_eq!(week_and_year(d(2025, 1, 6), WeekRule::SundayStart), (2, 2025));
}

#[test]
fn test_late_december_never_shares_week_one() {
    let first = week_and_year(d(2024, 1, 1), WeekRule::SundayStart);
    let last = week_and_year(d(2024, 12, 30), WeekRule::SundayStart);

    assert_eq!(first, (1, 2024));
    assert_eq!(last, (53, 2024));
    assert_ne!(first, last);
}

#[test]
fn test_january_dates_keep_their_year() {
    // the day-of-year count restarts on 1 January, so no January week reaches 52
    assert_eq!(week_and_year(d(2022, 1, 1), WeekRule::SundayStart), (1, 2022));
    assert_eq!(week_and_year(d(2021, 1, 1), WeekRule::SundayStart), (1, 2021));
    assert_eq!(week_and_year(d(2021, 1, 3), WeekRule::SundayStart), (2, 2021));
}

#[test]
fn test_attribute_year_threshold() {
    assert_eq!(attribute_year(d(2025, 1, 1), 52), 2024);
    assert_eq!(attribute_year(d(2025, 1, 1), 53), 2024);
    assert_eq!(attribute_year(d(2025, 1, 1), 51), 2025);
    assert_eq!(attribute_year(d(2025, 1, 1), 1), 2025);
}

#[test]
fn test_february_keeps_its_year() {
    for week in [1, 5, 52, 53] {
        assert_eq!(attribute_year(d(2021, 2, 1), week), 2021);
    }
    assert_eq!(week_and_year(d(2021, 2, 1), WeekRule::SundayStart).1, 2021);
}

#[test]
fn test_sunday_rule_weeks_stay_in_range() {
    let mut day = d(2019, 1, 1);
    while day < d(2031, 1, 1) {
        let (week, _) = week_and_year(day, WeekRule::SundayStart);
        assert!((1..=54).contains(&week), "{day} -> {week}");
        day = day.succ_opt().unwrap();
    }

    // leap year ending on a Sunday
    assert_eq!(sunday_start_week(d(2000, 12, 31)), 54);
}
