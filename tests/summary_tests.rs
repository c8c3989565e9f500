use chrono::{Datelike, NaiveDate};
use tourreport::core::calendar::week_and_year;
use tourreport::core::filter::filter_by_driver;
use tourreport::core::grouping::{flatten, group_by_week, sort_entries};
use tourreport::core::summary::{Absence, DriverReport, DriverSummary, tour_breakdown};
use tourreport::models::{TourEntry, WeekRule};
use tourreport::utils::date_display;

fn entry(driver: &str, date: (i32, u32, u32), tour: &str, time: &str) -> TourEntry {
    let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
    let (week, year) = week_and_year(date, WeekRule::SundayStart);
    TourEntry {
        week,
        year,
        date_display: date_display(date),
        date_sortable: date,
        driver_name: driver.to_string(),
        tour_id: tour.to_string(),
        time_display: time.to_string(),
        vehicle_id: "5001".to_string(),
    }
}

fn month_of_justin() -> Vec<TourEntry> {
    vec![
        entry("Fuhlbrügge Justin", (2025, 3, 3), "12221", "07:00"),
        entry("Fuhlbrügge Justin", (2025, 3, 4), "12221", "07:00"),
        entry("Fuhlbrügge Justin", (2025, 3, 5), "12230", "06:30"),
        // Saturday
        entry("Fuhlbrügge Justin", (2025, 3, 8), "12230", "05:45"),
        entry("Fuhlbrügge Justin", (2025, 3, 10), "krank", "n. A."),
        entry("Fuhlbrügge Justin", (2025, 3, 11), "Krank", "n. A."),
        entry("Fuhlbrügge Justin", (2025, 3, 12), "URLAUB", "n. A."),
        entry("Fuhlbrügge Justin", (2025, 3, 13), "Ausgleich", "n. A."),
        entry("Fuhlbrügge Justin", (2025, 3, 14), "100", "09:00"),
    ]
}

#[test]
fn test_counters() {
    let s = DriverSummary::from_entries(&month_of_justin());

    assert_eq!(
        s,
        DriverSummary {
            sick: 2,
            vacation: 1,
            compensatory: 1,
            days_worked: 5,
            saturdays_worked: 1,
        }
    );
}

#[test]
fn test_saturday_without_time_is_not_worked() {
    let entries = vec![entry("A B", (2025, 3, 8), "urlaub", "n. A.")];
    assert_eq!(NaiveDate::from_ymd_opt(2025, 3, 8).unwrap().weekday(), chrono::Weekday::Sat);

    let s = DriverSummary::from_entries(&entries);
    assert_eq!(s.saturdays_worked, 0);
    assert_eq!(s.vacation, 1);
}

#[test]
fn test_breakdown_excludes_absences_and_sorts_by_id() {
    let tours = tour_breakdown(&month_of_justin());

    assert_eq!(
        tours,
        vec![
            ("100".to_string(), 1),
            ("12221".to_string(), 2),
            ("12230".to_string(), 2),
        ]
    );
}

#[test]
fn test_absence_matching_is_case_insensitive_substring() {
    assert_eq!(Absence::of("KRANK"), Some(Absence::Sick));
    assert_eq!(Absence::of("Urlaub (halb)"), Some(Absence::Vacation));
    assert_eq!(Absence::of("Zeitausgleich"), Some(Absence::Compensatory));
    assert_eq!(Absence::of("12221"), None);
}

#[test]
fn test_driver_report_bundles_both_panels() {
    let report = DriverReport::new("Justin", &month_of_justin());
    assert_eq!(report.driver, "Justin");
    assert_eq!(report.summary.days_worked, 5);
    assert_eq!(report.tours.len(), 3);
}

#[test]
fn test_filter_is_case_insensitive_substring() {
    let entries = vec![
        entry("Fuhlbrügge Justin", (2025, 3, 3), "1", "07:00"),
        entry("Rimba Gona", (2025, 3, 3), "2", "07:00"),
        entry("Adler Philipp", (2025, 3, 3), "3", "07:00"),
    ];

    let kept = filter_by_driver(entries.clone(), "FUHLBRÜGGE");
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].driver_name, "Fuhlbrügge Justin");

    assert_eq!(filter_by_driver(entries.clone(), "  ").len(), 3);
    assert!(filter_by_driver(entries, "Nobody").is_empty());
}

#[test]
fn test_groups_are_sorted_by_year_then_week() {
    let entries = vec![
        entry("C", (2025, 1, 6), "3", "07:00"),
        entry("A", (2024, 12, 29), "1", "07:00"),
        entry("B", (2024, 12, 30), "2", "07:00"),
    ];

    let groups = group_by_week(entries);
    let keys: Vec<(i32, u32)> = groups.iter().map(|g| (g.year, g.week)).collect();
    assert_eq!(keys, vec![(2024, 53), (2025, 2)]);
    assert_eq!(groups[0].entries.len(), 2);
    assert_eq!(groups[0].entries[0].driver_name, "A");
}

#[test]
fn test_first_and_last_week_of_a_year_are_separate_blocks() {
    let entries = vec![
        entry("A", (2024, 1, 1), "1", "07:00"),
        entry("B", (2024, 12, 30), "2", "07:00"),
    ];

    let groups = group_by_week(entries);
    let titles: Vec<String> = groups.iter().map(|g| g.title()).collect();
    assert_eq!(titles, vec!["KW 1 (2024)", "KW 53 (2024)"]);
}

#[test]
fn test_group_then_flatten_keeps_pair_order() {
    // two entries of the same row, then an earlier day
    let entries = vec![
        entry("Second-day first pair", (2025, 3, 4), "1", "07:00"),
        entry("Second-day second pair", (2025, 3, 4), "1", "07:00"),
        entry("First-day first pair", (2025, 3, 3), "2", "07:00"),
        entry("First-day second pair", (2025, 3, 3), "2", "07:00"),
    ];

    let mut sorted = entries.clone();
    sort_entries(&mut sorted);

    let round_trip = flatten(group_by_week(entries));
    assert_eq!(round_trip, sorted);

    let names: Vec<&str> = round_trip.iter().map(|e| e.driver_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "First-day first pair",
            "First-day second pair",
            "Second-day first pair",
            "Second-day second pair",
        ]
    );
}
