// ==========================================
// Weekly Aggregator Engine Tests
// ==========================================
// Pure aggregation over in-memory entries: grouping, means,
// previous-week comparison and ordering.
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use spool_winding::engine::WeeklyAggregator;
use spool_winding::{ProductionEntry, Shift, Zone};

fn entry(
    id: i64,
    zone: Zone,
    date: NaiveDate,
    supervisor: &str,
    quality: f64,
    no_of_frame: i64,
    kg_per_frame: i64,
    kg_per_winder: i64,
    diff: i64,
) -> ProductionEntry {
    ProductionEntry {
        id,
        created_at: NaiveDateTime::new(date, chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
        zone,
        entry_date: date,
        shift: Shift::A,
        supervisor_name: supervisor.to_string(),
        quality,
        avg_count: quality,
        spindle: 120,
        no_of_frame,
        no_of_winder: 5,
        target_prod: 500,
        actual_prod: 500 + diff,
        kg_per_frame,
        kg_per_winder,
        diff,
    }
}

// ISO week 23 of 2026 runs Mon 2026-06-01 .. Sun 2026-06-07
fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, day).unwrap()
}

// ISO week 22: Mon 2026-05-25 .. Sun 2026-05-31
fn prev_d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, day).unwrap()
}

#[test]
fn test_week_key_is_calendar_year_and_iso_week() {
    let e = entry(1, Zone::Red, d(1), "R. Das", 40.0, 10, 52, 104, 20);
    assert_eq!(WeeklyAggregator::week_key(&e), (2026, 23));
}

#[test]
fn test_empty_store_yields_empty_reports() {
    let (comparison, supervisor) = WeeklyAggregator::aggregate(&[], 2026, 23);
    assert!(comparison.is_empty());
    assert!(supervisor.is_empty());
}

#[test]
fn test_comparison_diff_is_current_mean_minus_previous_mean() {
    let entries = vec![
        // current week, Red/40: kg_frame 52 and 54 -> mean 53
        entry(1, Zone::Red, d(1), "R. Das", 40.0, 10, 52, 104, 20),
        entry(2, Zone::Red, d(2), "R. Das", 40.0, 10, 54, 108, 40),
        // previous week, Red/40: kg_frame 50 -> mean 50
        entry(3, Zone::Red, prev_d(25), "R. Das", 40.0, 10, 50, 100, 0),
    ];

    let (comparison, _) = WeeklyAggregator::aggregate(&entries, 2026, 23);
    assert_eq!(comparison.len(), 1);
    let row = &comparison[0];
    assert_eq!(row.zone, Zone::Red);
    assert_eq!(row.quality, 40.0);
    assert_eq!(row.kg_frame, 53.0);
    assert_eq!(row.prev_kg_frame, 50.0);
    assert_eq!(row.diff_kg_frame, 3.0);
    assert_eq!(row.kg_winder, 106.0);
    assert_eq!(row.prev_kg_winder, 100.0);
    assert_eq!(row.diff_kg_winder, 6.0);
}

#[test]
fn test_missing_previous_week_defaults_to_zero_baseline() {
    let entries = vec![entry(1, Zone::Green, d(3), "S. Roy", 36.0, 8, 60, 96, -10)];

    let (comparison, _) = WeeklyAggregator::aggregate(&entries, 2026, 23);
    assert_eq!(comparison.len(), 1);
    let row = &comparison[0];
    assert_eq!(row.prev_kg_frame, 0.0);
    assert_eq!(row.prev_kg_winder, 0.0);
    assert_eq!(row.diff_kg_frame, row.kg_frame);
    assert_eq!(row.diff_kg_winder, row.kg_winder);
}

#[test]
fn test_previous_week_only_groups_are_not_reported() {
    // left join: groups present only in the previous week drop out
    let entries = vec![
        entry(1, Zone::Red, d(1), "R. Das", 40.0, 10, 52, 104, 20),
        entry(2, Zone::Blue, prev_d(26), "S. Roy", 36.0, 8, 48, 96, 0),
    ];

    let (comparison, _) = WeeklyAggregator::aggregate(&entries, 2026, 23);
    assert_eq!(comparison.len(), 1);
    assert_eq!(comparison[0].zone, Zone::Red);
}

#[test]
fn test_mean_rounded_to_two_decimals() {
    // kg_frame 52, 53, 53 -> mean 52.666... -> 52.67
    let entries = vec![
        entry(1, Zone::Red, d(1), "R. Das", 40.0, 10, 52, 104, 0),
        entry(2, Zone::Red, d(2), "R. Das", 40.0, 10, 53, 104, 0),
        entry(3, Zone::Red, d(3), "R. Das", 40.0, 10, 53, 104, 0),
    ];

    let (comparison, _) = WeeklyAggregator::aggregate(&entries, 2026, 23);
    assert_eq!(comparison[0].kg_frame, 52.67);
}

#[test]
fn test_supervisor_report_sums_and_means() {
    let entries = vec![
        entry(1, Zone::Red, d(1), "R. Das", 40.0, 10, 52, 104, 20),
        entry(2, Zone::Red, d(2), "R. Das", 40.0, 12, 54, 108, -5),
        entry(3, Zone::Red, d(2), "S. Roy", 40.0, 8, 50, 100, 10),
    ];

    let (_, supervisor) = WeeklyAggregator::aggregate(&entries, 2026, 23);
    assert_eq!(supervisor.len(), 2);

    let das = &supervisor[0];
    assert_eq!(das.supervisor_name, "R. Das");
    assert_eq!(das.machines, 22); // 10 + 12 frames
    assert_eq!(das.kg_frame, 53.0); // mean(52, 54)
    assert_eq!(das.kg_winder, 106.0);
    assert_eq!(das.difference, 15); // 20 - 5

    let roy = &supervisor[1];
    assert_eq!(roy.supervisor_name, "S. Roy");
    assert_eq!(roy.machines, 8);
    assert_eq!(roy.difference, 10);
}

#[test]
fn test_groups_ordered_by_zone_then_quality() {
    let entries = vec![
        entry(1, Zone::Blue, d(1), "A", 36.0, 10, 40, 80, 0),
        entry(2, Zone::Red, d(1), "A", 44.0, 10, 40, 80, 0),
        entry(3, Zone::Red, d(1), "A", 40.0, 10, 40, 80, 0),
    ];

    let (comparison, _) = WeeklyAggregator::aggregate(&entries, 2026, 23);
    let keys: Vec<(Zone, f64)> = comparison.iter().map(|r| (r.zone, r.quality)).collect();
    assert_eq!(
        keys,
        vec![(Zone::Red, 40.0), (Zone::Red, 44.0), (Zone::Blue, 36.0)]
    );
}

#[test]
fn test_week_one_has_no_previous_week() {
    // 2026-01-01 (Thu) is ISO week 1; 2025-12-22 is ISO week 52 of
    // 2025. Week 1 minus 1 does not roll over into the prior year.
    let entries = vec![
        entry(
            1,
            Zone::Red,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            "R. Das",
            40.0,
            10,
            52,
            104,
            0,
        ),
        entry(
            2,
            Zone::Red,
            NaiveDate::from_ymd_opt(2025, 12, 22).unwrap(),
            "R. Das",
            40.0,
            10,
            60,
            120,
            0,
        ),
    ];

    let (comparison, _) = WeeklyAggregator::aggregate(&entries, 2026, 1);
    assert_eq!(comparison.len(), 1);
    assert_eq!(comparison[0].prev_kg_frame, 0.0);
    assert_eq!(comparison[0].diff_kg_frame, 52.0);
}

#[test]
fn test_other_weeks_excluded_from_current() {
    let entries = vec![
        entry(1, Zone::Red, d(1), "R. Das", 40.0, 10, 52, 104, 0),
        // week 24
        entry(2, Zone::Red, d(8), "R. Das", 40.0, 10, 99, 199, 0),
    ];

    let (comparison, supervisor) = WeeklyAggregator::aggregate(&entries, 2026, 23);
    assert_eq!(comparison.len(), 1);
    assert_eq!(comparison[0].kg_frame, 52.0);
    assert_eq!(supervisor.len(), 1);
    assert_eq!(supervisor[0].kg_frame, 52.0);
}
