// ==========================================
// Spool Winding Production System - Weekly Aggregator
// ==========================================
// Groups stored entries into the two weekly management reports:
// 1. Zone & quality comparison (current vs previous week)
// 2. Zone-wise supervisor performance
//
// Week key: ISO week number paired with the calendar year of
// entry_date. Previous week is (year, week - 1) within the same
// year; week 1 therefore has no previous week, and the prior
// December's last ISO week is not consulted.
// ==========================================

use crate::domain::entry::ProductionEntry;
use crate::domain::report::{ZoneQualityComparison, ZoneSupervisorReport};
use crate::domain::types::Zone;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Round to 2 decimal places for display (normalizes -0.0 to 0.0)
fn round2(x: f64) -> f64 {
    let r = (x * 100.0).round() / 100.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Grouping key for a quality value (f64 is not a map key);
/// qualities equal to 2 decimals fall into the same group.
fn quality_key(quality: f64) -> i64 {
    (quality * 100.0).round() as i64
}

fn quality_from_key(key: i64) -> f64 {
    key as f64 / 100.0
}

/// Mean kg/frame and kg/winder accumulator
#[derive(Default)]
struct KgAccumulator {
    frame_sum: f64,
    winder_sum: f64,
    count: u32,
}

impl KgAccumulator {
    fn push(&mut self, entry: &ProductionEntry) {
        self.frame_sum += entry.kg_per_frame as f64;
        self.winder_sum += entry.kg_per_winder as f64;
        self.count += 1;
    }

    fn means(&self) -> (f64, f64) {
        // count is always >= 1 for a materialized group
        let n = self.count as f64;
        (self.frame_sum / n, self.winder_sum / n)
    }
}

/// Zone/supervisor accumulator
#[derive(Default)]
struct SupervisorAccumulator {
    machines: i64,
    diff_sum: i64,
    kg: KgAccumulator,
}

// ==========================================
// WeeklyAggregator
// ==========================================
pub struct WeeklyAggregator;

impl WeeklyAggregator {
    /// Week key of an entry: (calendar year, ISO week number)
    pub fn week_key(entry: &ProductionEntry) -> (i32, u32) {
        (entry.entry_date.year(), entry.entry_date.iso_week().week())
    }

    /// Aggregate the stored entries for the selected (year, week)
    ///
    /// Empty input yields empty outputs. Both result sets are
    /// deterministically ordered by their group key.
    pub fn aggregate(
        entries: &[ProductionEntry],
        year: i32,
        week: u32,
    ) -> (Vec<ZoneQualityComparison>, Vec<ZoneSupervisorReport>) {
        let current: Vec<&ProductionEntry> = entries
            .iter()
            .filter(|e| Self::week_key(e) == (year, week))
            .collect();

        // week 1 - 1 = 0 matches no ISO week; previous stays empty
        let previous: Vec<&ProductionEntry> = match week.checked_sub(1) {
            Some(prev_week) if prev_week >= 1 => entries
                .iter()
                .filter(|e| Self::week_key(e) == (year, prev_week))
                .collect(),
            _ => Vec::new(),
        };

        let comparison = Self::zone_quality_comparison(&current, &previous);
        let supervisor = Self::zone_supervisor_report(&current);

        tracing::debug!(
            year,
            week,
            current_entries = current.len(),
            previous_entries = previous.len(),
            comparison_rows = comparison.len(),
            supervisor_rows = supervisor.len(),
            "weekly aggregation complete"
        );

        (comparison, supervisor)
    }

    /// Report 1: mean kg/frame and kg/winder per (zone, quality),
    /// current week left-joined onto the previous week
    fn zone_quality_comparison(
        current: &[&ProductionEntry],
        previous: &[&ProductionEntry],
    ) -> Vec<ZoneQualityComparison> {
        let current_means = Self::group_kg_means(current);
        let previous_means = Self::group_kg_means(previous);

        current_means
            .into_iter()
            .map(|((zone, qk), (kg_frame, kg_winder))| {
                // a group with no previous-week data reports a zero baseline
                let (prev_kg_frame, prev_kg_winder) = previous_means
                    .get(&(zone, qk))
                    .copied()
                    .unwrap_or((0.0, 0.0));

                ZoneQualityComparison {
                    zone,
                    quality: quality_from_key(qk),
                    kg_frame: round2(kg_frame),
                    kg_winder: round2(kg_winder),
                    prev_kg_frame: round2(prev_kg_frame),
                    prev_kg_winder: round2(prev_kg_winder),
                    diff_kg_frame: round2(kg_frame - prev_kg_frame),
                    diff_kg_winder: round2(kg_winder - prev_kg_winder),
                }
            })
            .collect()
    }

    /// Report 2: per (zone, supervisor, quality) machine counts,
    /// kg means and summed production difference
    fn zone_supervisor_report(current: &[&ProductionEntry]) -> Vec<ZoneSupervisorReport> {
        let mut groups: BTreeMap<(Zone, String, i64), SupervisorAccumulator> = BTreeMap::new();

        for entry in current {
            let key = (
                entry.zone,
                entry.supervisor_name.clone(),
                quality_key(entry.quality),
            );
            let acc = groups.entry(key).or_default();
            acc.machines += entry.no_of_frame;
            acc.diff_sum += entry.diff;
            acc.kg.push(entry);
        }

        groups
            .into_iter()
            .map(|((zone, supervisor_name, qk), acc)| {
                let (kg_frame, kg_winder) = acc.kg.means();
                ZoneSupervisorReport {
                    zone,
                    supervisor_name,
                    quality: quality_from_key(qk),
                    machines: acc.machines,
                    kg_frame: round2(kg_frame),
                    kg_winder: round2(kg_winder),
                    difference: acc.diff_sum,
                }
            })
            .collect()
    }

    /// Mean kg/frame and kg/winder per (zone, quality)
    fn group_kg_means(entries: &[&ProductionEntry]) -> BTreeMap<(Zone, i64), (f64, f64)> {
        let mut groups: BTreeMap<(Zone, i64), KgAccumulator> = BTreeMap::new();

        for entry in entries {
            groups
                .entry((entry.zone, quality_key(entry.quality)))
                .or_default()
                .push(entry);
        }

        groups
            .into_iter()
            .map(|(key, acc)| (key, acc.means()))
            .collect()
    }
}
