//! Time-bucketed aggregation of daily metric series.
//!
//! Reduction into week/month buckets uses a running pairwise average: each
//! merged day replaces the accumulated value with `(existing + incoming) / 2`.
//! The result depends on processing order (first-seen group first). This
//! matches the behavior dashboards were built against and is pinned by tests;
//! it is not a true mean.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::calendar::{
    comparison_date, corporate_week, enumerate_days, month_label, natural_week_of_month,
};
use crate::core::{
    CalendarMode, ComparisonMode, DailyMetricPoint, GroupBy, GroupKey, GroupedSeriesPoint,
};

/// Lookup index: category -> date -> value.
pub type SeriesIndex = BTreeMap<String, BTreeMap<NaiveDate, f64>>;

/// Index a flat point list for per-day lookup. Later points for the same
/// category and date win.
pub fn index_points(points: &[DailyMetricPoint]) -> SeriesIndex {
    points.iter().fold(SeriesIndex::new(), |mut index, point| {
        index
            .entry(point.category.clone())
            .or_default()
            .insert(point.date, point.value);
        index
    })
}

fn value_at(index: &SeriesIndex, category: &str, date: NaiveDate) -> f64 {
    index
        .get(category)
        .and_then(|series| series.get(&date))
        .copied()
        .unwrap_or(0.0)
}

/// Label a day's value under `(Comp)` suffix next to its category.
pub fn comparison_key(category: &str) -> String {
    format!("{category} (Comp)")
}

fn group_label(date: NaiveDate, group_by: GroupBy, calendar: CalendarMode) -> String {
    match group_by {
        GroupBy::Day => date.format("%Y-%m-%d").to_string(),
        GroupBy::Week => {
            let week = match calendar {
                CalendarMode::Natural => natural_week_of_month(date),
                CalendarMode::Corporate => corporate_week(date),
            };
            format!("Week {week}")
        }
        GroupBy::Month => month_label(date),
    }
}

/// One zero-filled point per day in the range, every requested category
/// present. With a comparison mode, each category also carries its shifted
/// companion value under [`comparison_key`].
fn raw_series(
    index: &SeriesIndex,
    days: &[NaiveDate],
    categories: &[String],
    comparison: ComparisonMode,
) -> Vec<GroupedSeriesPoint> {
    days.iter()
        .map(|&date| {
            let mut values = BTreeMap::new();
            for category in categories {
                values.insert(category.clone(), value_at(index, category, date));
                if comparison != ComparisonMode::None {
                    let shifted = comparison_date(date, comparison);
                    values.insert(comparison_key(category), value_at(index, category, shifted));
                }
            }
            GroupedSeriesPoint {
                key: GroupKey::Day(date),
                values,
            }
        })
        .collect()
}

/// Fold daily points into labeled groups, first-seen order, reducing with the
/// running pairwise average.
fn fold_groups(
    raw: Vec<GroupedSeriesPoint>,
    group_by: GroupBy,
    calendar: CalendarMode,
) -> Vec<GroupedSeriesPoint> {
    raw.into_iter().fold(Vec::new(), |mut groups, point| {
        let date = match point.key {
            GroupKey::Day(date) => date,
            GroupKey::Label(_) => {
                groups.push(point);
                return groups;
            }
        };
        let label = group_label(date, group_by, calendar);
        match groups
            .iter_mut()
            .find(|group| group.key == GroupKey::Label(label.clone()))
        {
            Some(existing) => {
                for (category, incoming) in point.values {
                    let accumulated = existing.values.entry(category).or_insert(0.0);
                    *accumulated = (*accumulated + incoming) / 2.0;
                }
            }
            None => groups.push(GroupedSeriesPoint {
                key: GroupKey::Label(label),
                values: point.values,
            }),
        }
        groups
    })
}

/// Aggregate a daily series over `range` (inclusive) into day, week or month
/// buckets. Missing data zero-fills; day grouping returns one point per day
/// keyed by date.
pub fn aggregate(
    points: &[DailyMetricPoint],
    range: (NaiveDate, NaiveDate),
    categories: &[String],
    group_by: GroupBy,
    calendar: CalendarMode,
) -> Vec<GroupedSeriesPoint> {
    aggregate_with_comparison(
        points,
        range,
        categories,
        group_by,
        calendar,
        ComparisonMode::None,
    )
}

/// [`aggregate`], with each category carrying a shifted companion series when
/// a comparison mode is selected.
pub fn aggregate_with_comparison(
    points: &[DailyMetricPoint],
    range: (NaiveDate, NaiveDate),
    categories: &[String],
    group_by: GroupBy,
    calendar: CalendarMode,
    comparison: ComparisonMode,
) -> Vec<GroupedSeriesPoint> {
    let (start, end) = range;
    let days = enumerate_days(start, end);
    let index = index_points(points);
    let raw = raw_series(&index, &days, categories, comparison);
    match group_by {
        GroupBy::Day => raw,
        GroupBy::Week | GroupBy::Month => fold_groups(raw, group_by, calendar),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn cats(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn day_grouping_zero_fills_missing_data() {
        let points = vec![DailyMetricPoint::new(d(2024, 2, 1), "L1", 10.0)];
        let series = aggregate(
            &points,
            (d(2024, 2, 1), d(2024, 2, 2)),
            &cats(&["L1"]),
            GroupBy::Day,
            CalendarMode::Natural,
        );
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].key, GroupKey::Day(d(2024, 2, 1)));
        assert_eq!(series[0].value("L1"), 10.0);
        assert_eq!(series[1].key, GroupKey::Day(d(2024, 2, 2)));
        assert_eq!(series[1].value("L1"), 0.0);
    }

    #[test]
    fn inverted_range_produces_empty_series() {
        let series = aggregate(
            &[],
            (d(2024, 2, 3), d(2024, 2, 1)),
            &cats(&["L1"]),
            GroupBy::Day,
            CalendarMode::Natural,
        );
        assert!(series.is_empty());
    }

    #[test]
    fn week_grouping_applies_running_pairwise_average() {
        // Feb 4-6 2024 all fall in natural week 2 of February.
        let points = vec![
            DailyMetricPoint::new(d(2024, 2, 4), "L1", 10.0),
            DailyMetricPoint::new(d(2024, 2, 5), "L1", 20.0),
            DailyMetricPoint::new(d(2024, 2, 6), "L1", 30.0),
        ];
        let series = aggregate(
            &points,
            (d(2024, 2, 4), d(2024, 2, 6)),
            &cats(&["L1"]),
            GroupBy::Week,
            CalendarMode::Natural,
        );
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].key, GroupKey::Label("Week 2".into()));
        // ((10 + 20) / 2 + 30) / 2, not the arithmetic mean 20
        assert_eq!(series[0].value("L1"), 22.5);
    }

    #[test]
    fn week_groups_appear_in_first_seen_order() {
        let points = vec![
            DailyMetricPoint::new(d(2024, 2, 3), "L1", 10.0),
            DailyMetricPoint::new(d(2024, 2, 4), "L1", 40.0),
        ];
        let series = aggregate(
            &points,
            (d(2024, 2, 3), d(2024, 2, 4)),
            &cats(&["L1"]),
            GroupBy::Week,
            CalendarMode::Natural,
        );
        assert_eq!(
            series.iter().map(|p| p.key.clone()).collect::<Vec<_>>(),
            vec![
                GroupKey::Label("Week 1".into()),
                GroupKey::Label("Week 2".into())
            ]
        );
    }

    #[test]
    fn corporate_weeks_use_year_week_numbers() {
        let points = vec![DailyMetricPoint::new(d(2024, 2, 5), "L1", 50.0)];
        let series = aggregate(
            &points,
            (d(2024, 2, 5), d(2024, 2, 5)),
            &cats(&["L1"]),
            GroupBy::Week,
            CalendarMode::Corporate,
        );
        // Feb 5 2024 is 4 full weeks after the Jan 7 epoch
        assert_eq!(series[0].key, GroupKey::Label("Week 5".into()));
    }

    #[test]
    fn month_grouping_labels_by_short_month_and_year() {
        let points = vec![
            DailyMetricPoint::new(d(2024, 1, 31), "L1", 10.0),
            DailyMetricPoint::new(d(2024, 2, 1), "L1", 30.0),
        ];
        let series = aggregate(
            &points,
            (d(2024, 1, 31), d(2024, 2, 1)),
            &cats(&["L1"]),
            GroupBy::Month,
            CalendarMode::Natural,
        );
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].key, GroupKey::Label("Jan 2024".into()));
        assert_eq!(series[1].key, GroupKey::Label("Feb 2024".into()));
    }

    #[test]
    fn comparison_mode_adds_shifted_companion_values() {
        let points = vec![
            DailyMetricPoint::new(d(2024, 2, 1), "L1", 80.0),
            DailyMetricPoint::new(d(2024, 2, 8), "L1", 90.0),
        ];
        let series = aggregate_with_comparison(
            &points,
            (d(2024, 2, 8), d(2024, 2, 8)),
            &cats(&["L1"]),
            GroupBy::Day,
            CalendarMode::Natural,
            ComparisonMode::PreviousWeek,
        );
        assert_eq!(series[0].value("L1"), 90.0);
        assert_eq!(series[0].value("L1 (Comp)"), 80.0);
    }

    #[test]
    fn later_points_override_earlier_ones_in_the_index() {
        let points = vec![
            DailyMetricPoint::new(d(2024, 2, 1), "L1", 10.0),
            DailyMetricPoint::new(d(2024, 2, 1), "L1", 15.0),
        ];
        let index = index_points(&points);
        assert_eq!(value_at(&index, "L1", d(2024, 2, 1)), 15.0);
    }
}
