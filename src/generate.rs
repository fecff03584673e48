//! Seeded demo data, matching the shape the dashboard's mock generator
//! produced: integer percentages in 70..=94 per line per day.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::calendar::last_n_days;
use crate::core::DailyMetricPoint;

/// One point per line per day over the `days` ending at `today`.
/// Deterministic for a given seed.
pub fn demo_series(
    lines: &[String],
    today: NaiveDate,
    days: u32,
    seed: u64,
) -> Vec<DailyMetricPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dates = last_n_days(today, days);
    let mut points = Vec::with_capacity(lines.len() * dates.len());
    for line in lines {
        for &date in &dates {
            let value = f64::from(rng.gen_range(70..95u32));
            points.push(DailyMetricPoint::new(date, line.clone(), value));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn produces_one_point_per_line_per_day() {
        let lines = vec!["L06".to_string(), "L07".to_string()];
        let points = demo_series(&lines, d(2024, 2, 10), 5, 42);
        assert_eq!(points.len(), 10);
        assert!(points.iter().all(|p| (70.0..=94.0).contains(&p.value)));
    }

    #[test]
    fn same_seed_reproduces_the_series() {
        let lines = vec!["L06".to_string()];
        let a = demo_series(&lines, d(2024, 2, 10), 30, 7);
        let b = demo_series(&lines, d(2024, 2, 10), 30, 7);
        assert_eq!(a, b);
    }
}
