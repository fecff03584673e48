//! Date arithmetic for the corporate and natural calendars.
//!
//! The corporate calendar starts week 1 on the year's first Sunday. Dates
//! between January 1 and that Sunday are clamped to week 1, which keeps
//! `corporate_week` total and monotone within a year.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::core::ComparisonMode;

/// First Sunday on or after January 1 of the given year.
pub fn corporate_epoch(year: i32) -> NaiveDate {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).expect("January 1 is valid for every year");
    let mut day = jan1;
    while day.weekday() != Weekday::Sun {
        day += Duration::days(1);
    }
    day
}

/// Corporate week number of a date: 1-based weeks counted from the year's
/// first Sunday. Dates before the epoch clamp to week 1.
pub fn corporate_week(date: NaiveDate) -> u32 {
    let epoch = corporate_epoch(date.year());
    if date < epoch {
        return 1;
    }
    (date - epoch).num_days() as u32 / 7 + 1
}

/// Week-of-month under the natural calendar: `ceil((day + offset) / 7)` where
/// `offset` is the weekday of the month's first day, Sunday = 0.
pub fn natural_week_of_month(date: NaiveDate) -> u32 {
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("the first day exists in every month");
    let offset = first.weekday().num_days_from_sunday();
    (date.day() + offset).div_ceil(7)
}

/// Month bucket label, e.g. `Feb 2024`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Every calendar day from `start` to `end` inclusive, ascending. Returns an
/// empty sequence for an inverted range rather than failing.
pub fn enumerate_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        current += Duration::days(1);
    }
    days
}

/// The last `n` days ending at `today`, ascending. Used as the default
/// data-entry window.
pub fn last_n_days(today: NaiveDate, n: u32) -> Vec<NaiveDate> {
    if n == 0 {
        return Vec::new();
    }
    enumerate_days(today - Duration::days(i64::from(n) - 1), today)
}

/// The date a value is compared against under the given comparison mode.
/// February 29 rolls forward to March 1 in the previous year.
pub fn comparison_date(date: NaiveDate, mode: ComparisonMode) -> NaiveDate {
    match mode {
        ComparisonMode::None => date,
        ComparisonMode::PreviousWeek => date - Duration::days(7),
        ComparisonMode::PreviousYear => {
            NaiveDate::from_ymd_opt(date.year() - 1, date.month(), date.day()).unwrap_or_else(
                || {
                    NaiveDate::from_ymd_opt(date.year() - 1, 3, 1)
                        .expect("March 1 is valid for every year")
                },
            )
        }
    }
}
