//! age.rs
//!
//! Date math behind every figure in the report: whole days elapsed since a
//! birth date, the projection of what is left against a fixed average life
//! expectancy, and a human-readable age in the format:
//!     "X years, Y months, Z days"
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so the calendar age counts whole months first and then
//! the days since the last monthly anniversary. Month-end birthdays land on
//! the last day of shorter months, which keeps leap years and varying month
//! lengths correct.
//!
//! A birth date after `today` is treated as a birth today: `days_lived` is
//! still reported signed, but nothing derived from it goes negative.

use std::fmt;

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::Serialize;

/// Average life expectancy in years.
pub const AVERAGE_LIFE_EXPECTANCY: f64 = 77.5;
pub const DAYS_IN_YEAR: f64 = 365.25;

/// Distance of the illustrative "RIP age" markers from the current age.
const DEATH_AGE_MARGIN_YEARS: f64 = 10.0;

/// Signed whole calendar days from `birth` to `today`.
pub fn whole_days_between(today: NaiveDate, birth: NaiveDate) -> i64 {
    today.signed_duration_since(birth).num_days()
}

/// The current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Elapsed and remaining time shared by [`AgeStats`] and
/// [`crate::stats::LifeStats`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Lifespan {
    pub days_lived: i64,
    pub days_left: f64,
    pub age_in_years: f64,
    pub years_left: f64,
}

impl Lifespan {
    pub(crate) fn between(birth: NaiveDate, today: NaiveDate) -> Self {
        let days_lived = whole_days_between(today, birth);
        let age_in_years = clamped_days(days_lived) / DAYS_IN_YEAR;
        let years_left = AVERAGE_LIFE_EXPECTANCY - age_in_years;
        let days_left = (years_left * DAYS_IN_YEAR).max(0.0);

        Self {
            days_lived,
            days_left,
            age_in_years,
            years_left,
        }
    }

    /// Days lived as used for projections, never below zero.
    pub(crate) fn elapsed_days(&self) -> f64 {
        clamped_days(self.days_lived)
    }
}

fn clamped_days(days_lived: i64) -> f64 {
    days_lived.max(0) as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeStats {
    pub days_lived: i64,
    pub days_left: f64,
    pub age_in_years: f64,
    pub years_left: f64,
    /// Ten years before the current age, floored and clamped at zero.
    pub early_death_age: i64,
    /// Ten years after the current age, floored. May exceed the expectancy.
    pub future_death_age: i64,
}

/// Age statistics for `birth` as of the local date right now.
pub fn compute_age_stats(birth: NaiveDate) -> AgeStats {
    compute_age_stats_at(birth, today())
}

pub fn compute_age_stats_at(birth: NaiveDate, today: NaiveDate) -> AgeStats {
    let span = Lifespan::between(birth, today);

    AgeStats {
        days_lived: span.days_lived,
        days_left: span.days_left,
        age_in_years: span.age_in_years,
        years_left: span.years_left,
        early_death_age: (span.age_in_years - DEATH_AGE_MARGIN_YEARS).floor().max(0.0) as i64,
        future_death_age: (span.age_in_years + DEATH_AGE_MARGIN_YEARS).floor() as i64,
    }
}

/// Age as whole years, months and days on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarAge {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl fmt::Display for CalendarAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

pub fn calendar_age(birth: NaiveDate, today: NaiveDate) -> CalendarAge {
    if birth > today {
        return CalendarAge::default();
    }

    let mut months = (today.year() - birth.year()) * 12 + today.month() as i32
        - birth.month() as i32;
    if today.day() < birth.day() {
        // Borrow the last, incomplete month.
        months -= 1;
    }

    // Adding months clamps to the end of shorter months (Jan 31 + 1 = Feb 28/29).
    let anchor = birth
        .checked_add_months(Months::new(months as u32))
        .unwrap_or(today);

    CalendarAge {
        years: months / 12,
        months: months % 12,
        days: whole_days_between(today, anchor) as i32,
    }
}

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_whole_days_between() {
        assert_eq!(whole_days_between(date(2024, 3, 1), date(2024, 2, 1)), 29);
        assert_eq!(whole_days_between(date(2023, 3, 1), date(2023, 2, 1)), 28);
        assert_eq!(whole_days_between(date(2024, 1, 1), date(2024, 1, 1)), 0);
        assert_eq!(whole_days_between(date(2024, 1, 1), date(2024, 1, 3)), -2);
    }

    #[test]
    fn test_born_today() {
        let today = date(2026, 10, 19);
        let stats = compute_age_stats_at(today, today);

        assert_eq!(stats.days_lived, 0);
        assert_eq!(stats.age_in_years, 0.0);
        assert_eq!(stats.years_left, AVERAGE_LIFE_EXPECTANCY);
        assert_eq!(stats.days_left, AVERAGE_LIFE_EXPECTANCY * DAYS_IN_YEAR);
        assert_eq!(stats.early_death_age, 0);
        assert_eq!(stats.future_death_age, 10);
    }

    #[test]
    fn test_ten_thousand_days() {
        let today = date(2026, 10, 19);
        let birth = today - Duration::days(10_000);
        let stats = compute_age_stats_at(birth, today);

        assert_eq!(stats.days_lived, 10_000);
        assert!((stats.age_in_years - 10_000.0 / DAYS_IN_YEAR).abs() < 1e-12);
        // 27.38 years
        assert_eq!(stats.early_death_age, 17);
        assert_eq!(stats.future_death_age, 37);
    }

    #[test]
    fn test_days_left_clamped_past_expectancy() {
        let today = date(2026, 10, 19);
        // 77.5 * 365.25 = 28306.875, so one more whole day is past it.
        let birth = today - Duration::days(28_307);
        let stats = compute_age_stats_at(birth, today);

        assert!(stats.years_left.abs() < 0.01);
        assert_eq!(stats.days_left, 0.0);

        let ancient = compute_age_stats_at(date(1900, 1, 1), today);
        assert!(ancient.years_left < 0.0);
        assert_eq!(ancient.days_left, 0.0);
        assert!(ancient.future_death_age > AVERAGE_LIFE_EXPECTANCY as i64);
    }

    #[test]
    fn test_future_birth_date_counts_as_born_today() {
        let today = date(2026, 10, 19);
        let stats = compute_age_stats_at(date(2027, 1, 1), today);

        assert_eq!(stats.days_lived, -74);
        assert_eq!(stats.age_in_years, 0.0);
        assert_eq!(stats.days_left, AVERAGE_LIFE_EXPECTANCY * DAYS_IN_YEAR);
        assert_eq!(stats.early_death_age, 0);
    }

    #[test]
    fn test_monotonic_in_birth_date() {
        let today = date(2026, 10, 19);
        let earlier = compute_age_stats_at(date(1980, 5, 2), today);
        let later = compute_age_stats_at(date(1995, 11, 30), today);

        assert!(earlier.days_lived >= later.days_lived);
        assert!(earlier.days_left <= later.days_left);
    }

    #[test]
    fn test_calendar_age_borrows_days_and_months() {
        let age = calendar_age(date(1992, 6, 14), date(2026, 3, 10));
        // Feb 2026 has 28 days: 10 - 14 + 28 = 24
        assert_eq!(
            age,
            CalendarAge {
                years: 33,
                months: 8,
                days: 24
            }
        );
    }

    #[test]
    fn test_calendar_age_leap_february() {
        let age = calendar_age(date(2000, 1, 31), date(2024, 3, 1));
        assert_eq!(
            age,
            CalendarAge {
                years: 24,
                months: 1,
                days: 1
            }
        );
    }

    #[test]
    fn test_calendar_age_display() {
        let age = calendar_age(date(2025, 9, 18), date(2026, 10, 19));
        assert_eq!(age.to_string(), "1 year, 1 month, 1 day");
        assert_eq!(
            calendar_age(date(2030, 1, 1), date(2026, 10, 19)).to_string(),
            "0 years, 0 months, 0 days"
        );
    }
}
