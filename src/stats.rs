//! Life statistics derived from the projection
//!
//! - Share of the projected lifespan already lived
//! - Countable "lived units" left before the death date
//! - Actuarial outlook for the current age

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::assumptions::MortalityTable;
use crate::projection::{cumulative_death_probability, curtate_life_expectancy, survival_probability};

/// Mean synodic month in days
pub const DAYS_PER_LUNAR_MONTH: f64 = 29.530588853;

/// Mean Gregorian year in days
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// Reading pace used for the books-remaining figure
pub const BOOKS_PER_YEAR: f64 = 12.0;

/// Everything shown alongside the countdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeStatistics {
    pub current_age: i32,
    pub death_date: NaiveDate,
    pub percent_lived: f64,
    pub units: LivedUnits,
    pub outlook: MortalityOutlook,
}

/// Whole units of time still ahead before the death date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivedUnits {
    pub days: u64,
    pub weeks: u64,
    pub weekends: u64,
    pub summers: u64,
    pub full_moons: u64,
    pub books: u64,
}

/// Mortality probabilities for a life of the current age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortalityOutlook {
    /// Dying before the next birthday
    pub before_next_birthday: f64,
    /// Dying within the next ten years
    pub within_decade: f64,
    /// Dying before reaching the assumed lifespan
    pub before_projected_age: f64,
    /// Surviving to age 100
    pub reaching_100: f64,
    /// Curtate expectation of life in years
    pub life_expectancy: f64,
}

/// Whole years completed on `today`
pub fn completed_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Percentage of the span from birth to the death date already elapsed
pub fn percent_of_life_lived(date_of_birth: NaiveDate, now: NaiveDateTime, death_date: NaiveDate) -> f64 {
    let born = date_of_birth.and_time(NaiveTime::MIN);
    let total = (death_date.and_time(NaiveTime::MIN) - born).num_milliseconds();
    if total <= 0 {
        return 100.0;
    }
    let elapsed = (now - born).num_milliseconds();
    (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

impl LivedUnits {
    /// Units between today and the death date, both exclusive for counted events
    pub fn remaining(now: NaiveDateTime, death_date: NaiveDate) -> Self {
        if now >= death_date.and_time(NaiveTime::MIN) {
            return Self::default();
        }

        let today = now.date();
        let days = (death_date - today).num_days().max(0) as u64;
        let years = days as f64 / DAYS_PER_YEAR;

        Self {
            days,
            weeks: days / 7,
            weekends: count_weekday_between(today, death_date, Weekday::Sat),
            summers: count_anniversaries_between(today, death_date, 6, 21),
            full_moons: (days as f64 / DAYS_PER_LUNAR_MONTH) as u64,
            books: (years * BOOKS_PER_YEAR) as u64,
        }
    }
}

impl MortalityOutlook {
    /// Outlook for a life aged exactly `age`
    pub fn for_age(table: &MortalityTable, age: i32, assumed_lifespan_years: u32) -> Self {
        let projected_age = i32::try_from(assumed_lifespan_years).unwrap_or(i32::MAX);
        Self {
            before_next_birthday: cumulative_death_probability(table, age, age.saturating_add(1)),
            within_decade: cumulative_death_probability(table, age, age.saturating_add(10)),
            before_projected_age: cumulative_death_probability(table, age, projected_age),
            reaching_100: survival_probability(table, age, 100),
            life_expectancy: curtate_life_expectancy(table, age),
        }
    }
}

/// Dates falling on `weekday` strictly between `after` and `before`
fn count_weekday_between(after: NaiveDate, before: NaiveDate, weekday: Weekday) -> u64 {
    let offset = (weekday.num_days_from_monday() + 7 - after.weekday().num_days_from_monday()) % 7;
    let offset = if offset == 0 { 7 } else { offset };

    let Some(first) = after.checked_add_days(chrono::Days::new(u64::from(offset))) else {
        return 0;
    };
    if first >= before {
        return 0;
    }
    ((before - first).num_days() as u64 - 1) / 7 + 1
}

/// Occurrences of month/day strictly between `after` and `before`
fn count_anniversaries_between(after: NaiveDate, before: NaiveDate, month: u32, day: u32) -> u64 {
    let occurs = |year: i32| NaiveDate::from_ymd_opt(year, month, day);

    let first_year = match occurs(after.year()) {
        Some(date) if date > after => after.year(),
        _ => after.year() + 1,
    };
    let last_year = match occurs(before.year()) {
        Some(date) if date < before => before.year(),
        _ => before.year() - 1,
    };

    (i64::from(last_year) - i64::from(first_year) + 1).max(0) as u64
}
