//! Single-point lifespan projection
//!
//! The death date is the date of birth shifted by the assumed lifespan.
//! What remains is expressed as a calendar difference (years, months,
//! days) measured from today forward to that date.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Calendar time left until the projected death date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifespanRemaining {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Date of birth shifted forward by whole calendar years
///
/// A Feb 29 birthday lands on Feb 28 when the shifted year is not a leap
/// year. Dates past chrono's range saturate at `NaiveDate::MAX`.
pub fn projected_death_date(date_of_birth: NaiveDate, assumed_lifespan_years: u32) -> NaiveDate {
    date_of_birth
        .checked_add_months(Months::new(assumed_lifespan_years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MAX)
}

/// Years, months and days from `now` until the projected death date
///
/// Returns `None` once the local time has reached midnight at the start of
/// the death date.
pub fn projected_lifespan_remaining<Tz: TimeZone>(
    date_of_birth: NaiveDate,
    now: &DateTime<Tz>,
    assumed_lifespan_years: u32,
) -> Option<LifespanRemaining> {
    let death_date = projected_death_date(date_of_birth, assumed_lifespan_years);
    calendar_difference(now.naive_local(), death_date)
}

/// Calendar difference from a local wall-clock time to the start of `until`
///
/// Days borrow the length of the month preceding `until`'s month, then
/// months borrow a year. When today's day-of-month does not exist in that
/// preceding month it is clamped to the month's last day, so the result
/// never grows as `now` advances. The time of day of `now` is ignored.
pub fn calendar_difference(now: NaiveDateTime, until: NaiveDate) -> Option<LifespanRemaining> {
    if now >= until.and_time(NaiveTime::MIN) {
        return None;
    }

    let today = now.date();
    let mut years = until.year() - today.year();
    let mut months = until.month() as i32 - today.month() as i32;
    let mut days = until.day() as i32 - today.day() as i32;

    if days < 0 {
        let preceding = days_in_preceding_month(until);
        days = until.day() as i32 - (today.day() as i32).min(preceding) + preceding;
        months -= 1;
    }
    if months < 0 {
        months += 12;
        years -= 1;
    }

    Some(LifespanRemaining {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    })
}

fn days_in_preceding_month(date: NaiveDate) -> i32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day() as i32)
        .unwrap_or(31)
}
