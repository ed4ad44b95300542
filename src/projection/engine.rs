//! Projection engine producing countdown snapshots and life statistics

use chrono::{DateTime, NaiveDate, TimeZone};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::assumptions::Assumptions;
use crate::stats::{completed_age, percent_of_life_lived, LifeStatistics, LivedUnits, MortalityOutlook};
use super::lifespan::{projected_death_date, projected_lifespan_remaining, LifespanRemaining};
use super::today::{time_remaining_today, TimeLeftToday};

/// Countdown state at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    /// `None` once the projected death date has arrived
    pub lifespan: Option<LifespanRemaining>,
    pub today: TimeLeftToday,
}

impl Countdown {
    /// True once the projected death date has been reached
    pub fn is_expired(&self) -> bool {
        self.lifespan.is_none()
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given assumptions
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Projected death date for a date of birth
    pub fn death_date(&self, date_of_birth: NaiveDate) -> NaiveDate {
        projected_death_date(date_of_birth, self.assumptions.assumed_lifespan_years)
    }

    /// Countdown as seen at `now`
    pub fn countdown<Tz: TimeZone>(&self, date_of_birth: NaiveDate, now: &DateTime<Tz>) -> Countdown {
        let lifespan = projected_lifespan_remaining(date_of_birth, now, self.assumptions.assumed_lifespan_years);
        let today = time_remaining_today(now);
        trace!("countdown at {}: {:?} {:?}", now.naive_local(), lifespan, today);

        Countdown { lifespan, today }
    }

    /// Life statistics as seen at `now`
    pub fn statistics<Tz: TimeZone>(&self, date_of_birth: NaiveDate, now: &DateTime<Tz>) -> LifeStatistics {
        let local = now.naive_local();
        let death_date = self.death_date(date_of_birth);
        let current_age = completed_age(date_of_birth, local.date());
        debug!(
            "statistics for dob {} at {}: age {}, death date {}",
            date_of_birth, local, current_age, death_date
        );

        LifeStatistics {
            current_age,
            death_date,
            percent_lived: percent_of_life_lived(date_of_birth, local, death_date),
            units: LivedUnits::remaining(local, death_date),
            outlook: MortalityOutlook::for_age(
                &self.assumptions.mortality,
                current_age,
                self.assumptions.assumed_lifespan_years,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date(y, m, d).and_hms_opt(h, min, s).unwrap())
    }

    #[test]
    fn test_countdown_snapshot() {
        let engine = ProjectionEngine::default();
        let countdown = engine.countdown(date(1990, 6, 15), &at(2026, 10, 17, 8, 30, 0));

        assert!(!countdown.is_expired());
        assert_eq!(countdown.lifespan, Some(LifespanRemaining { years: 36, months: 7, days: 29 }));
        assert_eq!(countdown.today, TimeLeftToday { hours: 15, minutes: 30, seconds: 0 });
    }

    #[test]
    fn test_countdown_expired() {
        let engine = ProjectionEngine::default();
        let countdown = engine.countdown(date(1946, 1, 1), &at(2026, 10, 17, 23, 59, 59));

        assert!(countdown.is_expired());
        assert_eq!(countdown.today, TimeLeftToday { hours: 0, minutes: 0, seconds: 1 });
    }

    #[test]
    fn test_custom_lifespan() {
        let engine = ProjectionEngine::new(Assumptions::with_lifespan(90));
        assert_eq!(engine.death_date(date(2000, 1, 1)), date(2090, 1, 1));
        assert!(!engine.countdown(date(1946, 1, 1), &at(2026, 10, 17, 0, 0, 0)).is_expired());
    }

    #[test]
    fn test_statistics() {
        let engine = ProjectionEngine::default();
        let stats = engine.statistics(date(1990, 6, 15), &at(2026, 10, 17, 12, 0, 0));

        assert_eq!(stats.current_age, 36);
        assert_eq!(stats.death_date, date(2063, 6, 15));
        assert!(stats.percent_lived > 49.0 && stats.percent_lived < 51.0);
        assert_eq!(stats.units.summers, 36);
        assert_eq!(
            stats.outlook,
            MortalityOutlook::for_age(&engine.assumptions().mortality, 36, 73)
        );
    }
}
