//! Countdown to the next local midnight

use chrono::{DateTime, Duration, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

const MILLIS_PER_SECOND: i64 = 1000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;

/// Wall-clock time left in the current local day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLeftToday {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeLeftToday {
    /// Split a millisecond span into whole hours, minutes and seconds
    pub fn from_millis(millis: i64) -> Self {
        let millis = millis.max(0);
        Self {
            hours: (millis / MILLIS_PER_HOUR) as u32,
            minutes: ((millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u32,
            seconds: ((millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u32,
        }
    }
}

/// Time from `now` until midnight at the start of the next day in `now`'s zone
pub fn time_remaining_today<Tz: TimeZone>(now: &DateTime<Tz>) -> TimeLeftToday {
    let remaining = next_local_midnight(now)
        .map(|midnight| midnight.signed_duration_since(now.clone()).num_milliseconds())
        .unwrap_or(0);
    TimeLeftToday::from_millis(remaining)
}

/// First instant of the next local day
///
/// A midnight skipped by a DST jump resolves to the first valid hour after
/// it; a repeated midnight resolves to its earlier occurrence.
fn next_local_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let tz = now.timezone();
    let midnight = now.date_naive().succ_opt()?.and_time(NaiveTime::MIN);

    (0..=2).find_map(|shift| {
        tz.from_local_datetime(&(midnight + Duration::hours(shift)))
            .earliest()
    })
}
