//! User profile input: the date of birth and an optional clock override

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Validated user profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub date_of_birth: NaiveDate,
}

impl Profile {
    /// Parse a date of birth as entered in the setup form
    ///
    /// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, whose calendar date
    /// is used as written.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::MissingDateOfBirth);
        }

        let date_of_birth = NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(input).map(|dt| dt.date_naive()))
            .map_err(|_| Error::InvalidDateOfBirth {
                input: input.to_string(),
            })?;

        Ok(Self { date_of_birth })
    }
}

/// Parse a clock override
///
/// RFC 3339 keeps its offset; a bare `YYYY-MM-DDTHH:MM:SS` is read in the
/// system's local zone.
pub fn parse_now(input: &str) -> Result<DateTime<FixedOffset>> {
    let input = input.trim();
    let invalid = || Error::InvalidTimestamp {
        input: input.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt);
    }

    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S").map_err(|_| invalid())?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(invalid)
}
