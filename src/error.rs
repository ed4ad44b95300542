//! Error type for input parsing
//!
//! The projection functions are total; only user-supplied text can fail.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No date of birth was provided
    #[error("date of birth is required")]
    MissingDateOfBirth,

    /// Date of birth could not be read as a calendar date
    #[error("invalid date of birth '{input}': expected YYYY-MM-DD or RFC 3339")]
    InvalidDateOfBirth { input: String },

    /// Current-time override could not be parsed
    #[error("invalid timestamp '{input}': expected RFC 3339 or YYYY-MM-DDTHH:MM:SS")]
    InvalidTimestamp { input: String },
}

/// Shorthand `Result` used by the parsing helpers
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_accepted_formats() {
        let err = Error::InvalidDateOfBirth {
            input: "15/06/1990".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date of birth '15/06/1990': expected YYYY-MM-DD or RFC 3339"
        );
        assert_eq!(Error::MissingDateOfBirth.to_string(), "date of birth is required");
    }
}
