//! Error types

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// An opaque error reported by a [`PersistenceGateway`](crate::traits::PersistenceGateway).
///
/// Storage backends turn their own errors into this type. Callers only get to decide whether to retry or give up.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{message}")]
pub struct PersistenceError {
    message: String,
}

impl PersistenceError {
    pub fn new<S: ToString>(message: S) -> Self {
        Self { message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err)
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err)
    }
}

/// Errors raised by this crate
#[derive(Error, Debug)]
pub enum EventError {
    /// A submission did not contain any date
    #[error("No date was submitted for this event")]
    EmptyDateSet,

    /// The local time does not exist on that date (it falls in a daylight-saving gap)
    #[error("{time} does not exist on {date} because of a daylight saving time change")]
    InvalidLocalTime { date: NaiveDate, time: NaiveTime },

    #[error("Invalid date '{0}'")]
    InvalidDate(String),

    #[error("Invalid time '{0}'")]
    InvalidTime(String),

    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

impl EventError {
    /// Whether the submitter should be asked to correct their input
    pub fn is_user_input_error(&self) -> bool {
        matches!(self,
            EventError::EmptyDateSet
            | EventError::InvalidLocalTime { .. }
            | EventError::InvalidDate(_)
            | EventError::InvalidTime(_)
        )
    }
}

/// Result type alias for this crate
pub type EventResult<T> = Result<T, EventError>;


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EventError::InvalidLocalTime {
            date: NaiveDate::from_ymd_opt(2018, 3, 11).unwrap(),
            time: NaiveTime::from_hms_opt(2, 30, 0).unwrap(),
        };
        assert_eq!(err.to_string(), "02:30:00 does not exist on 2018-03-11 because of a daylight saving time change");
        assert!(err.is_user_input_error());

        let persistence = PersistenceError::new("disk full");
        assert_eq!(persistence.to_string(), "disk full");
        assert!(std::error::Error::source(&persistence).is_none());
        let err: EventError = persistence.into();
        assert_eq!(err.to_string(), "Persistence error: disk full");
        assert!(err.is_user_input_error() == false);
    }
}
