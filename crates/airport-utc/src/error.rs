//! Error types for airport-utc operations.

use thiserror::Error;

/// The three failure kinds a conversion can surface.
///
/// Every failure is all-or-nothing for the single call — no partial results,
/// no retries, no silent swallowing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The supplied IATA code has no entry in the airport mapping.
    #[error("Unknown airport IATA code: {0}")]
    UnknownAirport(String),

    /// The supplied local timestamp fails strict grammar or calendar
    /// validation, or resolution against a known-good zone yields no real
    /// instant.
    #[error("Invalid ISO 8601 timestamp: {0}")]
    InvalidTimestamp(String),

    /// The supplied (or mapped) timezone identifier is not recognized by the
    /// IANA timezone database.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
