//! Fatal normalization errors.
//!
//! Only conditions that would otherwise corrupt a price or a weekday
//! assignment are errors. Unknown periods, unrecognized modifier messages and
//! missing per-zone details degrade to "absent" and are reported through
//! `tracing` instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The raw provider payload does not have the expected shape.
    #[error("{provider} payload failed schema validation: {source}")]
    SchemaValidation {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown price format: {0:?}")]
    UnknownPriceFormat(String),

    /// A euro amount that cannot be expressed as a non-negative cent value.
    #[error("invalid price amount: {0}")]
    InvalidPrice(f64),

    #[error("unknown day token {token:?} in opening hours {schedule:?}")]
    UnknownDayToken { token: String, schedule: String },

    #[error("reversed day range {clause:?} in opening hours {schedule:?}")]
    ReversedDayRange { clause: String, schedule: String },

    /// A clause whose hours part is not exactly one `HH:MM-HH:MM` range.
    #[error("unparsable clause {clause:?} in opening hours {schedule:?}")]
    UnparsableClause { clause: String, schedule: String },

    #[error("invalid weekday digits {0:?}, expected a non-empty string of digits 1-7")]
    InvalidWeekdayDigit(String),
}

pub type Result<T, E = NormalizeError> = std::result::Result<T, E>;
