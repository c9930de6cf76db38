use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronRangeError {
    /// Rule segment doesn't consist of exactly four fields.
    #[error("rule must have 4 fields: time dow dom month")]
    WrongFieldCount(String),
    /// Time range or time-of-day token with a malformed shape.
    #[error("invalid time format: {0}")]
    InvalidTimeFormat(String),
    /// Hour, minute or second outside of its valid bounds.
    #[error("invalid time value: {0}")]
    InvalidTimeValue(String),
    /// Field range item with a malformed shape.
    #[error("invalid range format: {0}")]
    InvalidRangeFormat(String),
    /// Value outside of the field's valid bounds.
    #[error("value out of range: {0}")]
    ValueOutOfRange(String),
    /// Range item whose start exceeds its end.
    #[error("invalid range order: {0}")]
    InvalidRangeOrder(String),
    /// Token expected to be an integer.
    #[error("not an integer: {0}")]
    NonIntegerToken(String),
    /// Failure in one of the bounded fields, labeled with the field name.
    #[error("invalid {field}: {source}")]
    InvalidField {
        /// Which of the bounded fields failed: `dow`, `dom` or `month`.
        field: &'static str,
        /// Underlying cause.
        source: Box<CronRangeError>,
    },
    /// Failure in one rule segment, with the segment's original text.
    #[error("invalid rule '{rule}': {source}")]
    InvalidRule {
        /// The offending segment as it appeared in the expression.
        rule: String,
        /// Underlying cause.
        source: Box<CronRangeError>,
    },
    /// Input stream could not be read.
    #[error("can't read from reader: {0}")]
    ReadFailure(String),
}
