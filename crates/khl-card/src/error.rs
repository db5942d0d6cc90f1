use std::convert::Infallible;

use thiserror::Error;

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;

/// Raised whenever a card node is constructed or updated with values the
/// platform would reject.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("rgb channel {channel} must be in 0..=255, got {value}")]
    ChannelOutOfRange { channel: char, value: i64 },
    #[error("invalid color `{0}`, expected #rrggbb")]
    InvalidColor(String),
    #[error("paragraph must have 1 to 3 columns, got {0}")]
    ParagraphCols(usize),
    #[error("paragraph has {cols} columns but {fields} fields")]
    ParagraphFields { cols: usize, fields: usize },
    #[error("paragraph fields cannot be paragraphs")]
    NestedParagraph,
    #[error("paragraph fields must be text, got {0}")]
    NonTextField(&'static str),
    #[error("{0} needs at least one element")]
    Empty(&'static str),
    #[error("too many images: {count} (max {max})")]
    TooManyImages { count: usize, max: usize },
    #[error("too many buttons: {count} (max {max})")]
    TooManyButtons { count: usize, max: usize },
    #[error("too many elements: {count} (max {max})")]
    TooManyElements { count: usize, max: usize },
    #[error("countdown ends at {end_time} before it starts at {start_time}")]
    CountdownRange { start_time: i64, end_time: i64 },
    #[error("unknown {kind} `{value}`")]
    UnknownKeyword { kind: &'static str, value: String },
    #[error("invalid timestamp `{input}`: {reason}")]
    Timestamp { input: String, reason: String },
}

impl ValidationError {
    pub(crate) fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        ValidationError::UnknownKeyword {
            kind,
            value: value.into(),
        }
    }

    pub(crate) fn timestamp(input: impl Into<String>, reason: impl ToString) -> Self {
        ValidationError::Timestamp {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<Infallible> for ValidationError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

/// Logs a rejected construction and hands the error back for `Err(..)`.
pub(crate) fn reject(err: ValidationError) -> ValidationError {
    tracing::debug!(error = %err, "rejected card node");
    err
}
