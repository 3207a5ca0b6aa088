//! Error types for decoding hour tables and reading them back from storage.

use chrono::Weekday;
use thiserror::Error;

/// Errors produced when decoding a flat string or a structured schedule into [crate::Hours].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Flat string holds more than 7 * 24 hour characters.
    #[error("too many hours for decode: {len} characters, at most 168")]
    TooManyHours { len: usize },
    /// A single day string of a structured schedule holds more than 24 hour characters.
    #[error("too many hours for {day}: {len} characters, at most 24")]
    TooManyDayHours { day: Weekday, len: usize },
    /// Stored bytes are not valid UTF-8 text.
    #[error("stored hours are not valid UTF-8")]
    InvalidUtf8,
    /// The structured document could not be parsed.
    #[error("malformed schedule document: {0}")]
    MalformedDocument(String),
}

/// Errors produced when reading hours back from a stored value (see [crate::store]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The storage driver handed back something that is neither text nor bytes.
    #[error("unsupported decode type {0}")]
    UnsupportedType(&'static str),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
