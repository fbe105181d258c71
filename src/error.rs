//! # Error Types
//!
//! This module defines the error type returned by every decoding operation in the crate.

use std::fmt;

use crate::LineEndingMode;

/// Result of a decoding operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur while decoding an NMEA sentence.
///
/// Decoding never yields a partially filled record: a sentence either decodes completely
/// or produces exactly one of these errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The sentence has fewer comma-delimited fields than its type requires.
    MalformedSentence {
        /// Number of fields the sentence type needs
        required: usize,
        /// Number of fields found after splitting
        found: usize,
    },

    /// A field was present but did not hold a recognized token or number.
    ///
    /// Raised for a bad hemisphere letter, an out-of-range fix indicator digit,
    /// a non-numeric satellite count or ID, and the like.
    InvalidField {
        /// Name of the offending field
        field: &'static str,
        /// The raw field content, copied out of the sentence
        value: String,
    },

    /// The sentence ID names a sentence type this crate does not decode.
    ///
    /// Contains the sentence ID as it appeared in the input.
    UnsupportedSentenceType(String),

    /// The sentence does not match the configured line ending mode.
    InvalidLineEnding(LineEndingMode),
}

impl Error {
    pub(crate) fn invalid_field(field: &'static str, value: &str) -> Self {
        Error::InvalidField {
            field,
            value: value.to_owned(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedSentence { required, found } => write!(
                f,
                "malformed sentence: expected at least {required} fields, found {found}"
            ),
            Error::InvalidField { field, value } => {
                write!(f, "invalid value {value:?} for field `{field}`")
            }
            Error::UnsupportedSentenceType(id) => write!(f, "unsupported sentence type {id:?}"),
            Error::InvalidLineEnding(mode) => {
                write!(f, "line ending does not satisfy {mode:?} mode")
            }
        }
    }
}

impl std::error::Error for Error {}
