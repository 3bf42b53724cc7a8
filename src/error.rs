/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! This module defines the [`TempEvalError`] type, the single error type returned by all fallible
//! operations in this library.

use std::error::Error;
use std::fmt;

use crate::span::Span;

// ------------------------------ ERROR DEFINITIONS & IMPLEMENTATIONS -------------------------------------------------------------

/// This type enumerates all errors that can occur. The last `&'static str` parameter of most
/// variants is a contextual message describing where the error occurred.
#[derive(Debug)]
pub enum TempEvalError {
    /// The input is not well-formed XML, or the expected text region is missing
    MalformedInputError(String, &'static str),

    /// No reference-time (document creation time) tag was found
    MissingReferenceTimeError(&'static str),

    /// More than one reference-time tag was found while running in strict mode. The parameter is the number of matches.
    AmbiguousReferenceTimeError(usize, &'static str),

    /// Input/Output error, the string holds the filename
    IOError(std::io::Error, String, &'static str),

    /// Error loading JSON (e.g. a configuration file), the string holds the filename
    JsonError(
        serde_path_to_error::Error<serde_json::Error>,
        String,
        &'static str,
    ),

    SerializationError(String),

    /// A span does not fit in the text it is supposed to select from
    SpanOutOfBounds(Span, &'static str),

    /// A byte index does not fall on a UTF-8 character boundary
    InvalidUtf8ByteIndex(usize, &'static str),

    /// The linguistic analysis collaborator failed
    AnalysisError(String, &'static str),

    /// One or more annotations no longer select the text they were extracted from
    ValidationError(String, &'static str),

    /// The reference time could not be interpreted as a date
    DateTimeError(String, &'static str),

    OtherError(&'static str),
}

impl From<&TempEvalError> for String {
    /// Returns the error message as a String
    fn from(error: &TempEvalError) -> String {
        match error {
            TempEvalError::MalformedInputError(msg, contextmsg) => {
                format!("MalformedInputError: {} ({})", msg, contextmsg)
            }
            TempEvalError::MissingReferenceTimeError(contextmsg) => format!(
                "MissingReferenceTimeError: No document creation time found ({})",
                contextmsg
            ),
            TempEvalError::AmbiguousReferenceTimeError(count, contextmsg) => format!(
                "AmbiguousReferenceTimeError: Found {} document creation times, expected exactly one ({})",
                count, contextmsg
            ),
            TempEvalError::IOError(err, filename, contextmsg) => {
                format!("IOError: {}: {} ({})", filename, err, contextmsg)
            }
            TempEvalError::JsonError(err, filename, contextmsg) => format!(
                "JsonError: Parsing JSON failed: {} in {} ({})",
                err, filename, contextmsg
            ),
            TempEvalError::SerializationError(msg) => {
                format!("SerializationError: Serialization failed: {}", msg)
            }
            TempEvalError::SpanOutOfBounds(span, contextmsg) => format!(
                "SpanOutOfBounds: Span {} is out of bounds ({})",
                span, contextmsg
            ),
            TempEvalError::InvalidUtf8ByteIndex(byteindex, contextmsg) => format!(
                "InvalidUtf8ByteIndex: Byte index {} is not a valid UTF-8 character boundary ({})",
                byteindex, contextmsg
            ),
            TempEvalError::AnalysisError(msg, contextmsg) => {
                format!("AnalysisError: {} ({})", msg, contextmsg)
            }
            TempEvalError::ValidationError(msg, contextmsg) => {
                format!("ValidationError: {} ({})", msg, contextmsg)
            }
            TempEvalError::DateTimeError(msg, contextmsg) => {
                format!("DateTimeError: {} ({})", msg, contextmsg)
            }
            TempEvalError::OtherError(contextmsg) => format!("OtherError: {}", contextmsg),
        }
    }
}

impl fmt::Display for TempEvalError {
    /// Formats the error message for printing
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let errmsg: String = String::from(self);
        write!(f, "[TempEvalError] {}", errmsg)
    }
}

impl Error for TempEvalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TempEvalError::IOError(err, ..) => Some(err),
            TempEvalError::JsonError(err, ..) => Some(err),
            _ => None,
        }
    }
}
