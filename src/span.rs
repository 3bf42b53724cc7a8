/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! This module defines [`Span`], a half-open interval of unicode codepoints in a text.

use sealed::sealed;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::*;

/// Corresponds to a slice of the text: begin offset (inclusive) and end offset (non-inclusive).
/// Units are unicode codepoints (not bytes!) and are 0-indexed.
///
/// The text the span applies to is not stored in this structure but should accompany it explicitly when needed.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(try_from = "SpanJson")]
pub struct Span {
    pub(crate) begin: usize,
    pub(crate) end: usize,
}

/// Unchecked form of [`Span`] as it appears in serialised input
#[derive(Deserialize)]
struct SpanJson {
    begin: usize,
    end: usize,
}

impl TryFrom<SpanJson> for Span {
    type Error = String;

    fn try_from(span: SpanJson) -> Result<Self, Self::Error> {
        if span.end < span.begin {
            Err(format!(
                "span end {} lies before its begin {}",
                span.end, span.begin
            ))
        } else {
            Ok(Self {
                begin: span.begin,
                end: span.end,
            })
        }
    }
}

impl Span {
    /// Creates a new span. If `end` is smaller than `begin` it is set to `begin`, yielding a zero-width span.
    pub fn new(begin: usize, end: usize) -> Self {
        Self {
            begin,
            end: end.max(begin),
        }
    }

    /// Returns the begin cursor (unicode codepoints, inclusive)
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Returns the end cursor (unicode codepoints, non-inclusive)
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the length in unicode codepoints
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Zero-width spans are valid; they mark a position rather than a stretch of text
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Does this span fully contain the other one?
    pub fn embeds(&self, other: &Span) -> bool {
        other.begin >= self.begin && other.end <= self.end
    }

    /// Moves the span `distance` codepoints to the left, saturating at zero.
    pub fn shift_left(&self, distance: usize) -> Self {
        Self {
            begin: self.begin.saturating_sub(distance),
            end: self.end.saturating_sub(distance),
        }
    }
}

impl From<(usize, usize)> for Span {
    fn from((begin, end): (usize, usize)) -> Self {
        Self::new(begin, end)
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.begin, span.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

#[sealed]
impl TypeInfo for Span {
    fn typeinfo() -> Type {
        Type::Span
    }
}
