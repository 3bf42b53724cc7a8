/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! This module defines [`Document`], the in-memory representation of a parsed annotated document.

use chrono::{NaiveDate, NaiveDateTime};
use sealed::sealed;
use serde::{Deserialize, Serialize};

use crate::analyzer::Analysis;
use crate::annotation::SpanAnnotation;
use crate::config::OffsetBase;
use crate::error::TempEvalError;
use crate::json::ToJson;
use crate::span::Span;
use crate::text::Text;
use crate::types::*;

/// A parsed document: the plain text of its body, its reference time, and the annotations found
/// in the body in document order. The order is meaningful: later stages align annotations
/// positionally with tokenization.
///
/// Documents are produced by a [`crate::Reader`] and are not modified afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Document {
    /// Identifies the input (a file path, or an identifier supplied with in-memory text)
    pub(crate) source: String,

    /// The plain text of the body, tags removed, whitespace as-is
    pub(crate) text: String,

    /// Document creation time, the raw value of the reference time tag
    pub(crate) dct: String,

    pub(crate) annotations: Vec<SpanAnnotation>,

    /// Number of whitespace characters at the start of the text, which analyzers that trim their input do not see
    pub(crate) leading_whitespace: usize,

    /// Which view of the text the annotation offsets refer to
    pub(crate) offset_base: OffsetBase,

    /// The opaque result of the linguistic analysis
    pub(crate) analysis: Analysis,
}

impl Document {
    pub(crate) fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: String::new(),
            dct: String::new(),
            annotations: Vec::new(),
            leading_whitespace: 0,
            offset_base: OffsetBase::default(),
            analysis: Analysis::empty(),
        }
    }

    /// Returns the identifier of the input this document was read from
    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    /// Returns the raw document creation time value
    pub fn dct(&self) -> &str {
        self.dct.as_str()
    }

    /// Interprets the document creation time as a date-time. TimeML values are either a date
    /// (`1998-03-03`, taken as midnight) or a date with a time of day (`1998-03-03T14:11:00`, seconds optional).
    pub fn dct_datetime(&self) -> Result<NaiveDateTime, TempEvalError> {
        let value = self.dct.trim();
        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
                return Ok(datetime);
            }
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| {
                TempEvalError::DateTimeError(
                    format!("Unable to interpret {:?} as a date", self.dct),
                    "Document::dct_datetime()",
                )
            })
    }

    /// Returns all annotations in document order
    pub fn annotations(&self) -> &[SpanAnnotation] {
        &self.annotations
    }

    /// Iterates over the annotations with a particular tag, in document order
    pub fn annotations_by_tag<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a SpanAnnotation> + 'a {
        self.annotations
            .iter()
            .filter(move |annotation| annotation.tag() == tag)
    }

    pub fn leading_whitespace(&self) -> usize {
        self.leading_whitespace
    }

    pub fn offset_base(&self) -> OffsetBase {
        self.offset_base
    }

    /// Returns the result of the linguistic analysis
    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    /// Returns the span of an annotation relative to the plain text ([`Self::text()`]), whatever the offset base of this document.
    pub fn plain_span(&self, annotation: &SpanAnnotation) -> Span {
        match (annotation.plain, self.offset_base) {
            (Some(plain), _) => plain,
            (None, OffsetBase::PlainText) => annotation.span(),
            //not produced by a reader, assume it lies past the leading whitespace
            (None, OffsetBase::Analyzer) => Span::new(
                annotation.begin() + self.leading_whitespace,
                annotation.end() + self.leading_whitespace,
            ),
        }
    }

    /// Returns the span of an annotation relative to the text with leading whitespace stripped,
    /// which is what analyzers that trim their input report offsets against.
    pub fn analyzer_span(&self, annotation: &SpanAnnotation) -> Span {
        match self.offset_base {
            OffsetBase::PlainText => annotation.span().shift_left(self.leading_whitespace),
            OffsetBase::Analyzer => annotation.span(),
        }
    }

    /// Returns the text an annotation covers
    pub fn annotation_text(&self, annotation: &SpanAnnotation) -> Result<&str, TempEvalError> {
        self.text_by_span(&self.plain_span(annotation))
    }
}

impl Text for Document {
    fn text(&self) -> &str {
        self.text.as_str()
    }
}

#[sealed]
impl TypeInfo for Document {
    fn typeinfo() -> Type {
        Type::Document
    }
}

impl ToJson for Document {}
