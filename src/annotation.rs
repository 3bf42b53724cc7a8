/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! This module defines [`SpanAnnotation`], a single tagged region of a document's text.

use sealed::sealed;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::span::Span;
use crate::types::*;

/// A tagged region of interest within a document's plain text: the tag name, the attributes as
/// declared on the source element, and the character span the element's text occupies.
///
/// Annotations are immutable once extracted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpanAnnotation {
    pub(crate) tag: String,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) span: Span,

    /// The span relative to the unstripped plain text, only held when `span` refers to another view of the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) plain: Option<Span>,

    /// SHA-1 checksum of the element text at extraction time, used for text validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) checksum: Option<String>,
}

impl SpanAnnotation {
    pub fn new(
        tag: impl Into<String>,
        attributes: BTreeMap<String, String>,
        span: impl Into<Span>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            span: span.into(),
            plain: None,
            checksum: None,
        }
    }

    /// Builder pattern to add an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the tag name (e.g. `TIMEX3`)
    pub fn tag(&self) -> &str {
        self.tag.as_str()
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Returns the value of a single attribute, if declared
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn begin(&self) -> usize {
        self.span.begin()
    }

    pub fn end(&self) -> usize {
        self.span.end()
    }

    /// Returns the validation checksum, if one was computed during extraction
    pub fn checksum(&self) -> Option<&str> {
        self.checksum.as_deref()
    }

    pub(crate) fn set_end(&mut self, end: usize) {
        self.span = Span::new(self.span.begin, end);
    }

    /// Expresses the span relative to a text that lacks the first `distance` characters.
    /// The original span is retained, as the shift saturates and can not always be undone.
    pub(crate) fn rebase(&mut self, distance: usize) {
        self.plain.get_or_insert(self.span);
        self.span = self.span.shift_left(distance);
    }
}

#[sealed]
impl TypeInfo for SpanAnnotation {
    fn typeinfo() -> Type {
        Type::SpanAnnotation
    }
}
