/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! This module implements the annotation extractor. It turns inline markup into stand-off
//! [`SpanAnnotation`]s whose offsets refer to the plain text of that markup (tags removed).
//!
//! Offsets are never obtained by searching the plain text. A single cursor is threaded through a
//! depth-first walk of the element tree and only ever advanced by the length of text as it is
//! consumed:
//!
//! * entering an element advances the cursor by the element's *direct text* (the text before its first child element);
//! * leaving a child element advances the cursor by the child's *tail text* (the text after its closing tag, still inside the parent).
//!
//! An element of interest begins at the cursor position on entry and ends at the cursor position
//! on exit, so its span covers all of its text, including that of nested elements. Empty elements
//! produce zero-width spans. Annotations are returned in the order their opening tags appear.

use roxmltree::Node;
use std::collections::{BTreeMap, BTreeSet};

use crate::annotation::SpanAnnotation;
use crate::error::TempEvalError;
use crate::markup::{attribute_name, direct_text, parse_xml, tail_text};
use crate::span::Span;
use crate::types::*;

/// Extracts annotations for all elements in `tags` from an XML fragment.
/// The cursor starts at `start_offset`; the root element's own text counts as well.
pub fn extract(
    markup: &str,
    start_offset: usize,
    tags: &BTreeSet<String>,
) -> Result<Vec<SpanAnnotation>, TempEvalError> {
    let doc = parse_xml(markup, "extract(): parsing markup")?;
    Ok(extract_node(doc.root_element(), start_offset, tags))
}

/// Extracts annotations for all elements in `tags` from an already parsed element and its descendants.
pub fn extract_node(node: Node, start_offset: usize, tags: &BTreeSet<String>) -> Vec<SpanAnnotation> {
    let mut extractor = Extractor::new(start_offset, tags);
    extractor.visit(node);
    extractor.annotations
}

struct Extractor<'a> {
    /// The current character position in the plain text
    cursor: usize,

    tags: &'a BTreeSet<String>,

    annotations: Vec<SpanAnnotation>,
}

impl<'a> Extractor<'a> {
    fn new(start_offset: usize, tags: &'a BTreeSet<String>) -> Self {
        Self {
            cursor: start_offset,
            tags,
            annotations: Vec::new(),
        }
    }

    fn visit(&mut self, node: Node) {
        let pending = if self.tags.contains(node.tag_name().name()) {
            self.annotations.push(self.open(node));
            Some(self.annotations.len() - 1)
        } else {
            None
        };

        self.cursor += charlen(&direct_text(node));
        for child in node.children().filter(|child| child.is_element()) {
            self.visit(child);
            self.cursor += charlen(&tail_text(child));
        }

        if let Some(index) = pending {
            self.annotations[index].set_end(self.cursor);
        }
    }

    /// Creates the annotation for an element of interest, its end is fixed when the element is left.
    fn open(&self, node: Node) -> SpanAnnotation {
        let attributes: BTreeMap<String, String> = node
            .attributes()
            .map(|attribute| (attribute_name(node, &attribute), attribute.value().to_string()))
            .collect();
        #[allow(unused_mut)]
        let mut annotation = SpanAnnotation::new(
            node.tag_name().name(),
            attributes,
            Span::new(self.cursor, self.cursor),
        );
        #[cfg(feature = "textvalidation")]
        {
            annotation.checksum =
                crate::textvalidation::text_checksum(&crate::markup::to_text(node));
        }
        annotation
    }
}
