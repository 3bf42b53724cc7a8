/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! This module implements text validation: during extraction every annotation receives a checksum
//! of the text of its source element, which can later be compared against the text its span selects
//! in the document. This verifies the offset bookkeeping, and detects documents whose text was
//! altered after annotations were extracted.
//!
//! This module is implemented as an extra feature and may be enabled/disabled at compile time.

use sha1::{Digest, Sha1};

use crate::annotation::SpanAnnotation;
use crate::document::Document;
use crate::error::TempEvalError;

/// Returns (computes) the SHA-1 checksum of a text (None if the text is empty)
/// Note that this is cryptographically insecure! (but fast)
pub(crate) fn text_checksum(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        let mut hasher = Sha1::new();
        hasher.update(text);
        Some(base16ct::lower::encode_string(&hasher.finalize()))
    }
}

impl Document {
    /// Tests if the annotation still selects the text it was extracted from.
    /// Zero-width annotations are valid if they have no checksum.
    pub fn validate_annotation(&self, annotation: &SpanAnnotation) -> bool {
        match self.annotation_text(annotation) {
            Ok(text) => text_checksum(text).as_deref() == annotation.checksum(),
            Err(_) => false,
        }
    }

    /// Validate the text of all annotations
    pub fn validate_text(&self, warn_for_all: bool) -> Result<(), TempEvalError> {
        let mut failures = 0;
        for (i, annotation) in self.annotations().iter().enumerate() {
            if !self.validate_annotation(annotation) {
                let msg = format!(
                    "Failed on annotation #{} ({} at {})",
                    i,
                    annotation.tag(),
                    annotation.span()
                );
                failures += 1;
                if warn_for_all {
                    eprintln!("[tempeval validation] {}", msg);
                } else {
                    return Err(TempEvalError::ValidationError(msg, "Document::validate_text()"));
                }
            }
        }
        if failures == 0 {
            Ok(())
        } else {
            Err(TempEvalError::ValidationError(
                format!("{} annotations failed to validate their text!", failures),
                "Document::validate_text()",
            ))
        }
    }
}
