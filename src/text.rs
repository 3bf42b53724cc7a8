/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! This module defines and partially implements the [`Text`] trait.

use crate::error::TempEvalError;
use crate::span::Span;

/// This trait provides methods that operate on structures that hold or represent text content.
/// All spans are expressed in unicode codepoints; these methods convert to and from UTF-8 bytes.
pub trait Text {
    /// Returns a reference to the text
    fn text(&self) -> &str;

    /// Returns the length of the text in unicode points
    /// For bytes, use `Self::text().len()` instead.
    fn textlen(&self) -> usize {
        self.text().chars().count()
    }

    fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Converts a unicode character position to a UTF-8 byte position
    fn utf8byte(&self, charpos: usize) -> Result<usize, TempEvalError> {
        let text = self.text();
        if let Some((bytepos, _)) = text.char_indices().nth(charpos) {
            Ok(bytepos)
        } else if charpos == self.textlen() {
            Ok(text.len())
        } else {
            Err(TempEvalError::SpanOutOfBounds(
                Span::new(charpos, charpos),
                "Text::utf8byte(): character position beyond end of text",
            ))
        }
    }

    /// Converts a UTF-8 byte position into a unicode position
    fn utf8byte_to_charpos(&self, bytepos: usize) -> Result<usize, TempEvalError> {
        let text = self.text();
        if bytepos > text.len() || !text.is_char_boundary(bytepos) {
            return Err(TempEvalError::InvalidUtf8ByteIndex(
                bytepos,
                "Text::utf8byte_to_charpos()",
            ));
        }
        Ok(text[..bytepos].chars().count())
    }

    /// Converts a span of unicode codepoints to a range of UTF-8 bytes
    fn byte_span(&self, span: &Span) -> Result<(usize, usize), TempEvalError> {
        if span.end() > self.textlen() {
            return Err(TempEvalError::SpanOutOfBounds(
                *span,
                "Text::byte_span(): span ends beyond the text",
            ));
        }
        Ok((self.utf8byte(span.begin())?, self.utf8byte(span.end())?))
    }

    /// Returns a string reference to a slice of text as specified by the span
    fn text_by_span(&self, span: &Span) -> Result<&str, TempEvalError> {
        let (begin, end) = self.byte_span(span)?;
        Ok(&self.text()[begin..end])
    }
}

impl Text for str {
    fn text(&self) -> &str {
        self
    }
}

impl Text for String {
    fn text(&self) -> &str {
        self.as_str()
    }
}
