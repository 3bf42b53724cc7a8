/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! This module defines the [`Analyzer`] trait, the seam to an external linguistic analysis service
//! (tokenizer, parser) that is run once on every document's text. The reader does not interpret
//! the result; it is kept as an opaque [`Analysis`] on the [`crate::Document`].
//!
//! Analyzers are injected into the reader and shared between calls (and threads), hence the
//! `Send + Sync` bound. Whether concurrent use is safe beyond that is up to the implementation.

use regex::Regex;
use sealed::sealed;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::TempEvalError;
use crate::types::*;

/// The opaque result of a linguistic analysis.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Analysis(serde_json::Value);

impl Analysis {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// An analysis that holds nothing
    pub fn empty() -> Self {
        Self(serde_json::Value::Null)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_null()
    }

    /// Returns the underlying JSON value
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_json(self) -> serde_json::Value {
        self.0
    }
}

#[sealed]
impl TypeInfo for Analysis {
    fn typeinfo() -> Type {
        Type::Analysis
    }
}

/// A linguistic analysis service, called once per document with the document's plain text.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Analysis, TempEvalError>;
}

impl<F> Analyzer for F
where
    F: Fn(&str) -> Result<Analysis, TempEvalError> + Send + Sync,
{
    fn analyze(&self, text: &str) -> Result<Analysis, TempEvalError> {
        self(text)
    }
}

/// An analyzer that does nothing and returns an empty analysis
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnalyzer;

impl Analyzer for NoAnalyzer {
    fn analyze(&self, _text: &str) -> Result<Analysis, TempEvalError> {
        Ok(Analysis::empty())
    }
}

/// A minimal tokenizer that behaves like common NLP pipelines with respect to offsets: it strips
/// leading whitespace before tokenizing, so its token offsets (in unicode codepoints) are relative
/// to the stripped text.
///
/// The result has the shape `{"tokens": [{"text": ..., "begin": ..., "end": ...}, ...]}`.
#[derive(Debug, Clone)]
pub struct WhitespaceAnalyzer {
    expression: Regex,
}

impl Default for WhitespaceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl WhitespaceAnalyzer {
    pub fn new() -> Self {
        Self {
            expression: Regex::new(r"\S+").expect("static regular expression must compile"),
        }
    }
}

impl Analyzer for WhitespaceAnalyzer {
    fn analyze(&self, text: &str) -> Result<Analysis, TempEvalError> {
        let text = text.trim_start();
        let mut tokens = Vec::new();
        // regex reports byte offsets, convert them to codepoints as we go
        let mut charpos = 0;
        let mut bytepos = 0;
        for m in self.expression.find_iter(text) {
            charpos += charlen(&text[bytepos..m.start()]);
            let begin = charpos;
            charpos += charlen(m.as_str());
            bytepos = m.end();
            tokens.push(json!({
                "text": m.as_str(),
                "begin": begin,
                "end": charpos,
            }));
        }
        Ok(Analysis::new(json!({ "tokens": tokens })))
    }
}
