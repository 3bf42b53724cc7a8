/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! ## Introduction
//!
//! This library reads TempEval-3 (TimeML) annotated corpus files, in which temporal expressions
//! (`TIMEX3`), events (`EVENT`) and signal words (`SIGNAL`) are marked with inline XML tags, and
//! converts them into a normalized stand-off representation: the plain text of the document body
//! plus an ordered list of annotations, each with its tag, attributes, and the character offsets of
//! the text it covers.
//!
//! **What can you do with this library?**
//!
//! * Read a TempEval-3 file (from a path or from memory) into a [`Document`] via [`TempEval3Reader`]
//!    * The document creation time (`dct`) is extracted from the metadata.
//!    * Offsets are unicode codepoints into the plain text; conversion to UTF-8 bytes is available via the [`Text`] trait.
//!    * Offsets can alternatively be expressed relative to the text without leading whitespace, as seen by analyzers that trim their input ([`OffsetBase`]).
//! * Extract stand-off annotations from any inline XML fragment via [`extract()`].
//! * Run a linguistic [`Analyzer`] on every document (injected, shared between calls).
//! * Validate that every annotation still selects the text it was extracted from (feature `textvalidation`).
//! * Write documents to JSON ([`ToJson`]) and annotations to CSV ([`ToCsv`], feature `csv`).
//!
//! Main API:
//! * [`Reader`] and [`TempEval3Reader`]
//! * [`Document`]
//! * [`SpanAnnotation`]
//! * [`Span`]
//! * [`Config`]
//! * [`Analyzer`]
//! * [`TempEvalError`]

mod analyzer;
mod annotation;
mod config;
mod document;
mod error;
mod extract;
mod file;
mod json;
pub mod markup;
mod reader;
mod span;
mod text;
mod types;

#[cfg(feature = "csv")]
mod csv;

#[cfg(feature = "textvalidation")]
mod textvalidation;

// Our internal crate structure is not very relevant to the outside world,
// expose all structs and traits in the root namespace, and be explicit about it:

#[cfg(feature = "csv")]
pub use crate::csv::ToCsv;
pub use analyzer::{Analysis, Analyzer, NoAnalyzer, WhitespaceAnalyzer};
pub use annotation::SpanAnnotation;
pub use config::{Config, Configurable, OffsetBase, ReferenceTimePolicy};
pub use document::Document;
pub use error::TempEvalError;
pub use extract::{extract, extract_node};
pub use json::{FromJson, ToJson};
pub use reader::{Reader, Source, TempEval3Reader};
pub use span::Span;
pub use text::Text;
pub use types::{Type, TypeInfo};

mod tests;
