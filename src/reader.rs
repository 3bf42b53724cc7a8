/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! This module defines the [`Reader`] trait and its implementation for TempEval-3 (TimeML) files,
//! [`TempEval3Reader`].
//!
//! A TempEval-3 file holds metadata, among which the document creation time, followed by a `TEXT`
//! element with the body. The body carries inline `TIMEX3`, `EVENT` and `SIGNAL` elements:
//!
//! ```xml
//! <TimeML>
//! <DOCID>wsj_0006</DOCID>
//! <DCT><TIMEX3 tid="t0" type="DATE" value="1989-11-02" functionInDocument="CREATION_TIME">11/02/89</TIMEX3></DCT>
//! <TEXT>
//! Pacific First Financial Corp. said shareholders <EVENT eid="e1" class="OCCURRENCE">approved</EVENT> its acquisition
//! </TEXT>
//! </TimeML>
//! ```

use rayon::prelude::*;
use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use roxmltree::Node;

use crate::analyzer::{Analyzer, NoAnalyzer};
use crate::config::{Config, Configurable, OffsetBase, ReferenceTimePolicy};
use crate::document::Document;
use crate::error::TempEvalError;
use crate::extract::extract;
use crate::file::read_file_to_string;
use crate::markup::{parse_xml, to_markup, to_text};
use crate::types::*;

/// The input to parse: either text held in memory, or a file.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// XML held in memory, with an identifier to report as the document's source
    Text { id: &'a str, text: &'a str },
    /// A file to read, `-` designates standard input
    Path(&'a Path),
}

impl<'a> Source<'a> {
    pub fn text(id: &'a str, text: &'a str) -> Self {
        Self::Text { id, text }
    }
}

impl<'a> From<&'a Path> for Source<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

impl<'a> From<&'a std::path::PathBuf> for Source<'a> {
    fn from(path: &'a std::path::PathBuf) -> Self {
        Self::Path(path.as_path())
    }
}

/// A reader turns an input into a [`Document`]. Every call is independent of the others.
pub trait Reader {
    fn parse(&self, source: Source) -> Result<Document, TempEvalError>;

    /// Parses XML held in a string
    fn parse_str(&self, id: &str, text: &str) -> Result<Document, TempEvalError> {
        self.parse(Source::text(id, text))
    }

    /// Parses a file
    fn parse_file(&self, filename: &str) -> Result<Document, TempEvalError> {
        self.parse(Source::Path(Path::new(filename)))
    }
}

/// Reader for TempEval-3 annotated files.
///
/// The linguistic analyzer is injected and shared across all calls; by default no analysis is done.
pub struct TempEval3Reader {
    config: Config,
    analyzer: Arc<dyn Analyzer>,
}

impl Default for TempEval3Reader {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Configurable for TempEval3Reader {
    fn config(&self) -> &Config {
        &self.config
    }

    fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    fn set_config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }
}

impl TempEval3Reader {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            analyzer: Arc::new(NoAnalyzer),
        }
    }

    /// Builder pattern to set the linguistic analyzer that is run on every document's text
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Parses many files in parallel. Results are returned in the same order as the input.
    pub fn parse_all<P>(&self, filenames: &[P]) -> Vec<Result<Document, TempEvalError>>
    where
        P: AsRef<Path> + Sync,
    {
        filenames
            .par_iter()
            .map(|filename| self.parse(Source::Path(filename.as_ref())))
            .collect()
    }

    fn read(&self, id: &str, xml: &str) -> Result<Document, TempEvalError> {
        debug(&self.config, || format!("TempEval3Reader::parse: {}", id));
        let doc = parse_xml(xml, "TempEval3Reader::parse(): parsing input")?;

        let textnode = doc
            .descendants()
            .find(|node| node.is_element() && node.tag_name().name() == self.config.text_tag())
            .ok_or_else(|| {
                TempEvalError::MalformedInputError(
                    format!("No <{}> element found", self.config.text_tag()),
                    "TempEval3Reader::parse(): locating text region",
                )
            })?;

        let dct = self.reference_time(doc.root())?;

        let text = to_text(textnode);
        let markup = to_markup(textnode);
        let leading_whitespace = charlen(&text) - charlen(text.trim_start());
        debug(&self.config, || {
            format!(
                "TempEval3Reader::parse: dct={}, text length={}, leading whitespace={}",
                dct,
                charlen(&text),
                leading_whitespace
            )
        });

        let mut annotations = extract(&markup, 0, self.config.tags())?;
        if self.config.offset_base() == OffsetBase::Analyzer {
            for annotation in annotations.iter_mut() {
                annotation.rebase(leading_whitespace);
            }
        }
        debug(&self.config, || {
            format!(
                "TempEval3Reader::parse: extracted {} annotations",
                annotations.len()
            )
        });

        let mut document = Document::new(id);
        document.text = text;
        document.dct = dct;
        document.annotations = annotations;
        document.leading_whitespace = leading_whitespace;
        document.offset_base = self.config.offset_base();
        document.analysis = self.analyzer.analyze(&document.text)?;
        Ok(document)
    }

    /// Finds the value of the reference time (document creation time) anywhere in the document
    fn reference_time(&self, root: Node) -> Result<String, TempEvalError> {
        let (attribute, value) = self.config.reference_time_attribute();
        let candidates: Vec<Node> = root
            .descendants()
            .filter(|node| {
                node.is_element()
                    && node.tag_name().name() == self.config.reference_time_tag()
                    && node.attribute(attribute) == Some(value)
            })
            .collect();
        let node = match candidates.as_slice() {
            [] => {
                return Err(TempEvalError::MissingReferenceTimeError(
                    "TempEval3Reader::parse(): no reference time tag",
                ))
            }
            [node] => node,
            [node, ..] => match self.config.reference_time_policy() {
                ReferenceTimePolicy::Strict => {
                    return Err(TempEvalError::AmbiguousReferenceTimeError(
                        candidates.len(),
                        "TempEval3Reader::parse()",
                    ))
                }
                ReferenceTimePolicy::First => {
                    warn(|| {
                        format!(
                            "Found {} reference time tags, using the first one",
                            candidates.len()
                        )
                    });
                    node
                }
            },
        };
        node.attribute(self.config.reference_time_value_attribute())
            .map(|value| value.to_string())
            .ok_or(TempEvalError::MissingReferenceTimeError(
                "TempEval3Reader::parse(): reference time tag has no value",
            ))
    }
}

impl Reader for TempEval3Reader {
    fn parse(&self, source: Source) -> Result<Document, TempEvalError> {
        let (id, xml): (Cow<str>, Cow<str>) = match source {
            Source::Text { id, text } => (Cow::Borrowed(id), Cow::Borrowed(text)),
            Source::Path(path) => {
                let filename = path.to_string_lossy();
                let xml = read_file_to_string(&filename, &self.config)?;
                (filename, Cow::Owned(xml))
            }
        };
        self.read(&id, &xml).map_err(|e| match e {
            TempEvalError::MalformedInputError(msg, contextmsg) => {
                TempEvalError::MalformedInputError(format!("{}: {}", id, msg), contextmsg)
            }
            e => e,
        })
    }
}
