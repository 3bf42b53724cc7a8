/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! This module implements CSV output of a document's annotations, one row per annotation, in document order.

use csv;
use serde::Serialize;
use std::borrow::Cow;

use crate::config::Config;
use crate::document::Document;
use crate::error::TempEvalError;
use crate::file::open_file_writer;
use crate::types::*;

#[derive(Serialize)]
struct SpanAnnotationCsv<'a> {
    #[serde(rename = "Source")]
    source: Cow<'a, str>,
    #[serde(rename = "Tag")]
    tag: Cow<'a, str>,
    #[serde(rename = "Begin")]
    begin: usize,
    #[serde(rename = "End")]
    end: usize,
    #[serde(rename = "Text")]
    text: Cow<'a, str>,
    /// Attributes encoded as a JSON object
    #[serde(rename = "Attributes")]
    attributes: String,
}

pub trait ToCsv {
    /// Writes CSV output to the writer
    fn to_csv_writer<W>(&self, writer: W) -> Result<(), TempEvalError>
    where
        W: std::io::Write;

    /// Writes CSV output to a file (`-` for standard output)
    fn to_csv_file(&self, filename: &str, config: &Config) -> Result<(), TempEvalError> {
        debug(config, || format!("to_csv_file: filename={:?}", filename));
        let writer = open_file_writer(filename, config)?;
        self.to_csv_writer(writer)
    }

    /// Writes CSV output to a string
    fn to_csv_string(&self) -> Result<String, TempEvalError> {
        let mut buffer: Vec<u8> = Vec::new();
        self.to_csv_writer(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| {
            TempEvalError::SerializationError(format!("CSV output is not valid UTF-8: {}", e))
        })
    }
}

impl ToCsv for Document {
    fn to_csv_writer<W>(&self, writer: W) -> Result<(), TempEvalError>
    where
        W: std::io::Write,
    {
        let mut writer = csv::Writer::from_writer(writer);
        for annotation in self.annotations() {
            let attributes = serde_json::to_string(annotation.attributes()).map_err(|e| {
                TempEvalError::SerializationError(format!("Failure serializing attributes: {}", e))
            })?;
            writer
                .serialize(SpanAnnotationCsv {
                    source: Cow::Borrowed(self.source()),
                    tag: Cow::Borrowed(annotation.tag()),
                    begin: annotation.begin(),
                    end: annotation.end(),
                    text: Cow::Borrowed(self.annotation_text(annotation)?),
                    attributes,
                })
                .map_err(|e| {
                    TempEvalError::SerializationError(format!("Failure serializing CSV: {:?}", e))
                })?;
        }
        writer.flush().map_err(|e| {
            TempEvalError::IOError(e, self.source().to_string(), "Flushing CSV output")
        })
    }
}
