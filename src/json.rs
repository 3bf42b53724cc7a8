/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! This module contains the [`ToJson`] and [`FromJson`] traits that are used
//! in serialisation to/from JSON. The actual field layout is derived on the structures themselves.

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::TempEvalError;
use crate::file::*;
use crate::types::*;

pub trait ToJson
where
    Self: TypeInfo + serde::Serialize,
{
    /// Writes a serialisation to any writer
    /// Lower-level function
    fn to_json_writer<W>(&self, writer: W, compact: bool) -> Result<(), TempEvalError>
    where
        W: std::io::Write,
    {
        match compact {
            false => serde_json::to_writer_pretty(writer, &self).map_err(|e| {
                TempEvalError::SerializationError(format!(
                    "Writing {} to file: {}",
                    Self::typeinfo(),
                    e
                ))
            }),
            true => serde_json::to_writer(writer, &self).map_err(|e| {
                TempEvalError::SerializationError(format!(
                    "Writing {} to file: {}",
                    Self::typeinfo(),
                    e
                ))
            }),
        }
    }

    /// Writes this structure to a file (`-` for standard output)
    fn to_json_file(&self, filename: &str, config: &Config) -> Result<(), TempEvalError> {
        debug(config, || {
            format!("{}.to_json_file: filename={:?}", Self::typeinfo(), filename)
        });
        let writer = open_file_writer(filename, config)?;
        self.to_json_writer(writer, false)
    }

    /// Serializes this structure to one string.
    fn to_json_string(&self, compact: bool) -> Result<String, TempEvalError> {
        match compact {
            false => serde_json::to_string_pretty(&self),
            true => serde_json::to_string(&self),
        }
        .map_err(|e| {
            TempEvalError::SerializationError(format!(
                "Writing {} to string: {}",
                Self::typeinfo(),
                e
            ))
        })
    }
}

pub trait FromJson
where
    Self: TypeInfo + DeserializeOwned,
{
    /// Loads a structure from a JSON file (`-` for standard input)
    fn from_json_file(filename: &str, config: &Config) -> Result<Self, TempEvalError> {
        debug(config, || {
            format!("{}.from_json_file: filename={:?}", Self::typeinfo(), filename)
        });
        let reader = open_file_reader(filename, config)?;
        let deserializer = &mut serde_json::Deserializer::from_reader(reader);
        serde_path_to_error::deserialize(deserializer).map_err(|e| {
            TempEvalError::JsonError(e, filename.to_string(), "Reading JSON from file")
        })
    }

    /// Loads a structure from a JSON string
    fn from_json_str(string: &str) -> Result<Self, TempEvalError> {
        let deserializer = &mut serde_json::Deserializer::from_str(string);
        serde_path_to_error::deserialize(deserializer).map_err(|e| {
            TempEvalError::JsonError(e, "(string)".to_string(), "Reading JSON from string")
        })
    }
}

impl FromJson for crate::document::Document {}
