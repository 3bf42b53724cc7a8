/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! This module defines the [`Config`] structure and the [`Configurable`] trait.

use sealed::sealed;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::TempEvalError;
use crate::file::*;
use crate::json::ToJson;
use crate::types::*;

/// Determines what to do when a document holds more than one reference-time (creation time) tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum ReferenceTimePolicy {
    /// Take the first match in document order and print a warning
    #[default]
    First,
    /// Fail with [`TempEvalError::AmbiguousReferenceTimeError`]
    Strict,
}

/// Determines which view of the text annotation offsets refer to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum OffsetBase {
    /// Offsets are relative to the plain text as extracted, leading whitespace included
    #[default]
    PlainText,
    /// Offsets are relative to the plain text with leading whitespace stripped, which is the view
    /// a linguistic analyzer that trims its input reports its own offsets in
    Analyzer,
}

pub trait Configurable: Sized {
    //// Obtain the configuration
    fn config(&self) -> &Config;

    //// Obtain the configuration mutably
    fn config_mut(&mut self) -> &mut Config;

    ///Builder pattern to associate a configuration
    fn with_config(mut self, config: Config) -> Self {
        self.set_config(config);
        self
    }

    ///Setter to associate a configuration
    fn set_config(&mut self, config: Config) -> &mut Self;
}

/// This holds the configuration for reading TempEval-3 documents. The defaults follow the TempEval-3 (TimeML) conventions.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Debug mode
    pub(crate) debug: bool,

    /// The working directory
    pub(crate) workdir: Option<PathBuf>,

    /// The element that holds the document body
    pub(crate) text_tag: String,

    /// The elements in the body that are extracted as annotations
    pub(crate) tags: BTreeSet<String>,

    /// The element that may hold the reference time
    pub(crate) reference_time_tag: String,

    /// The attribute that marks an element as reference time
    pub(crate) reference_time_attribute: String,

    /// The value [`Self::reference_time_attribute`] must have
    pub(crate) reference_time_attribute_value: String,

    /// The attribute that holds the actual timestamp
    pub(crate) reference_time_value_attribute: String,

    pub(crate) reference_time_policy: ReferenceTimePolicy,

    pub(crate) offset_base: OffsetBase,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            workdir: None,
            text_tag: "TEXT".to_string(),
            tags: ["TIMEX3", "EVENT", "SIGNAL"]
                .into_iter()
                .map(|s| s.to_string())
                .collect(),
            reference_time_tag: "TIMEX3".to_string(),
            reference_time_attribute: "functionInDocument".to_string(),
            reference_time_attribute_value: "CREATION_TIME".to_string(),
            reference_time_value_attribute: "value".to_string(),
            reference_time_policy: ReferenceTimePolicy::default(),
            offset_base: OffsetBase::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable debug mode. In debug mode, verbose output will be printed to standard error output
    pub fn with_debug(mut self, value: bool) -> Self {
        self.debug = value;
        self
    }

    /// Is debug mode enabled or not?
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Sets the working directory, relative input files are resolved against it first
    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(workdir.into());
        self
    }

    ///  Return the working directory, if set
    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_ref().map(|x| x.as_path())
    }

    /// Sets the name of the element holding the document body (default: `TEXT`)
    pub fn with_text_tag(mut self, tag: impl Into<String>) -> Self {
        self.text_tag = tag.into();
        self
    }

    pub fn text_tag(&self) -> &str {
        self.text_tag.as_str()
    }

    /// Replaces the set of tags that are extracted as annotations (default: `TIMEX3`, `EVENT`, `SIGNAL`)
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds one tag to the set of tags that are extracted as annotations
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Returns the set of tags that are extracted as annotations
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Sets how the reference time is identified: an element `tag` carrying `attribute="value"`.
    /// The timestamp itself is read from `value_attribute`.
    pub fn with_reference_time(
        mut self,
        tag: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
        value_attribute: impl Into<String>,
    ) -> Self {
        self.reference_time_tag = tag.into();
        self.reference_time_attribute = attribute.into();
        self.reference_time_attribute_value = value.into();
        self.reference_time_value_attribute = value_attribute.into();
        self
    }

    pub fn reference_time_tag(&self) -> &str {
        self.reference_time_tag.as_str()
    }

    pub fn reference_time_attribute(&self) -> (&str, &str) {
        (
            self.reference_time_attribute.as_str(),
            self.reference_time_attribute_value.as_str(),
        )
    }

    pub fn reference_time_value_attribute(&self) -> &str {
        self.reference_time_value_attribute.as_str()
    }

    /// Sets what to do when more than one reference time is found
    pub fn with_reference_time_policy(mut self, policy: ReferenceTimePolicy) -> Self {
        self.reference_time_policy = policy;
        self
    }

    pub fn reference_time_policy(&self) -> ReferenceTimePolicy {
        self.reference_time_policy
    }

    /// Sets which view of the text annotation offsets refer to
    pub fn with_offset_base(mut self, base: OffsetBase) -> Self {
        self.offset_base = base;
        self
    }

    pub fn offset_base(&self) -> OffsetBase {
        self.offset_base
    }

    /// Loads configuration from a JSON file, missing fields take their default values
    pub fn from_file(filename: &str) -> Result<Self, TempEvalError> {
        let reader = open_file_reader(filename, &Config::default())?;
        let deserializer = &mut serde_json::Deserializer::from_reader(reader);
        let result: Result<Self, _> = serde_path_to_error::deserialize(deserializer);
        result.map_err(|e| {
            TempEvalError::JsonError(e, filename.to_string(), "Reading config from file")
        })
    }
}

#[sealed]
impl TypeInfo for Config {
    fn typeinfo() -> Type {
        Type::Config
    }
}

impl ToJson for Config {}
