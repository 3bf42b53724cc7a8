/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! This module contains some small shared types and helper functions used throughout the library.

use sealed::sealed;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Config;

/// An enumeration of the main types this library exposes. Mostly used for reporting and serialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Type {
    Config,
    Document,
    SpanAnnotation,
    Span,
    Analysis,
}

impl Type {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "Config",
            Self::Document => "Document",
            Self::SpanAnnotation => "SpanAnnotation",
            Self::Span => "Span",
            Self::Analysis => "Analysis",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Provides type introspection, used in messages and serialisation.
/// This is a sealed trait, not implementable outside this crate.
#[sealed(pub(crate))] //<-- this ensures nobody outside this crate can implement the trait
pub trait TypeInfo {
    /// Return the type (introspection).
    fn typeinfo() -> Type;
}

/// Prints a debug message to standard error output, but only if debug mode is enabled in the configuration.
/// The message is passed as a closure so it is only computed when actually needed.
pub(crate) fn debug<F>(config: &Config, message_func: F)
where
    F: FnOnce() -> String,
{
    if config.debug() {
        eprintln!("[tempeval debug] {}", message_func());
    }
}

/// Prints a warning to standard error output, regardless of debug mode.
pub(crate) fn warn<F>(message_func: F)
where
    F: FnOnce() -> String,
{
    eprintln!("[tempeval] WARNING: {}", message_func());
}

/// Returns the length of a string in unicode codepoints (not bytes!)
pub(crate) fn charlen(s: &str) -> usize {
    s.chars().count()
}
