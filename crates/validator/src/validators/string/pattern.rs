//! Whole-string regular expression matching.

use std::fmt;

use regex::Regex;
use regex_syntax::hir::{Hir, Look};

use crate::foundation::Error;

/// A regular expression that must match an entire string.
///
/// The parsed source is wrapped in start and end anchors, so `[a-z]+` rejects
/// `"abc1"` even though it would find a match inside it. Anchoring happens on
/// the syntax tree rather than the text, so flags and verbose-mode comments
/// in the source keep their meaning. A source that does not
/// compile is kept together with the compiler's diagnostic; validation then
/// reports the diagnostic as an error instead of panicking.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    compiled: Result<Regex, String>,
}

impl Pattern {
    /// Compiles `source`, remembering the failure if it does not compile.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let compiled = compile_anchored(&source);
        if let Err(reason) = &compiled {
            tracing::warn!(pattern = %source, %reason, "string pattern does not compile");
        }
        Self { source, compiled }
    }

    /// Compiles `source`, failing on an invalid expression.
    pub fn try_new(source: impl Into<String>) -> Result<Self, Error> {
        let pattern = Self::new(source);
        match &pattern.compiled {
            Ok(_) => Ok(pattern),
            Err(reason) => Err(Error::InvalidPattern {
                pattern: pattern.source.clone(),
                reason: reason.clone(),
            }),
        }
    }

    /// The pattern as written by the caller.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Matches the whole of `input`. `Err` carries the compile diagnostic.
    pub fn matches(&self, input: &str) -> Result<bool, &str> {
        match &self.compiled {
            Ok(regex) => Ok(regex.is_match(input)),
            Err(reason) => Err(reason),
        }
    }
}

fn compile_anchored(source: &str) -> Result<Regex, String> {
    Regex::new(source).map_err(|e| e.to_string())?;
    let hir = regex_syntax::parse(source).map_err(|e| e.to_string())?;
    let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
    Regex::new(&anchored.to_string()).map_err(|e| e.to_string())
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("valid", &self.compiled.is_ok())
            .finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}
