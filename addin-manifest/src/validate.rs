//! Validation context and utilities for metadata parsing.

use std::{str::FromStr, sync::Arc};

use addingen_core::is_identifier;
use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parameter names added implicitly during post-processing.
pub const IMPLICIT_PARAMETER_NAMES: &[&str] = &["objectID", "permanent", "trigger", "enumerationID"];

/// C and C++ keywords that cannot appear as names in generated bindings.
#[rustfmt::skip]
pub(crate) const CPP_KEYWORDS: &[&str] = &[
    "auto", "bool", "break", "case", "catch", "char", "class", "const", "continue", "default",
    "delete", "do", "double", "else", "enum", "explicit", "extern", "false", "float", "for",
    "friend", "goto", "if", "inline", "int", "long", "mutable", "namespace", "new", "operator",
    "private", "protected", "public", "register", "return", "short", "signed", "sizeof",
    "static", "struct", "switch", "template", "this", "throw", "true", "try", "typedef",
    "typename", "union", "unsigned", "using", "virtual", "void", "volatile", "while",
];

/// Check if a name is a C/C++ keyword
pub(crate) fn is_cpp_keyword(name: &str) -> bool {
    CPP_KEYWORDS.contains(&name)
}

/// Validate that a name is a usable identifier in generated code.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if is_cpp_keyword(name) {
        return Some("name is a C++ reserved keyword");
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Some("name must start with a letter or underscore");
    }
    if !is_identifier(name) {
        return Some("name must contain only letters, numbers, and underscores");
    }
    None
}

/// Validate a declared parameter name.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_parameter_name(name: &str) -> Option<&'static str> {
    if IMPLICIT_PARAMETER_NAMES.contains(&name) {
        return Some("this name is reserved for parameters added implicitly by the generator");
    }
    validate_identifier(name)
}

/// Find the span of a `name="..."` attribute value in XML source, starting at `from`.
pub(crate) fn find_attr_span(src: &str, name: &str, from: usize) -> Option<SourceSpan> {
    let haystack = src.get(from..)?;
    for quote in ['"', '\''] {
        let pattern = format!("name={quote}{name}{quote}");
        if let Some(pos) = haystack.find(&pattern) {
            // skip `name="`
            let start = from + pos + 6;
            return Some(SourceSpan::from((start, name.len())));
        }
    }
    None
}

/// Parsing and validation context that carries source information.
///
/// The optional anchor narrows span lookups to the part of the file after a
/// given element, so a parameter is located inside its own function.
#[derive(Debug, Clone)]
pub struct ParseContext {
    source: Arc<SourceContext>,
    anchor: usize,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            anchor: 0,
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Return a context anchored at the element named `name`.
    pub fn within(&self, name: &str) -> Self {
        let anchor = self
            .find_span(name)
            .map(|span| span.offset())
            .unwrap_or(self.anchor);
        Self {
            source: Arc::clone(&self.source),
            anchor,
        }
    }

    /// Find the span of a name attribute at or after the anchor.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_attr_span(self.source.src(), name, self.anchor)
    }

    /// Validate that a name is a valid identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                kind,
                reason,
                self.find_span(name),
            ));
        }
        Ok(())
    }

    /// Validate a declared parameter name of `function`.
    pub fn validate_parameter_name(&self, name: &str, function: &str) -> Result<()> {
        if let Some(reason) = validate_parameter_name(name) {
            return Err(self.source.invalid_parameter_error(
                name,
                function,
                reason,
                self.find_span(name),
            ));
        }
        Ok(())
    }

    /// Parse an enumerated metadata value such as a type or tensor rank.
    pub fn parse_value<T>(&self, field: &str, value: &str, owner: &str) -> Result<T>
    where
        T: FromStr<Err = String>,
    {
        value.trim().parse::<T>().map_err(|reason| {
            self.source
                .unknown_value_error(field, value, reason, self.find_span(owner))
        })
    }
}
