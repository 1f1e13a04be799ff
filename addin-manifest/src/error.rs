use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from an XML deserialization error.
    pub fn metadata_error(&self, source: quick_xml::de::DeError) -> Box<Error> {
        Box::new(Error::MetadataParse {
            src: self.named_source(),
            source,
        })
    }

    /// Create a validation error.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid parameter name error.
    pub fn invalid_parameter_error(
        &self,
        name: impl Into<String>,
        function: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidParameterName {
            src: self.named_source(),
            span,
            name: name.into(),
            function: function.into(),
            reason: reason.into(),
        })
    }

    /// Create an error for a `property` type used with a non-vector rank.
    pub fn property_rank_error(
        &self,
        function: impl Into<String>,
        item: impl Into<String>,
        rank: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::PropertyRank {
            src: self.named_source(),
            span,
            function: function.into(),
            item: item.into(),
            rank: rank.into(),
        })
    }

    /// Create an error for an unrecognized enumerated value.
    pub fn unknown_value_error(
        &self,
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownValue {
            src: self.named_source(),
            span,
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("paths in addin.toml are relative to the directory containing it"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse addin.toml")]
    #[diagnostic(code(addingen::config_error))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse metadata")]
    #[diagnostic(code(addingen::metadata_error))]
    MetadataParse {
        #[source_code]
        src: NamedSource<String>,
        #[source]
        source: quick_xml::de::DeError,
    },

    #[error("{message}")]
    #[diagnostic(code(addingen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(addingen::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("the string '{name}' is not a valid parameter name (function '{function}')")]
    #[diagnostic(code(addingen::invalid_parameter_name), help("{reason}"))]
    InvalidParameterName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid parameter name")]
        span: Option<SourceSpan>,
        name: String,
        function: String,
        reason: String,
    },

    #[error("type 'property' combined with tensor rank '{rank}' in {item} of function '{function}'")]
    #[diagnostic(
        code(addingen::property_rank),
        help("type 'property' can only be combined with tensorRank 'vector'")
    )]
    PropertyRank {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        function: String,
        item: String,
        rank: String,
    },

    #[error("invalid {field} '{value}'")]
    #[diagnostic(code(addingen::unknown_value), help("{reason}"))]
    UnknownValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown {field}")]
        span: Option<SourceSpan>,
        field: String,
        value: String,
        reason: String,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
