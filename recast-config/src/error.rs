use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the file content and name so errors can be rendered with labels
/// pointing into `recast.toml`.
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

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an error for an option value with no Python equivalent.
    pub fn invalid_value_error(
        &self,
        option: impl Into<String>,
        reason: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidValue {
            src: self.named_source(),
            span: span.into(),
            option: option.into(),
            reason: reason.into(),
        })
    }

    /// Create an error for an option the target framework does not accept.
    pub fn unknown_option_error(
        &self,
        option: impl Into<String>,
        framework: impl Into<String>,
        expected: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownOption {
            src: self.named_source(),
            span: span.into(),
            option: option.into(),
            framework: framework.into(),
            expected: expected.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse recast.toml")]
    #[diagnostic(code(recast::config_parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for option '{option}'")]
    #[diagnostic(
        code(recast::invalid_option_value),
        help(
            "{reason}. Use a boolean, number, string, list, `{{ expr = \"...\" }}` or `{{ none = true }}`"
        )
    )]
    InvalidValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("no Python equivalent")]
        span: SourceSpan,
        option: String,
        reason: String,
    },

    #[error("unknown option '{option}' for {framework}")]
    #[diagnostic(code(recast::unknown_option), help("{framework} accepts: {expected}"))]
    UnknownOption {
        #[source_code]
        src: NamedSource<String>,
        #[label("not accepted by {framework}")]
        span: SourceSpan,
        option: String,
        framework: String,
        expected: String,
    },

    #[error("invalid factory name '{name}'")]
    #[diagnostic(
        code(recast::invalid_factory),
        help("{reason}. Factory names are matched against the last segment of a base class or call")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: SourceSpan,
        name: String,
        reason: String,
    },
}
