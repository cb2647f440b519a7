use std::fmt;

use miette::{Diagnostic, SourceSpan};
use recast_syntax::Span;
use thiserror::Error;

/// A construct that stops extraction.
#[derive(Debug, Error, Diagnostic)]
pub enum ExtractError {
    #[error("unsupported type expression: {kind}")]
    #[diagnostic(
        code(recast::unsupported_type),
        help("field types must be names, dotted names, or subscripts such as `List[int]`")
    )]
    UnsupportedType {
        kind: String,
        #[label("expected a type here")]
        span: SourceSpan,
    },

    #[error("unsupported {element} in the body of '{declaration}'")]
    #[diagnostic(
        code(recast::unsupported_body_element),
        help("a TypedDict body may only contain `name: type` annotations")
    )]
    UnsupportedBodyElement {
        declaration: String,
        element: String,
        #[label("not a field annotation")]
        span: SourceSpan,
    },
}

impl ExtractError {
    pub fn span(&self) -> SourceSpan {
        match self {
            ExtractError::UnsupportedType { span, .. }
            | ExtractError::UnsupportedBodyElement { span, .. } => *span,
        }
    }
}

/// A non-fatal issue found during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractWarning {
    /// A dict-literal key that cannot be a field name; the field is skipped.
    InvalidFieldName {
        declaration: String,
        key: String,
        reason: &'static str,
        span: Span,
    },
    /// A field default in an inline block; the default is dropped.
    IgnoredDefault {
        declaration: String,
        field: String,
        span: Span,
    },
    /// The string passed to the factory differs from the assigned name.
    NameMismatch {
        assigned: String,
        declared: String,
        span: Span,
    },
    /// A `**mapping` entry in a dict literal; its fields cannot be known.
    UnpackedMapping { declaration: String, span: Span },
}

impl ExtractWarning {
    pub fn span(&self) -> Span {
        match self {
            ExtractWarning::InvalidFieldName { span, .. }
            | ExtractWarning::IgnoredDefault { span, .. }
            | ExtractWarning::NameMismatch { span, .. }
            | ExtractWarning::UnpackedMapping { span, .. } => *span,
        }
    }

    /// Name of the declaration the warning belongs to
    pub fn declaration(&self) -> &str {
        match self {
            ExtractWarning::InvalidFieldName { declaration, .. }
            | ExtractWarning::IgnoredDefault { declaration, .. }
            | ExtractWarning::UnpackedMapping { declaration, .. } => declaration,
            ExtractWarning::NameMismatch { assigned, .. } => assigned,
        }
    }

    /// Dotted location for diagnostics (`Movie` or `Movie.year`)
    pub fn location(&self) -> String {
        match self {
            ExtractWarning::InvalidFieldName {
                declaration, key, ..
            } => format!("{}.{}", declaration, key),
            ExtractWarning::IgnoredDefault {
                declaration, field, ..
            } => format!("{}.{}", declaration, field),
            other => other.declaration().to_string(),
        }
    }
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractWarning::InvalidFieldName {
                declaration,
                key,
                reason,
                ..
            } => write!(
                f,
                "skipping field '{}' of '{}': {}",
                key, declaration, reason
            ),
            ExtractWarning::IgnoredDefault {
                declaration, field, ..
            } => write!(
                f,
                "ignoring default value of '{}.{}'; defaults are not carried over",
                declaration, field
            ),
            ExtractWarning::NameMismatch {
                assigned, declared, ..
            } => write!(
                f,
                "'{}' is declared with the name '{}'; using '{}'",
                assigned, declared, assigned
            ),
            ExtractWarning::UnpackedMapping { declaration, .. } => write!(
                f,
                "skipping unpacked mapping in '{}'; its fields cannot be determined",
                declaration
            ),
        }
    }
}
