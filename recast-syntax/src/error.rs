use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Failure to turn Python source into a syntax tree
#[derive(Debug, Error, Diagnostic)]
pub enum ReadError {
    #[error("invalid Python syntax")]
    #[diagnostic(
        code(recast::syntax),
        help("recast reads the input with a Python 3 grammar; fix the syntax error and try again")
    )]
    Syntax {
        #[label("the parser could not make sense of this")]
        span: SourceSpan,
    },

    #[error("failed to load the Python grammar: {0}")]
    #[diagnostic(code(recast::grammar))]
    Language(#[from] tree_sitter::LanguageError),

    #[error("the parser produced no syntax tree")]
    #[diagnostic(code(recast::syntax))]
    NoTree,
}
