//! Built-in pipeline phases.
//!
//! - [`ExtractPhase`] finds declarations in the syntax tree
//! - [`LintPhase`] checks the extracted declarations

mod extract;
mod lint;

pub use extract::ExtractPhase;
pub use lint::{DuplicateDeclarationLint, EmptyDeclarationLint, Lint, LintInfo, LintPhase};
