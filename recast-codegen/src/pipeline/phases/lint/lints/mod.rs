//! Built-in declaration lints.

mod duplicate_declaration;
mod empty_declaration;

pub use duplicate_declaration::DuplicateDeclarationLint;
pub use empty_declaration::EmptyDeclarationLint;
