//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Builds indented lines of Python
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
