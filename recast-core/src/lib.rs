//! Core utilities and types for recast.
//!
//! This crate provides the small, dependency-light building blocks shared
//! by the rest of the workspace: Python literal values, Python identifier
//! rules, and writing generated output to disk.

mod file;
mod identifier;
mod value;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Python naming rules
pub use identifier::{PYTHON_KEYWORDS, is_python_keyword, is_valid_identifier, validate_identifier};
// Python values
pub use value::{PyValue, str_repr};
