//! Declaration model for recast.
//!
//! This crate holds the framework-independent representation of a typed
//! record: a named declaration with ordered fields, each field carrying a
//! recursive type expression.
//!
//! # Architecture
//!
//! ```text
//! input.py → recast-syntax (tree) → extractor → recast-ir (declarations) → emitters
//! ```
//!
//! Nothing here knows which surface syntax a declaration came from or which
//! framework it will be emitted for.

mod declaration;
mod serde_helpers;
mod types;

pub use declaration::{Declaration, FieldDef, SourceSyntaxKind};
pub use types::TypeExpr;
