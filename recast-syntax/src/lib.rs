//! Python syntax tree for recast.
//!
//! The extractor never looks at source text. It consumes the typed tree in
//! [`ast`], which [`read_python`] builds from source using tree-sitter.
//! Only the shapes the extractor cares about get dedicated variants;
//! everything else is kept as an `Other` node tagged with its grammar kind.

pub mod ast;
mod error;
mod reader;
mod walk;

pub use ast::{Constant, DictEntry, Expr, ExprKind, Keyword, Module, Span, Stmt, StmtKind};
pub use error::ReadError;
pub use reader::read_python;
pub use walk::{Node, Walk};
