//! Declarations and their fields.

use serde::Serialize;

use crate::{TypeExpr, serde_helpers::serialize_display};

/// One `name: type` pair of a declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type", serialize_with = "serialize_display")]
    pub type_expr: TypeExpr,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, type_expr: TypeExpr) -> Self {
        Self {
            name: name.into(),
            type_expr,
        }
    }
}

/// A named record type with its fields in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl Declaration {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Which surface syntax a declaration was written in.
///
/// Kept for diagnostics only; emission never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceSyntaxKind {
    /// `class Movie(TypedDict): ...`
    InlineBlock,
    /// `Movie = TypedDict("Movie", {...})`
    DictLiteral,
}

impl SourceSyntaxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceSyntaxKind::InlineBlock => "inline block",
            SourceSyntaxKind::DictLiteral => "dict literal",
        }
    }
}
