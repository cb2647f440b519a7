//! Declaration extraction.
//!
//! Walks a syntax tree and recognizes the two ways a TypedDict can be
//! written:
//!
//! ```python
//! class Movie(TypedDict):          # inline block
//!     title: str
//!
//! Movie = TypedDict("Movie", {"title": str})   # dict literal
//! ```
//!
//! Both produce the same [`Declaration`]. Nodes of any other shape are
//! skipped.

mod error;
mod type_expr;

pub use error::{ExtractError, ExtractWarning};
use recast_config::DEFAULT_FACTORIES;
use recast_core::validate_identifier;
use recast_ir::{Declaration, FieldDef, SourceSyntaxKind};
use recast_syntax::{Constant, DictEntry, Expr, ExprKind, Module, Span, Stmt, StmtKind};
use tracing::debug;
pub use type_expr::type_expr;

/// A declaration together with where and how it was written
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDeclaration {
    pub declaration: Declaration,
    pub kind: SourceSyntaxKind,
    pub span: Span,
}

/// Everything found in one tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub declarations: Vec<ExtractedDeclaration>,
    pub warnings: Vec<ExtractWarning>,
}

impl Extraction {
    /// The declarations without their source information
    pub fn into_declarations(self) -> Vec<Declaration> {
        self.declarations
            .into_iter()
            .map(|extracted| extracted.declaration)
            .collect()
    }
}

/// Recognizes TypedDict declarations by base class or factory name.
#[derive(Debug, Clone)]
pub struct Extractor {
    factories: Vec<String>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::with_factories(DEFAULT_FACTORIES.iter().copied())
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recognize these names instead of `TypedDict`.
    ///
    /// A name matches a bare name or the last segment of a dotted one, so
    /// `TypedDict` also matches `typing.TypedDict`.
    pub fn with_factories(factories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            factories: factories.into_iter().map(Into::into).collect(),
        }
    }

    pub fn factories(&self) -> &[String] {
        &self.factories
    }

    fn is_factory(&self, expr: &Expr) -> bool {
        expr.last_segment()
            .is_some_and(|name| self.factories.iter().any(|f| f == name))
    }

    /// Extract every declaration in the tree, in pre-order.
    ///
    /// The first fatal error aborts extraction; no partial result is returned.
    pub fn extract(&self, module: &Module) -> Result<Extraction, ExtractError> {
        let mut extraction = Extraction::default();

        for stmt in module.statements() {
            let found = match &stmt.kind {
                StmtKind::ClassDef {
                    name, bases, body, ..
                } if bases.iter().any(|base| self.is_factory(base)) => Some((
                    self.inline_block(name, body, &mut extraction.warnings)?,
                    SourceSyntaxKind::InlineBlock,
                )),
                StmtKind::Assign { targets, value } => self
                    .dict_literal(stmt, targets, value, &mut extraction.warnings)?
                    .map(|declaration| (declaration, SourceSyntaxKind::DictLiteral)),
                _ => None,
            };

            if let Some((declaration, kind)) = found {
                debug!(
                    name = %declaration.name,
                    kind = kind.as_str(),
                    fields = declaration.fields.len(),
                    "extracted declaration"
                );
                extraction.declarations.push(ExtractedDeclaration {
                    declaration,
                    kind,
                    span: stmt.span,
                });
            }
        }

        Ok(extraction)
    }

    fn inline_block(
        &self,
        name: &str,
        body: &[Stmt],
        warnings: &mut Vec<ExtractWarning>,
    ) -> Result<Declaration, ExtractError> {
        let mut fields = Vec::with_capacity(body.len());

        for stmt in body {
            let StmtKind::AnnAssign {
                target,
                annotation,
                value,
            } = &stmt.kind
            else {
                return Err(ExtractError::UnsupportedBodyElement {
                    declaration: name.to_string(),
                    element: stmt.kind.describe().to_string(),
                    span: stmt.span.into(),
                });
            };

            let ExprKind::Name(field) = &target.kind else {
                return Err(ExtractError::UnsupportedBodyElement {
                    declaration: name.to_string(),
                    element: format!("annotated assignment to {}", target.kind.describe()),
                    span: stmt.span.into(),
                });
            };

            if let Some(value) = value {
                warnings.push(ExtractWarning::IgnoredDefault {
                    declaration: name.to_string(),
                    field: field.clone(),
                    span: value.span,
                });
            }

            fields.push(FieldDef::new(field, type_expr(annotation)?));
        }

        Ok(Declaration::new(name, fields))
    }

    fn dict_literal(
        &self,
        stmt: &Stmt,
        targets: &[Expr],
        value: &Expr,
        warnings: &mut Vec<ExtractWarning>,
    ) -> Result<Option<Declaration>, ExtractError> {
        let ExprKind::Call { func, args, .. } = &value.kind else {
            return Ok(None);
        };
        if !self.is_factory(func) {
            return Ok(None);
        }

        let (name, declared, entries) = match (targets, args.as_slice()) {
            (
                [
                    Expr {
                        kind: ExprKind::Name(name),
                        ..
                    },
                ],
                [declared, mapping, ..],
            ) => match (&declared.kind, &mapping.kind) {
                (ExprKind::Constant(Constant::Str(declared_name)), ExprKind::Dict(entries)) => {
                    (name, (declared_name, declared.span), entries)
                }
                _ => {
                    debug!(span = ?stmt.span, "skipping factory call without a name and a dict");
                    return Ok(None);
                }
            },
            _ => {
                debug!(span = ?stmt.span, "skipping factory call with unsupported shape");
                return Ok(None);
            }
        };

        if declared.0 != name {
            warnings.push(ExtractWarning::NameMismatch {
                assigned: name.clone(),
                declared: declared.0.clone(),
                span: declared.1,
            });
        }

        let mut fields = Vec::with_capacity(entries.len());
        for entry in entries {
            if let Some(field) = self.dict_field(name, entry, warnings)? {
                fields.push(field);
            }
        }

        Ok(Some(Declaration::new(name.as_str(), fields)))
    }

    fn dict_field(
        &self,
        declaration: &str,
        entry: &DictEntry,
        warnings: &mut Vec<ExtractWarning>,
    ) -> Result<Option<FieldDef>, ExtractError> {
        let Some(key) = &entry.key else {
            warnings.push(ExtractWarning::UnpackedMapping {
                declaration: declaration.to_string(),
                span: entry.value.span,
            });
            return Ok(None);
        };

        let (name, reason) = match &key.kind {
            ExprKind::Constant(Constant::Str(s)) | ExprKind::Name(s) => {
                (s.clone(), validate_identifier(s))
            }
            other => (
                format!("<{}>", other.describe()),
                Some("key must be a string or a name"),
            ),
        };

        if let Some(reason) = reason {
            warnings.push(ExtractWarning::InvalidFieldName {
                declaration: declaration.to_string(),
                key: name,
                reason,
                span: key.span,
            });
            return Ok(None);
        }

        Ok(Some(FieldDef::new(name, type_expr(&entry.value)?)))
    }
}

/// Extract with the default factory names.
pub fn extract(module: &Module) -> Result<Extraction, ExtractError> {
    Extractor::default().extract(module)
}
