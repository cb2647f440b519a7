//! Lint for declarations without fields.

use super::super::Lint;
use crate::{extract::ExtractedDeclaration, pipeline::Diagnostic};

/// Notes declarations with no fields; they are emitted with a `pass` body.
pub struct EmptyDeclarationLint;

impl Lint for EmptyDeclarationLint {
    fn name(&self) -> &'static str {
        "empty-declaration"
    }

    fn description(&self) -> &'static str {
        "Note declarations that have no fields"
    }

    fn check(&self, declarations: &[ExtractedDeclaration], diagnostics: &mut Vec<Diagnostic>) {
        for extracted in declarations.iter().filter(|d| d.declaration.is_empty()) {
            diagnostics.push(
                Diagnostic::info(
                    "lint",
                    format!(
                        "'{}' has no fields; it will be generated with a `pass` body",
                        extracted.declaration.name
                    ),
                )
                .at(&extracted.declaration.name)
                .with_span(extracted.span),
            );
        }
    }
}
