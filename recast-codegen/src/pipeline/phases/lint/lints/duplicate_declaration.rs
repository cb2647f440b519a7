//! Lint for declarations that share a name.

use std::collections::HashMap;

use super::super::Lint;
use crate::{extract::ExtractedDeclaration, pipeline::Diagnostic};

/// Warns when a name is declared more than once; the later class shadows
/// the earlier one in the generated module.
pub struct DuplicateDeclarationLint;

impl Lint for DuplicateDeclarationLint {
    fn name(&self) -> &'static str {
        "duplicate-declaration"
    }

    fn description(&self) -> &'static str {
        "Detect declarations that share a name"
    }

    fn check(&self, declarations: &[ExtractedDeclaration], diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (index, extracted) in declarations.iter().enumerate() {
            let name = extracted.declaration.name.as_str();
            if let Some(first) = seen.get(name) {
                diagnostics.push(
                    Diagnostic::warning(
                        "lint",
                        format!(
                            "duplicate declaration '{}' (first declared as declaration #{})",
                            name,
                            first + 1
                        ),
                    )
                    .at(name)
                    .with_span(extracted.span),
                );
            } else {
                seen.insert(name, index);
            }
        }
    }
}
