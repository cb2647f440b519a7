//! Lint phase - checks extracted declarations.

mod traits;
pub mod lints;

use eyre::{Result, bail};
pub use traits::{Lint, LintInfo};
pub use lints::{DuplicateDeclarationLint, EmptyDeclarationLint};

use crate::pipeline::{Phase, TranslationContext};

/// Phase that runs a configurable set of lints.
pub struct LintPhase {
    lints: Vec<Box<dyn Lint>>,
}

impl LintPhase {
    /// Create a lint phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateDeclarationLint),
                Box::new(EmptyDeclarationLint),
            ],
        }
    }

    /// Create a lint phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for LintPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for LintPhase {
    fn name(&self) -> &'static str {
        "lint"
    }

    fn description(&self) -> &'static str {
        "Check extracted declarations and collect diagnostics"
    }

    fn run(&self, ctx: &mut TranslationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.declarations, &mut ctx.diagnostics);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            bail!("lint failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
