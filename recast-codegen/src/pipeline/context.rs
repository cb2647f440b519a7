//! Context passed through pipeline phases.

use recast_syntax::Module;

use super::diagnostic::{Diagnostic, Severity};
use crate::extract::ExtractedDeclaration;

/// State of one translation run.
#[derive(Debug)]
pub struct TranslationContext {
    /// The syntax tree being translated.
    pub module: Module,
    /// Declarations found by the extract phase, in source order.
    pub declarations: Vec<ExtractedDeclaration>,
    pub diagnostics: Vec<Diagnostic>,
}

impl TranslationContext {
    pub fn new(module: Module) -> Self {
        Self {
            module,
            declarations: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = TranslationContext::new(Module::default());
        assert!(ctx.declarations.is_empty());

        ctx.add_diagnostic(Diagnostic::error("test", "test error"));
        ctx.add_diagnostic(Diagnostic::warning("test", "test warning"));
        ctx.add_diagnostic(Diagnostic::info("test", "just info"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }
}
