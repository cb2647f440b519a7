//! Extract phase - finds declarations in the syntax tree.

use eyre::Result;

use crate::{
    extract::Extractor,
    pipeline::{Diagnostic, Phase, TranslationContext},
};

/// Phase that runs the [`Extractor`] and records its warnings.
#[derive(Debug, Clone, Default)]
pub struct ExtractPhase {
    extractor: Extractor,
}

impl ExtractPhase {
    pub fn new(extractor: Extractor) -> Self {
        Self { extractor }
    }
}

impl Phase for ExtractPhase {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn description(&self) -> &'static str {
        "Find TypedDict declarations in the syntax tree"
    }

    fn run(&self, ctx: &mut TranslationContext) -> Result<()> {
        let extraction = self.extractor.extract(&ctx.module)?;

        for warning in &extraction.warnings {
            ctx.add_diagnostic(
                Diagnostic::warning(self.name(), warning.to_string())
                    .at(warning.location())
                    .with_span(warning.span()),
            );
        }
        ctx.declarations = extraction.declarations;

        Ok(())
    }
}
