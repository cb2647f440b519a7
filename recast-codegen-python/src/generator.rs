use eyre::Result;
use recast_codegen::{
    builder::CodeBuilder,
    emitter::{EmitError, emit_all},
    extract::Extractor,
    options::OptionSet,
    pipeline::{Diagnostic, Pipeline, TimingPlugin},
};
use recast_ir::Declaration;
use recast_syntax::Module;
use tracing::debug;

use crate::registry;

/// Settings that shape the generated module but not its declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Prepend the framework's import lines.
    pub include_imports: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            include_imports: true,
        }
    }
}

/// Output of one translation run
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    /// Import lines, empty when imports are disabled.
    pub imports: Vec<String>,
    /// Declaration lines with one blank line between declarations.
    pub lines: Vec<String>,
    /// Warnings and notes from extraction and linting.
    pub diagnostics: Vec<Diagnostic>,
}

impl Translation {
    /// Join imports and declarations into a module body ending in a newline.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::python();
        builder.push_lines(&self.imports);
        if !self.imports.is_empty() && !self.lines.is_empty() {
            builder.push_blank();
        }
        builder.push_lines(&self.lines);
        builder.build()
    }
}

/// Translates TypedDict declarations into one target framework.
pub struct Generator {
    pipeline: Pipeline,
    options: TranslateOptions,
}

impl Generator {
    pub fn new() -> Self {
        Self {
            pipeline: Pipeline::new().plugin(TimingPlugin::new()),
            options: TranslateOptions::default(),
        }
    }

    /// Recognize these factory and base class names instead of `TypedDict`.
    pub fn factories(mut self, factories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.pipeline = self
            .pipeline
            .extractor(Extractor::with_factories(factories));
        self
    }

    pub fn translate_options(mut self, options: TranslateOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a custom pipeline (extra phases or plugins).
    pub fn pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Translate every declaration in `module` for `framework`.
    ///
    /// The framework is resolved first, so an unknown name fails before the
    /// tree is looked at. Fatal errors keep their type inside the report
    /// (`EmitError`, `ExtractError`) for callers that render them.
    pub fn translate(
        &self,
        module: Module,
        framework: &str,
        options: &OptionSet,
    ) -> Result<Translation> {
        let emitter = registry::emitter(framework)?;
        if options.framework() != emitter.name() {
            return Err(EmitError::MismatchedOptions {
                expected: emitter.name(),
                found: options.framework(),
            }
            .into());
        }

        let ctx = self.pipeline.run(module)?;
        let declarations: Vec<Declaration> = ctx
            .declarations
            .into_iter()
            .map(|extracted| extracted.declaration)
            .collect();

        debug!(
            framework = emitter.name(),
            declarations = declarations.len(),
            "translating"
        );

        let lines = emit_all(emitter, &declarations, options)?;
        let imports = if self.options.include_imports {
            emitter.import_lines()
        } else {
            Vec::new()
        };

        Ok(Translation {
            imports,
            lines,
            diagnostics: ctx.diagnostics,
        })
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use recast_codegen::emitter::Emitter;
    use recast_syntax::read_python;

    use super::*;
    use crate::adapters::{AttrsEmitter, DataclassEmitter};

    #[test]
    fn test_render_without_declarations() {
        let translation = Translation {
            imports: vec!["import msgspec".to_string()],
            lines: Vec::new(),
            diagnostics: Vec::new(),
        };
        assert_eq!(translation.render(), "import msgspec\n");
    }

    #[test]
    fn test_mismatched_options_fail_before_extraction() {
        let module = read_python("class A(TypedDict):\n    x: int\n").unwrap();
        let err = Generator::new()
            .translate(module, "dataclass", &AttrsEmitter.options())
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<EmitError>(),
            Some(EmitError::MismatchedOptions { .. })
        ));
    }

    #[test]
    fn test_without_imports() {
        let module = read_python("class A(TypedDict):\n    x: int\n").unwrap();
        let translation = Generator::new()
            .translate_options(TranslateOptions {
                include_imports: false,
            })
            .translate(module, "dataclass", &DataclassEmitter.options())
            .unwrap();

        assert!(translation.imports.is_empty());
        assert_eq!(translation.render(), "@dataclass\nclass A:\n    x: int\n");
    }
}
