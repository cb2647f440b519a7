//! Pipeline orchestrator.

use eyre::Result;
use recast_syntax::Module;
use tracing::info_span;

use super::{
    Phase, Plugin, TranslationContext,
    phases::{ExtractPhase, LintPhase},
};
use crate::extract::Extractor;

/// Runs the built-in phases (extract, lint) followed by any user phases,
/// calling plugin hooks before and after each one.
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(TimingPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(module)?;
/// ```
pub struct Pipeline {
    extractor: Extractor,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            extractor: Extractor::default(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Use a custom extractor for the extract phase.
    pub fn extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a syntax tree.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. Extraction errors keep
    /// their type and can be recovered with `downcast_ref::<ExtractError>()`.
    pub fn run(&self, module: Module) -> Result<TranslationContext> {
        let mut ctx = TranslationContext::new(module);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ExtractPhase::new(self.extractor.clone())),
            Box::new(LintPhase::new()),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut TranslationContext) -> Result<()> {
        let phase_name = phase.name();
        let _span = info_span!("phase", name = phase_name).entered();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use recast_syntax::read_python;

    use super::*;
    use crate::{extract::ExtractError, pipeline::TimingPlugin};

    /// Records `before:<phase>` and `after:<phase>` events
    #[derive(Default)]
    struct RecordingPlugin {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl Plugin for RecordingPlugin {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn on_before_phase(&self, phase: &str, _ctx: &mut TranslationContext) -> Result<()> {
            self.events.lock().unwrap().push(format!("before:{}", phase));
            Ok(())
        }

        fn on_after_phase(&self, phase: &str, ctx: &mut TranslationContext) -> Result<()> {
            self.events
                .lock()
                .unwrap()
                .push(format!("after:{} ({})", phase, ctx.declarations.len()));
            Ok(())
        }
    }

    struct RenamePhase;

    impl Phase for RenamePhase {
        fn name(&self) -> &'static str {
            "rename"
        }

        fn description(&self) -> &'static str {
            "Prefix every declaration name"
        }

        fn run(&self, ctx: &mut TranslationContext) -> Result<()> {
            for extracted in &mut ctx.declarations {
                extracted.declaration.name = format!("Gen{}", extracted.declaration.name);
            }
            Ok(())
        }
    }

    #[test]
    fn test_pipeline_extracts_declarations() {
        let module = read_python("class A(TypedDict):\n    x: int = 1\n").unwrap();
        let ctx = Pipeline::new().run(module).unwrap();

        assert_eq!(ctx.declarations.len(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let plugin = RecordingPlugin::default();
        let events = plugin.events.clone();

        let module = read_python("A = TypedDict('A', {'x': int})\n").unwrap();
        Pipeline::new()
            .plugin(plugin)
            .phase(RenamePhase)
            .run(module)
            .unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            [
                "before:extract",
                "after:extract (1)",
                "before:lint",
                "after:lint (1)",
                "before:rename",
                "after:rename (1)",
            ]
        );
    }

    #[test]
    fn test_failed_phase_skips_after_hooks() {
        let plugin = RecordingPlugin::default();
        let events = plugin.events.clone();

        let module = read_python("class A(TypedDict):\n    x = 1\n").unwrap();
        assert!(Pipeline::new().plugin(plugin).run(module).is_err());
        assert_eq!(*events.lock().unwrap(), ["before:extract"]);
    }

    #[test]
    fn test_user_phase_runs_after_builtins() {
        let module = read_python("B = TypedDict('B', {'y': str})\n").unwrap();
        let ctx = Pipeline::new().phase(RenamePhase).run(module).unwrap();
        assert_eq!(ctx.declarations[0].declaration.name, "GenB");
    }

    #[test]
    fn test_extract_error_is_recoverable() {
        let module = read_python("class A(TypedDict):\n    def f(self): pass\n").unwrap();
        let err = Pipeline::new().run(module).unwrap_err();

        let extract_err = err.downcast_ref::<ExtractError>().unwrap();
        assert!(matches!(
            extract_err,
            ExtractError::UnsupportedBodyElement { element, .. } if element == "function definition"
        ));
    }

    #[test]
    fn test_custom_extractor() {
        let module = read_python("class A(Schema):\n    x: int\n").unwrap();
        let ctx = Pipeline::new()
            .extractor(Extractor::with_factories(["Schema"]))
            .run(module)
            .unwrap();
        assert_eq!(ctx.declarations.len(), 1);
    }

    #[test]
    fn test_timing_plugin_records_phases() {
        // Plugins are boxed by the pipeline, so share one through a reference type
        struct Shared(Arc<TimingPlugin>);
        impl Plugin for Shared {
            fn name(&self) -> &'static str {
                self.0.name()
            }
            fn on_before_phase(&self, phase: &str, ctx: &mut TranslationContext) -> Result<()> {
                self.0.on_before_phase(phase, ctx)
            }
            fn on_after_phase(&self, phase: &str, ctx: &mut TranslationContext) -> Result<()> {
                self.0.on_after_phase(phase, ctx)
            }
        }

        let timing = Arc::new(TimingPlugin::new());
        Pipeline::new()
            .plugin(Shared(timing.clone()))
            .run(Module::default())
            .unwrap();

        let phases: Vec<String> = timing.timings().into_iter().map(|(name, _)| name).collect();
        assert_eq!(phases, ["extract", "lint"]);
    }
}
