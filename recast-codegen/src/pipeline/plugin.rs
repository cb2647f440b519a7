//! Pipeline plugin trait.

use std::{
    collections::HashMap,
    sync::Mutex,
    time::{Duration, Instant},
};

use eyre::Result;
use tracing::debug;

use super::TranslationContext;

/// A plugin that hooks into the pipeline.
///
/// Plugins receive callbacks before and after each phase and may inspect or
/// modify the context. Returning an error aborts the pipeline.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut TranslationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut TranslationContext) -> Result<()> {
        Ok(())
    }
}

/// Records how long each phase takes and logs it at debug level.
#[derive(Debug, Default)]
pub struct TimingPlugin {
    started: Mutex<HashMap<String, Instant>>,
    elapsed: Mutex<Vec<(String, Duration)>>,
}

impl TimingPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase durations in completion order
    pub fn timings(&self) -> Vec<(String, Duration)> {
        self.elapsed
            .lock()
            .map(|elapsed| elapsed.clone())
            .unwrap_or_default()
    }
}

impl Plugin for TimingPlugin {
    fn name(&self) -> &'static str {
        "timing"
    }

    fn on_before_phase(&self, phase: &str, _ctx: &mut TranslationContext) -> Result<()> {
        if let Ok(mut started) = self.started.lock() {
            started.insert(phase.to_string(), Instant::now());
        }
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, _ctx: &mut TranslationContext) -> Result<()> {
        let start = self
            .started
            .lock()
            .ok()
            .and_then(|mut started| started.remove(phase));

        if let Some(start) = start {
            let took = start.elapsed();
            debug!(phase, ?took, "phase finished");
            if let Ok(mut elapsed) = self.elapsed.lock() {
                elapsed.push((phase.to_string(), took));
            }
        }
        Ok(())
    }
}
