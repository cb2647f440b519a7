//! Translation pipeline.
//!
//! A [`Pipeline`] runs phases over a [`TranslationContext`]:
//!
//! - `extract` finds declarations and turns extraction warnings into diagnostics
//! - `lint` checks the extracted declarations
//!
//! Plugins are called before and after each phase. Non-fatal issues are
//! collected as [`Diagnostic`]s on the context and returned to the caller.
//!
//! # Example
//!
//! ```ignore
//! use recast_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(module)?;
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::TranslationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::{Plugin, TimingPlugin};
pub use runner::Pipeline;
