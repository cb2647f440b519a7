//! Shared extraction and code generation for recast.
//!
//! This crate turns a Python syntax tree into framework-independent
//! declarations and provides the building blocks framework emitters use
//! (e.g., `recast-codegen-python`).
//!
//! # Module Organization
//!
//! - [`builder`] - Line-oriented code building (CodeBuilder, Indent)
//! - [`imports`] - Python import collection
//! - [`options`] - Closed option schemas and option sets
//! - [`emitter`] - The `Emitter` trait and declaration emission
//! - [`extract`] - Declaration extraction from the syntax tree
//! - [`pipeline`] - Phases, lints, and plugins around extraction

pub mod builder;
pub mod emitter;
pub mod extract;
pub mod imports;
pub mod options;
pub mod pipeline;
