//! Python framework emitters for recast.
//!
//! Turns extracted TypedDict declarations into `dataclass`, `attrs`,
//! `msgspec` or `pydantic` classes.
//!
//! ```ignore
//! use recast_codegen_python::{Generator, registry};
//!
//! let module = recast_syntax::read_python(source)?;
//! let options = registry::emitter("attrs")?.options().with("frozen", PyValue::Bool(true))?;
//! let translation = Generator::new().translate(module, "attrs", &options)?;
//! print!("{}", translation.render());
//! ```

pub mod adapters;
mod generator;
pub mod registry;

pub use generator::{Generator, TranslateOptions, Translation};
pub use recast_codegen::emitter::{EmitError, Emitter, EmitterKind, emit_all, emit_declaration};
