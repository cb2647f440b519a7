//! Configuration for recast.
//!
//! Settings come from an optional `recast.toml`:
//!
//! ```toml
//! [convert]
//! to = "attrs"
//! imports = true
//!
//! [extract]
//! factories = ["TypedDict"]
//!
//! [options.attrs]
//! frozen = true
//! on_setattr = { expr = "attrs.setters.frozen" }
//! ```
//!
//! Every value has a default, so a missing file is the same as an empty one.

mod config;
mod error;
mod framework;

pub use config::{CONFIG_FILE, Config, ConvertSettings, DEFAULT_FACTORIES, OptionEntry};
pub use error::{Error, Result, SourceContext};
pub use framework::Framework;
