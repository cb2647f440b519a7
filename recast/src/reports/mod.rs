//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`](output::Output)
//! target.

mod check;
mod frameworks;
mod inspect;
mod output;

pub use check::CheckReport;
pub use frameworks::FrameworksReport;
pub use inspect::InspectReport;
pub use output::{Report, TerminalOutput};
