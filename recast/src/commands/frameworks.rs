use clap::Args;
use eyre::Result;

use crate::reports::{FrameworksReport, Report, TerminalOutput};

#[derive(Args)]
pub struct FrameworksCommand {
    /// Only print framework names
    #[arg(short, long)]
    pub quiet: bool,
}

impl FrameworksCommand {
    pub fn run(&self) -> Result<()> {
        let report = FrameworksReport::new();
        if self.quiet {
            for name in report.names() {
                println!("{}", name);
            }
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
