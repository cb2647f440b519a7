use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ConfigArgs, pipeline};
use crate::{
    input::SourceFile,
    reports::{CheckReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Python file containing TypedDict declarations
    pub input: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config.load()?;
        let source = SourceFile::read(&self.input)?;
        let module = source.parse();

        let ctx = pipeline(&config)
            .run(module)
            .map_err(|report| source.exit_on_input_error(report))?;

        let report = CheckReport::new(&source, &ctx);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
