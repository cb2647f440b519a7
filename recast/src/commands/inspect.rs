use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::{ConfigArgs, pipeline};
use crate::{
    input::SourceFile,
    reports::{InspectReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct InspectCommand {
    /// Python file containing TypedDict declarations
    pub input: PathBuf,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config.load()?;
        let source = SourceFile::read(&self.input)?;
        let module = source.parse();

        let ctx = pipeline(&config)
            .run(module)
            .map_err(|report| source.exit_on_input_error(report))?;
        let report = InspectReport::new(&source, ctx);

        if self.json {
            let json =
                serde_json::to_string_pretty(&report).wrap_err("Failed to serialize declarations")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
