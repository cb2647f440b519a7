mod check;
mod completions;
mod convert;
mod frameworks;
mod inspect;

use std::{env, path::PathBuf};

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use convert::ConvertCommand;
use eyre::{Context, Result};
use frameworks::FrameworksCommand;
use inspect::InspectCommand;
use recast_codegen::{extract::Extractor, pipeline::Pipeline};
use recast_config::Config;

use crate::input::exit_with_report;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for recast_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with_report(miette::Report::new(*e)),
        }
    }
}

#[derive(Parser)]
#[command(name = "recast")]
#[command(version)]
#[command(about = "Convert TypedDict declarations into dataclass, attrs, msgspec or pydantic classes")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Convert(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Frameworks(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert TypedDict declarations to the target framework
    Convert(ConvertCommand),

    /// Extract and lint declarations without generating code
    Check(CheckCommand),

    /// Show the declarations found in a file
    Inspect(InspectCommand),

    /// List supported frameworks and their options
    Frameworks(FrameworksCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Arguments shared by commands that read a config file
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to recast.toml (defaults to ./recast.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<Config> {
        let cwd = env::current_dir().wrap_err("Failed to read the current directory")?;
        Ok(Config::load(self.config.as_deref(), &cwd).unwrap_or_exit())
    }
}

/// Pipeline that recognizes the factories named in the config
pub(crate) fn pipeline(config: &Config) -> Pipeline {
    Pipeline::new().extractor(Extractor::with_factories(config.factories.iter().cloned()))
}
