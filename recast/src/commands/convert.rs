use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use recast_codegen::{emitter::Emitter, options::OptionSet};
use recast_codegen_python::{Generator, TranslateOptions, registry};
use recast_config::{Config, Framework};
use recast_core::{File, Overwrite, PyValue, WriteResult};
use tracing::info;

use super::ConfigArgs;
use crate::input::{SourceFile, exit_with_report};

#[derive(Args)]
pub struct ConvertCommand {
    /// Python file containing TypedDict declarations
    pub input: PathBuf,

    /// Target framework (overrides recast.toml)
    #[arg(short, long)]
    pub to: Option<Framework>,

    /// Header option as name=value (repeatable, overrides recast.toml)
    #[arg(short = 'O', long = "option", value_name = "NAME=VALUE", value_parser = parse_option)]
    pub options: Vec<(String, PyValue)>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(short, long, requires = "output")]
    pub force: bool,

    /// Leave out the framework import lines
    #[arg(long)]
    pub no_imports: bool,
}

impl ConvertCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config.load()?;
        let framework = self.to.unwrap_or(config.convert.to);
        let emitter = registry::for_framework(framework);
        let options = self.option_set(&config, framework, emitter);

        let source = SourceFile::read(&self.input)?;
        let module = source.parse();

        let generator = Generator::new()
            .pipeline(super::pipeline(&config))
            .translate_options(TranslateOptions {
                include_imports: config.convert.imports && !self.no_imports,
            });
        let translation = generator
            .translate(module, emitter.name(), &options)
            .map_err(|report| source.exit_on_input_error(report))?;

        for diag in &translation.diagnostics {
            if diag.severity.is_warning() {
                eprintln!("{}", diag);
            }
        }

        let content = translation.render();
        match &self.output {
            None => print!("{}", content),
            Some(path) => {
                let overwrite = if self.force {
                    Overwrite::Always
                } else {
                    Overwrite::IfMissing
                };
                match File::new(path, content).overwrite(overwrite).write()? {
                    WriteResult::Written => {
                        info!(path = %path.display(), "wrote output");
                        eprintln!("Wrote {}", path.display());
                    }
                    WriteResult::Skipped => {
                        bail!("{} already exists (use --force to overwrite)", path.display())
                    }
                }
            }
        }

        Ok(())
    }

    /// Config file options first, then `-O` flags.
    fn option_set(&self, config: &Config, framework: Framework, emitter: &dyn Emitter) -> OptionSet {
        let mut options = emitter.options();
        let expected = options.names();

        for entry in config.options(framework) {
            if options.set(&entry.name, entry.value.clone()).is_err() {
                let err = config.unknown_option_error(entry, framework, &expected);
                exit_with_report(miette::Report::new(*err));
            }
        }

        for (name, value) in &self.options {
            if let Err(err) = options.set(name, value.clone()) {
                exit_with_report(miette::Report::new(err));
            }
        }

        options
    }
}

/// Parse `name=value` for `-O`.
fn parse_option(s: &str) -> Result<(String, PyValue), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("option name cannot be empty".to_string());
    }
    Ok((name.to_string(), value.parse()?))
}
