//! Reading the Python input and reporting errors that point into it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use miette::{Diagnostic, NamedSource};
use recast_codegen::extract::ExtractError;
use recast_codegen_python::EmitError;
use recast_syntax::{Module, Span, read_python};

/// Print a miette report and exit with status 1.
pub(crate) fn exit_with_report(report: miette::Report) -> ! {
    eprintln!("{:?}", report);
    std::process::exit(1);
}

/// A Python source file given on the command line
pub(crate) struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.path.display().to_string(), self.content.clone())
    }

    /// Parse the file, exiting with a labelled report on syntax errors.
    pub fn parse(&self) -> Module {
        match read_python(&self.content) {
            Ok(module) => module,
            Err(err) => self.exit_with(err),
        }
    }

    /// Print `err` with this file attached as source and exit with status 1.
    pub fn exit_with(&self, err: impl Diagnostic + Send + Sync + 'static) -> ! {
        exit_with_report(miette::Report::new(err).with_source_code(self.named_source()))
    }

    /// Exit on errors that belong to the input; return anything else.
    pub fn exit_on_input_error(&self, report: eyre::Report) -> eyre::Report {
        let report = match report.downcast::<ExtractError>() {
            Ok(err) => self.exit_with(err),
            Err(report) => report,
        };
        match report.downcast::<EmitError>() {
            Ok(err) => exit_with_report(miette::Report::new(err)),
            Err(report) => report,
        }
    }

    /// 1-based line number of the start of `span`
    pub fn line_of(&self, span: Span) -> usize {
        let end = span.start.min(self.content.len());
        self.content.as_bytes()[..end]
            .iter()
            .filter(|&&b| b == b'\n')
            .count()
            + 1
    }
}
