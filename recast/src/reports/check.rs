//! Check command report.

use recast_codegen::pipeline::{Diagnostic, Severity, TranslationContext};
use recast_ir::SourceSyntaxKind;

use super::output::{Output, Report};
use crate::input::SourceFile;

/// One extracted declaration, summarized
#[derive(Debug)]
pub struct DeclarationSummary {
    pub name: String,
    pub kind: SourceSyntaxKind,
    pub line: usize,
    pub fields: usize,
}

/// Diagnostics and declarations found in one input file.
#[derive(Debug)]
pub struct CheckReport {
    pub input: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    pub declarations: Vec<DeclarationSummary>,
}

impl CheckReport {
    pub fn new(source: &SourceFile, ctx: &TranslationContext) -> Self {
        let input = source.path().display().to_string();

        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut infos = Vec::new();
        for diag in &ctx.diagnostics {
            let msg = format_diagnostic(&input, source, diag);
            match diag.severity {
                Severity::Error => errors.push(msg),
                Severity::Warning => warnings.push(msg),
                Severity::Info => infos.push(msg),
            }
        }

        let declarations = ctx
            .declarations
            .iter()
            .map(|extracted| DeclarationSummary {
                name: extracted.declaration.name.clone(),
                kind: extracted.kind,
                line: source.line_of(extracted.span),
                fields: extracted.declaration.fields.len(),
            })
            .collect();

        Self {
            input,
            errors,
            warnings,
            infos,
            declarations,
        }
    }

    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn format_diagnostic(input: &str, source: &SourceFile, diag: &Diagnostic) -> String {
    let mut msg = diag.message.clone();
    if let Some(span) = diag.span {
        msg.push_str(&format!("\n  --> {}:{}", input, source.line_of(span)));
    }
    if let Some(loc) = &diag.location {
        msg.push_str(&format!(" ({})", loc));
    }
    msg
}

fn plural(count: usize, word: &str) -> String {
    format!("{} {}{}", count, word, if count == 1 { "" } else { "s" })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }
        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!(
            "✓ {}: {}",
            self.input,
            plural(self.declarations.len(), "declaration")
        ));
        for decl in &self.declarations {
            out.list_item(&format!(
                "{} ({}, line {}): {}",
                decl.name,
                decl.kind.as_str(),
                decl.line,
                plural(decl.fields, "field")
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use recast_codegen::pipeline::Pipeline;
    use tempfile::TempDir;

    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_check_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("models.py");
        fs::write(
            &path,
            "\
class Movie(TypedDict):
    title: str
    year: int = 1999

Empty = TypedDict('Empty', {})
",
        )
        .unwrap();

        let source = SourceFile::read(&path).unwrap();
        let ctx = Pipeline::new().run(source.parse()).unwrap();
        let report = CheckReport::new(&source, &ctx);
        assert!(report.is_valid());

        let rendered = BufferOutput::render(&report).replace(&report.input, "models.py");
        insta::assert_snapshot!(rendered, @r"
        warning: ignoring default value of 'Movie.year'; defaults are not carried over
          --> models.py:3 (Movie.year)
        info: 'Empty' has no fields; it will be generated with a `pass` body
          --> models.py:5 (Empty)

        ✓ models.py: 2 declarations
          - Movie (inline block, line 1): 2 fields
          - Empty (dict literal, line 5): 0 fields
        ");
    }
}
