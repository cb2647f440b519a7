//! Inspect command report.

use recast_codegen::pipeline::{Diagnostic, TranslationContext};
use recast_ir::{Declaration, SourceSyntaxKind};
use serde::Serialize;

use super::output::{Output, Report};
use crate::input::SourceFile;

#[derive(Debug, Serialize)]
pub struct InspectedDeclaration {
    #[serde(flatten)]
    pub declaration: Declaration,
    pub kind: SourceSyntaxKind,
    pub line: usize,
}

/// The declarations of one file as the generator sees them.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub input: String,
    pub declarations: Vec<InspectedDeclaration>,
    pub diagnostics: Vec<Diagnostic>,
}

impl InspectReport {
    pub fn new(source: &SourceFile, ctx: TranslationContext) -> Self {
        let declarations = ctx
            .declarations
            .into_iter()
            .map(|extracted| InspectedDeclaration {
                line: source.line_of(extracted.span),
                kind: extracted.kind,
                declaration: extracted.declaration,
            })
            .collect();

        Self {
            input: source.path().display().to_string(),
            declarations,
            diagnostics: ctx.diagnostics,
        }
    }
}

impl Report for InspectReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, inspected) in self.declarations.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!(
                "{} ({}, line {})",
                inspected.declaration.name,
                inspected.kind.as_str(),
                inspected.line
            ));
            for field in &inspected.declaration.fields {
                out.key_value_indented(&field.name, &field.type_expr.to_string());
            }
        }

        for diag in self.diagnostics.iter().filter(|d| d.severity.is_warning()) {
            out.warning(&diag.to_string());
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

    fn inspect(source: &str) -> InspectReport {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("models.py");
        fs::write(&path, source).unwrap();

        let source = SourceFile::read(&path).unwrap();
        let ctx = Pipeline::new().run(source.parse()).unwrap();
        let mut report = InspectReport::new(&source, ctx);
        report.input = "models.py".to_string();
        report
    }

    const SOURCE: &str = "\
class Movie(TypedDict):
    title: str
    tags: list[str] | None

Rating = TypedDict('Rating', {'score': float, '2x': int})
";

    #[test]
    fn test_text() {
        insta::assert_snapshot!(BufferOutput::render(&inspect(SOURCE)), @r"
        Movie (inline block, line 1):
          title: str
          tags: list[str] | None

        Rating (dict literal, line 5):
          score: float
        warning: skipping field '2x' of 'Rating': name must start with a letter or underscore (at Rating.2x)
        ");
    }

    #[test]
    fn test_json() {
        let json = serde_json::to_string_pretty(&inspect(SOURCE)).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "input": "models.py",
          "declarations": [
            {
              "name": "Movie",
              "fields": [
                {
                  "name": "title",
                  "type": "str"
                },
                {
                  "name": "tags",
                  "type": "list[str] | None"
                }
              ],
              "kind": "inline_block",
              "line": 1
            },
            {
              "name": "Rating",
              "fields": [
                {
                  "name": "score",
                  "type": "float"
                }
              ],
              "kind": "dict_literal",
              "line": 5
            }
          ],
          "diagnostics": [
            {
              "severity": "warning",
              "phase": "extract",
              "message": "skipping field '2x' of 'Rating': name must start with a letter or underscore",
              "location": "Rating.2x"
            }
          ]
        }
        "#);
    }
}
