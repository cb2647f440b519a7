//! Framework emitters.
//!
//! An [`Emitter`] renders one [`Declaration`] into one framework's syntax:
//! header line(s) built from an [`OptionSet`], then one line per field.

use std::fmt;

use miette::Diagnostic;
use recast_ir::{Declaration, FieldDef};
use thiserror::Error;
use tracing::trace;

use crate::{
    builder::{CodeBuilder, Indent},
    imports::ImportCollector,
    options::{OptionSchema, OptionSet},
};

/// How a framework marks a class as one of its record types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterKind {
    /// `@marker` or `@marker(options)` above a plain class
    Decorator { marker: &'static str },
    /// `class Name(base):`
    BaseClass { base: &'static str },
}

impl fmt::Display for EmitterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitterKind::Decorator { marker } => write!(f, "decorator @{}", marker),
            EmitterKind::BaseClass { base } => write!(f, "base class {}", base),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum EmitError {
    #[error("unsupported framework '{name}'")]
    #[diagnostic(code(recast::unsupported_framework), help("available frameworks: {available}"))]
    UnsupportedFramework { name: String, available: String },

    #[error("options for {found} cannot be used with {expected}")]
    #[diagnostic(code(recast::mismatched_options))]
    MismatchedOptions {
        expected: &'static str,
        found: &'static str,
    },
}

/// A backend that renders declarations for one target framework.
pub trait Emitter: Send + Sync {
    /// Identifier used to select this emitter (e.g., `dataclass`).
    fn name(&self) -> &'static str;

    fn kind(&self) -> EmitterKind;

    /// Options accepted by [`Emitter::build_header`], in rendering order.
    fn schema(&self) -> OptionSchema;

    /// Register the imports generated declarations need.
    fn imports(&self, imports: &mut ImportCollector);

    /// Header line(s) for a declaration named `class_name`.
    fn build_header(&self, class_name: &str, options: &OptionSet) -> Vec<String>;

    /// One indented field line.
    fn build_field_line(&self, field: &FieldDef) -> String {
        format!("{}{}: {}", Indent::PYTHON, field.name, field.type_expr)
    }

    /// A fresh option set with every option unset.
    fn options(&self) -> OptionSet {
        OptionSet::new(self.name(), self.schema())
    }

    /// Rendered import lines.
    fn import_lines(&self) -> Vec<String> {
        let mut imports = ImportCollector::new();
        self.imports(&mut imports);
        imports.render()
    }
}

/// `@marker` when no option is set, `@marker(k=v, ...)` otherwise, then the
/// class line.
pub fn decorator_header(marker: &str, class_name: &str, options: &OptionSet) -> Vec<String> {
    let decorator = if options.is_empty() {
        format!("@{}", marker)
    } else {
        format!("@{}({})", marker, options.render_kwargs())
    };
    vec![decorator, format!("class {}:", class_name)]
}

/// `class Name(base):`
pub fn base_class_header(base: &str, class_name: &str) -> Vec<String> {
    vec![format!("class {}({}):", class_name, base)]
}

/// Render one declaration: header, then one line per field.
///
/// A declaration without fields gets a `pass` body so the output stays valid
/// Python.
pub fn emit_declaration(
    emitter: &dyn Emitter,
    declaration: &Declaration,
    options: &OptionSet,
) -> Result<Vec<String>, EmitError> {
    if options.framework() != emitter.name() {
        return Err(EmitError::MismatchedOptions {
            expected: emitter.name(),
            found: options.framework(),
        });
    }

    trace!(
        declaration = %declaration.name,
        framework = emitter.name(),
        fields = declaration.fields.len(),
        "emitting declaration"
    );

    let mut builder = CodeBuilder::python();
    builder.push_lines(emitter.build_header(&declaration.name, options));
    if declaration.is_empty() {
        builder.push_indent().push_line("pass");
    }

    let mut lines = builder.into_lines();
    lines.extend(
        declaration
            .fields
            .iter()
            .map(|field| emitter.build_field_line(field)),
    );
    Ok(lines)
}

/// Render several declarations, separated by one blank line.
pub fn emit_all(
    emitter: &dyn Emitter,
    declarations: &[Declaration],
    options: &OptionSet,
) -> Result<Vec<String>, EmitError> {
    let mut lines = Vec::new();
    for (i, declaration) in declarations.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(emit_declaration(emitter, declaration, options)?);
    }
    Ok(lines)
}
