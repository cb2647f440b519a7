//! Frameworks command report.

use recast_codegen::emitter::Emitter;
use recast_codegen_python::registry;

use super::output::{Output, Report};

/// Every registered framework with its header style and options.
pub struct FrameworksReport {
    emitters: &'static [&'static dyn Emitter],
}

impl FrameworksReport {
    pub fn new() -> Self {
        Self {
            emitters: registry::frameworks(),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.emitters.iter().map(|emitter| emitter.name())
    }
}

impl Report for FrameworksReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, emitter) in self.emitters.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(emitter.name());
            out.key_value_indented("style", &emitter.kind().to_string());
            out.key_value_indented("imports", &emitter.import_lines().join("; "));

            let schema = emitter.schema();
            if schema.is_empty() {
                out.key_value_indented("options", "none");
                continue;
            }
            out.key_value_indented("options", &schema.len().to_string());
            for option in schema {
                out.list_item(&format!("{}: {}", option.name, option.help));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_names() {
        let names: Vec<_> = FrameworksReport::new().names().collect();
        assert_eq!(names, ["dataclass", "attrs", "msgspec", "pydantic"]);
    }

    #[test]
    fn test_base_class_frameworks() {
        let rendered = BufferOutput::render(&FrameworksReport::new());
        let tail = rendered
            .split("\n\n")
            .skip(2)
            .collect::<Vec<_>>()
            .join("\n\n");

        insta::assert_snapshot!(tail, @r"
        msgspec:
          style: base class msgspec.Struct
          imports: import msgspec
          options: none

        pydantic:
          style: base class BaseModel
          imports: from pydantic import BaseModel
          options: none
        ");
    }
}
