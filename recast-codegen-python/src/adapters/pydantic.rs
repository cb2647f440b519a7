//! pydantic `BaseModel` emitter.

use recast_codegen::{
    emitter::{Emitter, EmitterKind, base_class_header},
    imports::ImportCollector,
    options::{OptionSchema, OptionSet},
};

const BASE: &str = "BaseModel";

#[derive(Debug, Clone, Copy, Default)]
pub struct PydanticEmitter;

impl Emitter for PydanticEmitter {
    fn name(&self) -> &'static str {
        "pydantic"
    }

    fn kind(&self) -> EmitterKind {
        EmitterKind::BaseClass { base: BASE }
    }

    fn schema(&self) -> OptionSchema {
        &[]
    }

    fn imports(&self, imports: &mut ImportCollector) {
        imports.add("pydantic", BASE);
    }

    fn build_header(&self, class_name: &str, _options: &OptionSet) -> Vec<String> {
        base_class_header(BASE, class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        assert_eq!(
            PydanticEmitter.build_header("Movie", &PydanticEmitter.options()),
            ["class Movie(BaseModel):"]
        );
        assert_eq!(
            PydanticEmitter.import_lines(),
            ["from pydantic import BaseModel"]
        );
    }
}
