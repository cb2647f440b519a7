//! Standard library `dataclasses` emitter.

use recast_codegen::{
    emitter::{Emitter, EmitterKind, decorator_header},
    imports::ImportCollector,
    options::{OptionSchema, OptionSet, OptionSpec},
};

const MARKER: &str = "dataclass";

/// Options of `dataclasses.dataclass`, in signature order.
const SCHEMA: OptionSchema = &[
    OptionSpec::new("init", "generate __init__"),
    OptionSpec::new("repr", "generate __repr__"),
    OptionSpec::new("eq", "generate __eq__"),
    OptionSpec::new("order", "generate ordering methods"),
    OptionSpec::new("unsafe_hash", "force a __hash__ method"),
    OptionSpec::new("frozen", "make instances immutable"),
    OptionSpec::new("match_args", "generate __match_args__"),
    OptionSpec::new("kw_only", "make every field keyword-only"),
    OptionSpec::new("slots", "generate __slots__"),
    OptionSpec::new("weakref_slot", "add a __weakref__ slot"),
];

/// `@dataclass` emitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataclassEmitter;

impl Emitter for DataclassEmitter {
    fn name(&self) -> &'static str {
        "dataclass"
    }

    fn kind(&self) -> EmitterKind {
        EmitterKind::Decorator { marker: MARKER }
    }

    fn schema(&self) -> OptionSchema {
        SCHEMA
    }

    fn imports(&self, imports: &mut ImportCollector) {
        imports.add("dataclasses", MARKER);
    }

    fn build_header(&self, class_name: &str, options: &OptionSet) -> Vec<String> {
        decorator_header(MARKER, class_name, options)
    }
}
