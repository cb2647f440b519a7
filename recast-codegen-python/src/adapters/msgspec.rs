//! `msgspec.Struct` emitter.

use recast_codegen::{
    emitter::{Emitter, EmitterKind, base_class_header},
    imports::ImportCollector,
    options::{OptionSchema, OptionSet},
};

const BASE: &str = "msgspec.Struct";

#[derive(Debug, Clone, Copy, Default)]
pub struct MsgspecEmitter;

impl Emitter for MsgspecEmitter {
    fn name(&self) -> &'static str {
        "msgspec"
    }

    fn kind(&self) -> EmitterKind {
        EmitterKind::BaseClass { base: BASE }
    }

    // TODO: map struct config (frozen, kw_only) to class keywords once base-class
    // emitters accept options
    fn schema(&self) -> OptionSchema {
        &[]
    }

    fn imports(&self, imports: &mut ImportCollector) {
        imports.add_module("msgspec");
    }

    fn build_header(&self, class_name: &str, _options: &OptionSet) -> Vec<String> {
        base_class_header(BASE, class_name)
    }
}
