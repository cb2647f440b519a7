//! `attrs` emitter using the modern `attrs.define` API.

use recast_codegen::{
    emitter::{Emitter, EmitterKind, decorator_header},
    imports::ImportCollector,
    options::{OptionSchema, OptionSet, OptionSpec},
};

const MARKER: &str = "define";

/// Options of `attrs.define`, in signature order.
const SCHEMA: OptionSchema = &[
    OptionSpec::new("these", "attributes to use instead of class annotations"),
    OptionSpec::new("repr", "generate __repr__"),
    OptionSpec::new("unsafe_hash", "force a __hash__ method"),
    OptionSpec::new("hash", "alias of unsafe_hash"),
    OptionSpec::new("init", "generate __init__"),
    OptionSpec::new("slots", "generate a slotted class"),
    OptionSpec::new("frozen", "make instances immutable"),
    OptionSpec::new("weakref_slot", "add a __weakref__ slot"),
    OptionSpec::new("str", "generate __str__"),
    OptionSpec::new("auto_attribs", "collect annotated attributes"),
    OptionSpec::new("kw_only", "make every attribute keyword-only"),
    OptionSpec::new("cache_hash", "cache the computed hash"),
    OptionSpec::new("auto_exc", "behave like an exception class"),
    OptionSpec::new("eq", "generate __eq__ and __ne__"),
    OptionSpec::new("order", "generate ordering methods"),
    OptionSpec::new("auto_detect", "keep hand-written dunder methods"),
    OptionSpec::new("getstate_setstate", "generate pickling methods"),
    OptionSpec::new("on_setattr", "hook(s) run when an attribute is set"),
    OptionSpec::new("field_transformer", "function that rewrites the fields"),
    OptionSpec::new("match_args", "generate __match_args__"),
];

/// `@define` emitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttrsEmitter;

impl Emitter for AttrsEmitter {
    fn name(&self) -> &'static str {
        "attrs"
    }

    fn kind(&self) -> EmitterKind {
        EmitterKind::Decorator { marker: MARKER }
    }

    fn schema(&self) -> OptionSchema {
        SCHEMA
    }

    fn imports(&self, imports: &mut ImportCollector) {
        imports.add("attrs", MARKER);
    }

    fn build_header(&self, class_name: &str, options: &OptionSet) -> Vec<String> {
        decorator_header(MARKER, class_name, options)
    }
}

#[cfg(test)]
mod tests {
    use recast_core::PyValue;

    use super::*;

    #[test]
    fn test_schema_order() {
        let names: Vec<_> = AttrsEmitter.schema().iter().map(|o| o.name).collect();
        assert_eq!(names.first(), Some(&"these"));
        assert_eq!(names.last(), Some(&"match_args"));
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn test_expression_option() {
        let options = AttrsEmitter
            .options()
            .with("on_setattr", PyValue::Expr("attrs.setters.frozen".into()))
            .and_then(|o| o.with("repr", PyValue::Bool(false)))
            .unwrap();
        assert_eq!(
            AttrsEmitter.build_header("Point", &options),
            ["@define(repr=False, on_setattr=attrs.setters.frozen)", "class Point:"]
        );
    }

    #[test]
    fn test_none_is_a_value() {
        let options = AttrsEmitter.options().with("hash", PyValue::None).unwrap();
        assert_eq!(AttrsEmitter.build_header("P", &options)[0], "@define(hash=None)");
    }
}
