//! Framework name to emitter lookup.

use recast_codegen::{
    emitter::{EmitError, Emitter, emit_declaration},
    options::OptionSet,
};
use recast_config::Framework;
use recast_ir::Declaration;

use crate::adapters::{AttrsEmitter, DataclassEmitter, MsgspecEmitter, PydanticEmitter};

static EMITTERS: [&dyn Emitter; 4] = [
    &DataclassEmitter,
    &AttrsEmitter,
    &MsgspecEmitter,
    &PydanticEmitter,
];

/// Every registered emitter, in a fixed order.
pub fn frameworks() -> &'static [&'static dyn Emitter] {
    &EMITTERS
}

/// Look up an emitter by framework name.
pub fn emitter(name: &str) -> Result<&'static dyn Emitter, EmitError> {
    EMITTERS
        .iter()
        .copied()
        .find(|emitter| emitter.name() == name)
        .ok_or_else(|| EmitError::UnsupportedFramework {
            name: name.to_string(),
            available: EMITTERS
                .iter()
                .map(|emitter| emitter.name())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// The emitter for a known framework.
pub fn for_framework(framework: Framework) -> &'static dyn Emitter {
    match framework {
        Framework::Dataclass => &DataclassEmitter,
        Framework::Attrs => &AttrsEmitter,
        Framework::Msgspec => &MsgspecEmitter,
        Framework::Pydantic => &PydanticEmitter,
    }
}

/// Emit one declaration for the named framework.
///
/// The framework is resolved before anything is built, so an unknown name
/// produces no lines.
pub fn emit(
    name: &str,
    declaration: &Declaration,
    options: &OptionSet,
) -> Result<Vec<String>, EmitError> {
    let emitter = emitter(name)?;
    emit_declaration(emitter, declaration, options)
}
