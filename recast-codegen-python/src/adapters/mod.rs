//! One emitter per supported framework.
//!
//! `dataclass` and `attrs` mark classes with a decorator and accept options;
//! `msgspec` and `pydantic` use a base class and take no options.

mod attrs;
mod dataclass;
mod msgspec;
mod pydantic;

pub use self::{
    attrs::AttrsEmitter, dataclass::DataclassEmitter, msgspec::MsgspecEmitter,
    pydantic::PydanticEmitter,
};
