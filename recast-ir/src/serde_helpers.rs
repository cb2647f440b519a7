//! Serde helpers for types that serialize as their rendered form.

use std::fmt::Display;

use serde::Serializer;

/// Serialize a value as its `Display` output.
pub fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
