//! Closed option schemas for framework headers.
//!
//! Each emitter declares its options as a fixed, ordered list. An
//! [`OptionSet`] holds one slot per schema entry: `None` means "leave it to
//! the framework default" and is never rendered, while `Some(PyValue::None)`
//! is the Python value `None` and is rendered like any other value.

use miette::Diagnostic;
use recast_core::PyValue;
use thiserror::Error;

/// One accepted keyword argument of a framework header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub help: &'static str,
}

impl OptionSpec {
    pub const fn new(name: &'static str, help: &'static str) -> Self {
        Self { name, help }
    }
}

/// Options in their declared order
pub type OptionSchema = &'static [OptionSpec];

#[derive(Debug, Error, Diagnostic)]
pub enum OptionError {
    #[error("unknown option '{option}' for {framework}")]
    #[diagnostic(code(recast::unknown_option), help("valid options for {framework}: {expected}"))]
    UnknownOption {
        option: String,
        framework: &'static str,
        expected: String,
    },
}

/// Option values for one framework header
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSet {
    framework: &'static str,
    schema: OptionSchema,
    values: Vec<Option<PyValue>>,
}

impl OptionSet {
    /// Create an option set with every option unset.
    pub fn new(framework: &'static str, schema: OptionSchema) -> Self {
        Self {
            framework,
            schema,
            values: vec![None; schema.len()],
        }
    }

    /// Name of the framework whose schema this set follows
    pub fn framework(&self) -> &'static str {
        self.framework
    }

    pub fn schema(&self) -> OptionSchema {
        self.schema
    }

    fn slot(&self, name: &str) -> Result<usize, OptionError> {
        self.schema
            .iter()
            .position(|option| option.name == name)
            .ok_or_else(|| OptionError::UnknownOption {
                option: name.to_string(),
                framework: self.framework,
                expected: self.expected(),
            })
    }

    fn expected(&self) -> String {
        if self.schema.is_empty() {
            "none (this framework takes no options)".to_string()
        } else {
            self.names().join(", ")
        }
    }

    /// Names of every option in the schema
    pub fn names(&self) -> Vec<&'static str> {
        self.schema.iter().map(|option| option.name).collect()
    }

    /// Set an option. Names outside the schema are rejected.
    pub fn set(&mut self, name: &str, value: PyValue) -> Result<(), OptionError> {
        let slot = self.slot(name)?;
        self.values[slot] = Some(value);
        Ok(())
    }

    /// Set an option, consuming and returning the set.
    pub fn with(mut self, name: &str, value: PyValue) -> Result<Self, OptionError> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Return an option to the framework default.
    pub fn unset(&mut self, name: &str) -> Result<(), OptionError> {
        let slot = self.slot(name)?;
        self.values[slot] = None;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&PyValue> {
        let slot = self.schema.iter().position(|option| option.name == name)?;
        self.values[slot].as_ref()
    }

    /// True when every option is unset
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Set options in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PyValue)> {
        self.schema
            .iter()
            .zip(&self.values)
            .filter_map(|(option, value)| value.as_ref().map(|value| (option.name, value)))
    }

    /// Render set options as `name=repr(value)` keyword arguments.
    pub fn render_kwargs(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{}={}", name, value.repr()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: OptionSchema = &[
        OptionSpec::new("init", "generate __init__"),
        OptionSpec::new("frozen", "make instances immutable"),
        OptionSpec::new("slots", "use __slots__"),
    ];

    #[test]
    fn test_all_unset() {
        let options = OptionSet::new("dataclass", SCHEMA);
        assert!(options.is_empty());
        assert_eq!(options.render_kwargs(), "");
        assert_eq!(options.get("frozen"), None);
    }

    #[test]
    fn test_render_follows_schema_order() {
        let options = OptionSet::new("dataclass", SCHEMA)
            .with("slots", PyValue::Bool(true))
            .unwrap()
            .with("init", PyValue::Bool(false))
            .unwrap();
        assert_eq!(options.render_kwargs(), "init=False, slots=True");
    }

    #[test]
    fn test_python_none_is_a_value() {
        let mut options = OptionSet::new("dataclass", SCHEMA);
        options.set("frozen", PyValue::None).unwrap();
        assert!(!options.is_empty());
        assert_eq!(options.render_kwargs(), "frozen=None");

        options.unset("frozen").unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn test_unknown_option() {
        let mut options = OptionSet::new("dataclass", SCHEMA);
        let err = options.set("total", PyValue::Bool(false)).unwrap_err();
        assert_eq!(err.to_string(), "unknown option 'total' for dataclass");
        let OptionError::UnknownOption { expected, .. } = err;
        assert_eq!(expected, "init, frozen, slots");
        assert!(options.is_empty());
    }

    #[test]
    fn test_empty_schema_rejects_everything() {
        let mut options = OptionSet::new("msgspec", &[]);
        let OptionError::UnknownOption { expected, .. } =
            options.set("frozen", PyValue::Bool(true)).unwrap_err();
        assert_eq!(expected, "none (this framework takes no options)");
    }
}
