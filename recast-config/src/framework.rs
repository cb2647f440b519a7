//! Target framework identifiers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Frameworks recast can emit declarations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// `@dataclass` from the standard library
    #[default]
    Dataclass,
    /// `@define` from attrs
    Attrs,
    /// `msgspec.Struct` subclasses
    Msgspec,
    /// pydantic `BaseModel` subclasses
    Pydantic,
}

impl Framework {
    /// Every framework, in the order they are listed to users
    pub const ALL: [Framework; 4] = [
        Framework::Dataclass,
        Framework::Attrs,
        Framework::Msgspec,
        Framework::Pydantic,
    ];

    /// Returns the framework identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Dataclass => "dataclass",
            Framework::Attrs => "attrs",
            Framework::Msgspec => "msgspec",
            Framework::Pydantic => "pydantic",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dataclass" | "dataclasses" => Ok(Framework::Dataclass),
            "attrs" | "attr" => Ok(Framework::Attrs),
            "msgspec" => Ok(Framework::Msgspec),
            "pydantic" => Ok(Framework::Pydantic),
            _ => Err(format!(
                "unknown framework '{}', expected one of: dataclass, attrs, msgspec, pydantic",
                s
            )),
        }
    }
}
