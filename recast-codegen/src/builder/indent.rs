use std::fmt;

/// Indentation unit of generated code.
///
/// `Display` renders a single level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Indent {
    /// PEP 8 indentation
    pub const PYTHON: Self = Self::Spaces(4);

    /// Whitespace for `level` nested blocks.
    pub fn at(&self, level: usize) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width) * level),
            Self::Tab => "\t".repeat(level),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PYTHON
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.at(1))
    }
}
