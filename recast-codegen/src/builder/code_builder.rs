//! Line-oriented builder for indented code.

use super::Indent;

/// Builds generated code as an ordered list of lines.
///
/// Lines are kept separate until [`CodeBuilder::build`] so emitters can hand
/// back line sequences and callers decide how to join them.
///
/// # Example
///
/// ```
/// use recast_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::python()
///     .line("@dataclass")
///     .line("class Movie:")
///     .indent()
///     .line("title: str")
///     .dedent()
///     .build();
///
/// assert_eq!(code, "@dataclass\nclass Movie:\n    title: str\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    lines: Vec<String>,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            lines: Vec::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn python() -> Self {
        Self::new(Indent::PYTHON)
    }

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        let mut line = self.indent.at(self.indent_level);
        line.push_str(s);
        self.lines.push(line);
        self
    }

    /// Add several lines at the current indentation (mutable).
    pub fn push_lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line.
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Take the built lines without joining them.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Join the lines with newlines, ending with a trailing newline.
    ///
    /// An empty builder produces an empty string.
    pub fn build(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::python()
    }
}
