//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// Lines are appended at the current indentation level. [`indented`] and
/// [`dedented`] change the level and append in one step. [`block_with_close`]
/// scopes a nested body so the level is restored when the closure returns.
///
/// [`indented`]: CodeBuilder::indented
/// [`dedented`]: CodeBuilder::dedented
/// [`block_with_close`]: CodeBuilder::block_with_close
///
/// # Example
///
/// ```
/// use tagen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::native()
///     .block_with_close("int main() {", "}", |b| b.line("return 0;"))
///     .build();
///
/// assert_eq!(code, "int main() {\n    return 0;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    underflow: bool,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            underflow: false,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (C++ default).
    pub fn native() -> Self {
        Self::new(Indent::NATIVE)
    }

    /// Create a new CodeBuilder with 2-space indentation (TS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation, then add a line.
    pub fn indented(self, s: &str) -> Self {
        self.indent().line(s)
    }

    /// Decrease indentation, then add a line.
    pub fn dedented(self, s: &str) -> Self {
        self.dedent().line(s)
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        match self.indent_level.checked_sub(1) {
            Some(level) => self.indent_level = level,
            None => self.underflow = true,
        }
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use tagen_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::native()
    ///     .block_with_close("if (ok) {", "}", |b| b.line("return;"))
    ///     .build();
    ///
    /// assert_eq!(code, "if (ok) {\n    return;\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a comment line (e.g., `// text` for C++).
    pub fn comment(mut self, prefix: &str, text: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(prefix);
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Add a multi-line JSDoc/TSDoc comment.
    ///
    /// A `*/` inside a line is written as `*\/` so it cannot close the
    /// comment early.
    pub fn jsdoc<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.line("/**")
            .each(lines, |b, text| b.comment(" *", &text.as_ref().replace("*/", "*\\/")))
            .line(" */")
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Returns true if every indent was matched by a dedent.
    pub fn is_balanced(&self) -> bool {
        self.indent_level == 0 && !self.underflow
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::native()
    }
}
