//! tsfacade_printer: Block-structured text output.
//!
//! [`CodeWriter`] accumulates lines with an indentation cursor. Emitters
//! write through it so every generated block shares one notion of
//! indentation, blank lines, and brace placement.

/// Options for the writer.
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Newline string.
    pub new_line: String,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            new_line: "\n".to_string(),
        }
    }
}

/// An append-only line buffer with an indentation cursor.
///
/// Indentation is applied when the first text of a line is written, so
/// blank lines never carry trailing whitespace.
#[derive(Debug)]
pub struct CodeWriter {
    lines: Vec<String>,
    current: String,
    indent_level: usize,
    indent_str: String,
    new_line: String,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::with_options(WriterOptions::default())
    }

    pub fn with_options(options: WriterOptions) -> Self {
        Self {
            lines: Vec::with_capacity(256),
            current: String::new(),
            indent_level: 0,
            indent_str: " ".repeat(options.indent_width),
            new_line: options.new_line,
        }
    }

    /// Append text to the current line.
    pub fn write(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        if self.current.is_empty() {
            for _ in 0..self.indent_level {
                self.current.push_str(&self.indent_str);
            }
        }
        self.current.push_str(text);
        self
    }

    /// Append text and terminate the line.
    pub fn write_line(&mut self, text: &str) -> &mut Self {
        self.write(text);
        self.newline()
    }

    /// Terminate the current line, producing an empty line if nothing was
    /// written on it.
    pub fn newline(&mut self) -> &mut Self {
        let line = std::mem::take(&mut self.current);
        self.lines.push(line);
        self
    }

    /// Make sure the previous line is blank. Consecutive calls collapse into
    /// a single blank line, and nothing is written at the start of the
    /// buffer.
    pub fn blank_line(&mut self) -> &mut Self {
        self.finish_line();
        if self.lines.last().is_some_and(|line| !line.is_empty()) {
            self.lines.push(String::new());
        }
        self
    }

    /// Write `header {`, run `body` one level deeper, then close with `}`.
    pub fn block(&mut self, header: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.write(header);
        self.write_line(" {");
        self.indent_level += 1;
        body(self);
        self.finish_line();
        self.indent_level -= 1;
        self.write_line("}")
    }

    /// Run `body` with the indentation reset to the root level, restoring
    /// the previous level afterwards.
    pub fn at_root(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        let saved = self.indent_level;
        self.indent_level = 0;
        body(self);
        self.finish_line();
        self.indent_level = saved;
        self
    }

    pub fn indentation_level(&self) -> usize {
        self.indent_level
    }

    /// Finish the buffer. Trailing blank lines are dropped and the text ends
    /// with exactly one newline (or is empty).
    pub fn into_string(mut self) -> String {
        self.finish_line();
        while self.lines.last().is_some_and(|line| line.is_empty()) {
            self.lines.pop();
        }
        if self.lines.is_empty() {
            return String::new();
        }
        let mut output = self.lines.join(&self.new_line);
        output.push_str(&self.new_line);
        output
    }

    fn finish_line(&mut self) {
        if !self.current.is_empty() {
            self.newline();
        }
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}
