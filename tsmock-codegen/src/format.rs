//! Pretty-printer for single-line literal expressions.
//!
//! Rewriters produce expressions such as `{ a: 1, b: { c: 2 } }`. The
//! formatter re-flows them into one property per line:
//!
//! ```
//! use tsmock_codegen::format::prettify;
//! use tsmock_core::Indent;
//!
//! let pretty = prettify("{ a: 1, b: { c: 2 } }", Indent::TYPESCRIPT).unwrap();
//! assert_eq!(pretty, "{\n  a: 1,\n  b: {\n    c: 2\n  }\n}");
//! ```
//!
//! Three triggers are recognized, left to right and without overlap:
//!
//! - `{` followed by whitespace opens a level on a new line,
//! - `,` followed by whitespace continues on a new line,
//! - whitespace followed by `}` closes a level on its own line.
//!
//! The whitespace of a trigger is consumed as a whole run, which makes
//! formatting idempotent. Quoted strings are copied untouched.

use miette::Diagnostic;
use thiserror::Error;
use tsmock_core::Indent;

/// Malformed input found while formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum FormatError {
    #[error("closing brace at offset {offset} has no matching opening brace")]
    #[diagnostic(code(tsmock::format::unexpected_close))]
    UnexpectedClose { offset: usize },

    #[error("{open} unclosed brace(s), the first one opened at offset {offset}")]
    #[diagnostic(code(tsmock::format::unclosed))]
    Unclosed { open: usize, offset: usize },

    #[error("string literal starting at offset {offset} is not terminated")]
    #[diagnostic(code(tsmock::format::unterminated_string))]
    UnterminatedString { offset: usize },
}

/// How a brace was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Brace {
    /// Opened by the `{` + whitespace trigger; counts towards depth.
    Expanded,
    /// A bare `{`; its content stays where it is.
    Inline,
}

/// Format `text` with the given indentation unit.
pub fn prettify(text: &str, indent: Indent) -> Result<String, FormatError> {
    Formatter::new(indent).run(text)
}

/// Formatter state, scoped to a single [`prettify`] call.
struct Formatter {
    indent: Indent,
    depth: usize,
    /// Open braces with the byte offset they were opened at.
    stack: Vec<(Brace, usize)>,
    out: String,
}

impl Formatter {
    fn new(indent: Indent) -> Self {
        Self {
            indent,
            depth: 0,
            stack: Vec::new(),
            out: String::new(),
        }
    }

    fn run(mut self, text: &str) -> Result<String, FormatError> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut i = 0;

        while i < chars.len() {
            let (offset, c) = chars[i];
            match c {
                '"' | '\'' | '`' => {
                    i = self.copy_string(&chars, i)?;
                }
                '{' => {
                    let end = skip_whitespace(&chars, i + 1);
                    if end == i + 1 {
                        self.stack.push((Brace::Inline, offset));
                        self.out.push('{');
                        i += 1;
                    } else if is_close(&chars, end) {
                        self.out.push_str("{}");
                        i = end + 1;
                    } else {
                        self.stack.push((Brace::Expanded, offset));
                        self.depth += 1;
                        self.out.push('{');
                        self.newline();
                        i = end;
                    }
                }
                ',' => {
                    let end = skip_whitespace(&chars, i + 1);
                    self.out.push(',');
                    if end == i + 1 {
                        i += 1;
                    } else if is_close(&chars, end) {
                        self.close_after(&chars[i + 1..end], chars[end].0)?;
                        i = end + 1;
                    } else {
                        self.newline();
                        i = end;
                    }
                }
                '}' => {
                    match self.pop(offset)? {
                        Brace::Expanded => self.close_line(),
                        Brace::Inline => self.out.push('}'),
                    }
                    i += 1;
                }
                c if c.is_whitespace() => {
                    let end = skip_whitespace(&chars, i);
                    if is_close(&chars, end) {
                        self.close_after(&chars[i..end], chars[end].0)?;
                        i = end + 1;
                    } else {
                        self.out.extend(chars[i..end].iter().map(|(_, c)| c));
                        i = end;
                    }
                }
                c => {
                    self.out.push(c);
                    i += 1;
                }
            }
        }

        if let Some(&(_, offset)) = self.stack.first() {
            return Err(FormatError::Unclosed {
                open: self.stack.len(),
                offset,
            });
        }

        Ok(self.out)
    }

    /// Copy a quoted literal starting at `start`; returns the index after it.
    fn copy_string(&mut self, chars: &[(usize, char)], start: usize) -> Result<usize, FormatError> {
        let (offset, quote) = chars[start];
        self.out.push(quote);

        let mut i = start + 1;
        let mut escaped = false;
        while i < chars.len() {
            let c = chars[i].1;
            self.out.push(c);
            i += 1;

            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                return Ok(i);
            }
        }

        Err(FormatError::UnterminatedString { offset })
    }

    fn pop(&mut self, offset: usize) -> Result<Brace, FormatError> {
        let (brace, _) = self
            .stack
            .pop()
            .ok_or(FormatError::UnexpectedClose { offset })?;
        if brace == Brace::Expanded {
            self.depth -= 1;
        }
        Ok(brace)
    }

    /// Close the innermost brace after the whitespace run `space`.
    ///
    /// An expanded brace closes on its own line; an inline one keeps the
    /// whitespace and stays on the current line.
    fn close_after(&mut self, space: &[(usize, char)], offset: usize) -> Result<(), FormatError> {
        match self.pop(offset)? {
            Brace::Expanded => self.close_line(),
            Brace::Inline => {
                self.out.extend(space.iter().map(|(_, c)| c));
                self.out.push('}');
            }
        }
        Ok(())
    }

    fn close_line(&mut self) {
        self.newline();
        self.out.push('}');
    }

    fn newline(&mut self) {
        self.out.push('\n');
        self.out.push_str(&self.indent.repeat(self.depth));
    }
}

fn skip_whitespace(chars: &[(usize, char)], mut i: usize) -> usize {
    while i < chars.len() && chars[i].1.is_whitespace() {
        i += 1;
    }
    i
}

fn is_close(chars: &[(usize, char)], i: usize) -> bool {
    chars.get(i).is_some_and(|(_, c)| *c == '}')
}
