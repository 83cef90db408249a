use eyre::{Result, WrapErr};
use std::fs;
use std::path::Path;

/// Header text loaded fully into memory
pub struct HeaderSource {
    pub text: String,
}

impl HeaderSource {
    /// Number of lines, counting a final unterminated line
    pub fn line_count(&self) -> usize {
        self.text.split_inclusive('\n').count()
    }
}

/// Read a header file; nothing is written anywhere if this fails.
///
/// `\r\n` and lone `\r` line endings are read as `\n`.
pub fn read_header(path: &Path) -> Result<HeaderSource> {
    let raw = fs::read_to_string(path).wrap_err_with(|| format!("Failed to read header: {}", path.display()))?;
    Ok(HeaderSource {
        text: normalize_newlines(&raw),
    })
}

/// Rewrite `\r\n` and lone `\r` as `\n`
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Word character: Unicode alphanumeric or underscore
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// First character of a C identifier
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Remaining characters of a C identifier
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Byte-offset cursor over a text slice.
///
/// All scanners in `analysis` are built on this: they only ever move
/// forward by whole characters, so every loop is linear in the input.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub fn at(text: &'a str, pos: usize) -> Self {
        Self { text, pos }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character immediately before the cursor
    pub fn prev(&self) -> Option<char> {
        self.text[..self.pos].chars().next_back()
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `lit` if the remaining text starts with it
    pub fn eat(&mut self, lit: &str) -> bool {
        if self.rest().starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }

    /// Consume `lit` compared ASCII case-insensitively
    pub fn eat_ignore_case(&mut self, lit: &str) -> bool {
        let rest = self.rest().as_bytes();
        if rest.len() >= lit.len() && rest[..lit.len()].eq_ignore_ascii_case(lit.as_bytes()) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds; returns how many bytes were consumed
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.pos - start
    }

    /// Consume an identifier (`[A-Za-z_][A-Za-z0-9_]*`) and return it
    pub fn eat_ident(&mut self) -> Option<&'a str> {
        let start = self.pos;
        if !self.peek().is_some_and(is_ident_start) {
            return None;
        }
        self.eat_while(is_ident_continue);
        Some(&self.text[start..self.pos])
    }

    /// Consume an identifier start followed by any word characters
    pub fn eat_word_ident(&mut self) -> Option<&'a str> {
        let start = self.pos;
        if !self.peek().is_some_and(is_ident_start) {
            return None;
        }
        self.eat_while(is_word_char);
        Some(&self.text[start..self.pos])
    }
}
