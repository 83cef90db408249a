use crate::parser::{is_word_char, Cursor};
use std::collections::HashSet;

const TYPE_KEYWORDS: &[&str] = &["struct", "enum"];

/// `struct`/`enum` names in first-seen order, de-duplicated.
///
/// The keyword must start at a word boundary and be followed by at least
/// one whitespace character (newlines included) and an identifier.
pub fn extract_type_names(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    let mut cur = Cursor::new(text);

    while !cur.is_eof() {
        if let Some((name, end)) = type_name_at(cur) {
            if seen.insert(name) {
                names.push(name.to_string());
            }
            cur = Cursor::at(text, end);
        } else {
            cur.bump();
        }
    }

    names
}

fn type_name_at(at: Cursor<'_>) -> Option<(&str, usize)> {
    if at.prev().is_some_and(is_word_char) {
        return None;
    }
    let mut cur = at;
    if !TYPE_KEYWORDS.iter().any(|kw| cur.eat(kw)) {
        return None;
    }
    if cur.eat_while(char::is_whitespace) == 0 {
        return None;
    }
    let name = cur.eat_word_ident()?;
    Some((name, cur.pos()))
}

/// Bodies of every `enum <name> { ... }` block, in order.
///
/// The body runs to the first `}` and must not be empty. No word boundary
/// is required before `enum`, and the name must be followed directly by
/// optional whitespace and `{`, so `enum class X` is not a block.
pub fn enum_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut cur = Cursor::new(text);

    while !cur.is_eof() {
        if let Some((body, end)) = enum_block_at(text, cur) {
            blocks.push(body);
            cur = Cursor::at(text, end);
        } else {
            cur.bump();
        }
    }

    blocks
}

fn enum_block_at<'a>(text: &'a str, at: Cursor<'a>) -> Option<(&'a str, usize)> {
    let mut cur = at;
    if !cur.eat("enum") || cur.eat_while(char::is_whitespace) == 0 {
        return None;
    }
    cur.eat_word_ident()?;
    cur.eat_while(char::is_whitespace);
    if !cur.eat("{") {
        return None;
    }
    let open = cur.pos();
    let len = text[open..].find('}')?;
    if len == 0 {
        return None;
    }
    Some((&text[open..open + len], open + len + 1))
}

/// Whether a whole word looks like an enum constant: `[A-Z_][A-Z0-9_]*`
pub fn is_constant_name(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase() || c == '_')
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Constant-looking words of one enum body, in order, duplicates kept
pub fn enum_constants(body: &str) -> Vec<String> {
    body.split(|c: char| !is_word_char(c))
        .filter(|word| is_constant_name(word))
        .map(str::to_string)
        .collect()
}
