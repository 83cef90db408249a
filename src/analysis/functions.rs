use crate::parser::{is_ident_start, is_word_char, Cursor};
use std::collections::HashSet;

/// Return-type prefixes that disqualify a line
const EXCLUDED_PREFIXES: &[&str] = &["static", "inline"];

/// Characters allowed in the return-type part of a declaration
fn is_return_type_char(c: char) -> bool {
    is_word_char(c) || c.is_whitespace() || matches!(c, '*' | '(' | ')')
}

/// Match a single-line function declaration and return its name.
///
/// Shape: `[ \t]*` then a return type made of word characters,
/// whitespace, `*`, `(` and `)` (not starting with `static` or `inline`),
/// then the name, optional whitespace, `(`, a parameter list without `;`,
/// `)`, optional whitespace and `;`. The return type is kept as short as
/// possible, so the first name that completes the shape wins.
///
/// Declarations whose signature continues on the next line never match.
pub fn match_declaration(line: &str) -> Option<&str> {
    let mut cur = Cursor::new(line);
    cur.eat_while(|c| c == ' ' || c == '\t');
    let start = cur.pos();

    if !cur.peek().is_some_and(is_ident_start) {
        return None;
    }
    if EXCLUDED_PREFIXES.iter().any(|p| cur.rest().starts_with(p)) {
        return None;
    }

    // Everything before the first `;` must be return type, name and
    // parameters, so the closing `)` is the last non-space before it.
    let semi = line.find(';')?;
    let close = line[..semi].trim_end().len().checked_sub(1)?;
    if line.as_bytes()[close] != b')' {
        return None;
    }

    let mut scan = Cursor::at(line, start);
    while let Some(c) = scan.bump() {
        if !is_return_type_char(c) {
            return None;
        }
        if is_word_char(c) || !scan.peek().is_some_and(is_ident_start) {
            continue;
        }
        if let Some(name) = name_with_params(line, scan.pos(), close) {
            return Some(name);
        }
    }
    None
}

/// Identifier at `at` followed by optional whitespace and a `(` that opens before `close`
fn name_with_params(line: &str, at: usize, close: usize) -> Option<&str> {
    let mut cur = Cursor::at(line, at);
    let name = cur.eat_ident()?;
    cur.eat_while(char::is_whitespace);
    let open = cur.pos();
    (cur.eat("(") && open < close).then_some(name)
}

/// Unique function names in first-seen order from comment-free public text
pub fn extract_functions(public_text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut functions = Vec::new();

    for line in public_text.split('\n') {
        if let Some(name) = match_declaration(line) {
            if seen.insert(name) {
                functions.push(name.to_string());
            }
        }
    }

    functions
}
