use crate::parser::Cursor;

/// Remove `//` line comments and `/* */` block comments in a single pass.
///
/// A line comment ends before its `\n`, which is kept. A block comment
/// ends at the first `*/` after its opener and may span lines. An opener
/// with no closer is kept as ordinary text and scanning carries on at the
/// next character. String literals are not recognised.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cur = Cursor::new(text);

    while !cur.is_eof() {
        let rest = cur.rest();
        if rest.starts_with("//") {
            let len = rest.find('\n').unwrap_or(rest.len());
            cur = Cursor::at(text, cur.pos() + len);
            continue;
        }
        if rest.starts_with("/*") {
            if let Some(close) = rest[2..].find("*/") {
                cur = Cursor::at(text, cur.pos() + 2 + close + 2);
                continue;
            }
        }
        if let Some(c) = cur.bump() {
            out.push(c);
        }
    }

    out
}
