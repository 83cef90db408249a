use crate::parser::Cursor;

/// A line prefix that opens the non-public part of a header.
///
/// Matching is ASCII case-insensitive and allows any leading whitespace.
/// This is a textual heuristic, not language-level access analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivateMarker {
    /// `private:`
    AccessLabel,
    /// `/* private ...`
    CommentOpener,
    /// `#ifdef INTERNAL_API`
    InternalApiGuard,
    /// `#ifndef PUBLIC_API`
    PublicApiGuard,
}

/// Markers in the order they are tried
pub const PRIVATE_MARKERS: &[PrivateMarker] = &[
    PrivateMarker::AccessLabel,
    PrivateMarker::CommentOpener,
    PrivateMarker::InternalApiGuard,
    PrivateMarker::PublicApiGuard,
];

impl PrivateMarker {
    pub fn matches(self, line: &str) -> bool {
        let mut cur = Cursor::new(line);
        cur.eat_while(char::is_whitespace);

        match self {
            PrivateMarker::AccessLabel => cur.eat_ignore_case("private:"),
            PrivateMarker::CommentOpener => {
                if !cur.eat("/*") {
                    return false;
                }
                cur.eat_while(char::is_whitespace);
                cur.eat_ignore_case("private")
            }
            PrivateMarker::InternalApiGuard => directive(&mut cur, "#ifdef", "INTERNAL_API"),
            PrivateMarker::PublicApiGuard => directive(&mut cur, "#ifndef", "PUBLIC_API"),
        }
    }
}

/// `<keyword>` followed by at least one whitespace character, then `<symbol>`
fn directive(cur: &mut Cursor<'_>, keyword: &str, symbol: &str) -> bool {
    cur.eat_ignore_case(keyword) && cur.eat_while(char::is_whitespace) > 0 && cur.eat_ignore_case(symbol)
}

/// Returns the marker a line opens with, if any
pub fn private_marker(line: &str) -> Option<PrivateMarker> {
    PRIVATE_MARKERS.iter().copied().find(|marker| marker.matches(line))
}

/// Text of every line strictly before the first private marker.
///
/// Lines keep their terminators, so the result is always a prefix of
/// `text`; with no marker it is the whole of `text`.
pub fn public_prefix(text: &str) -> &str {
    let mut end = 0;
    for line in text.split_inclusive('\n') {
        if private_marker(line).is_some() {
            return &text[..end];
        }
        end += line.len();
    }
    text
}
