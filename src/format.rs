use std::fmt::Write;

/// Collapses every run of whitespace into one space and trims both ends.
pub fn clean(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A double-quoted Go string literal whose value is exactly `s`.
pub fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{07}' => quoted.push_str("\\a"),
            '\u{08}' => quoted.push_str("\\b"),
            '\u{0c}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{0b}' => quoted.push_str("\\v"),
            c if (c as u32) < 0x80 && c.is_ascii_control() => {
                let _ = write!(quoted, "\\x{:02x}", c as u32);
            }
            c if c.is_control() || is_unprintable(c) => {
                let code = c as u32;
                if code <= 0xffff {
                    let _ = write!(quoted, "\\u{:04x}", code);
                } else {
                    let _ = write!(quoted, "\\U{:08x}", code);
                }
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Characters Go's `strconv.Quote` escapes besides control codes: space
/// separators other than ASCII space, line and paragraph separators, format
/// characters and private-use characters. Unassigned code points are left
/// as they are.
fn is_unprintable(c: char) -> bool {
    matches!(
        c,
        '\u{a0}'
            | '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{890}'..='\u{891}'
            | '\u{8e2}'
            | '\u{1680}'
            | '\u{180e}'
            | '\u{2000}'..='\u{200f}'
            | '\u{2028}'..='\u{202f}'
            | '\u{205f}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{3000}'
            | '\u{e000}'..='\u{f8ff}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{110bd}'
            | '\u{110cd}'
            | '\u{13430}'..='\u{1343f}'
            | '\u{1bca0}'..='\u{1bca3}'
            | '\u{1d173}'..='\u{1d17a}'
            | '\u{e0001}'
            | '\u{e0020}'..='\u{e007f}'
            | '\u{f0000}'..='\u{ffffd}'
            | '\u{100000}'..='\u{10fffd}'
    )
}

/// Turns a schema description into a doc-comment sentence: lower-cased first
/// character and a trailing period. An empty description stays empty.
pub fn format_description(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let mut description = crate::naming::lc_first(s);
    if !description.ends_with('.') {
        description.push('.');
    }
    description
}

pub fn join<S: AsRef<str>>(elems: &[S], sep: &str) -> String {
    elems.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(sep)
}
