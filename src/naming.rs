//! Identifier transforms from GraphQL names to Go MixedCaps.

/// Words that Go spells fully upper-case inside identifiers.
pub const INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
    "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS",
    "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS",
];

const BRANDS: &[&str] = &["GitHub"];

const ENUM_ALL_VALUES_SUFFIX: &str = "__LIST";

/// Exported identifier for a type or field name: leading underscores are
/// dropped, then the rest is converted to MixedCaps.
///
/// `"__FOO_BAR"` becomes `"FooBar"`, `"client_mutation_id"` becomes
/// `"ClientMutationID"`.
pub fn identifier(name: &str) -> String {
    to_mixed_caps(name.trim_start_matches('_'))
}

/// MixedCaps for custom scalar names, which keep any leading underscore.
pub fn scalar_identifier(name: &str) -> String {
    to_mixed_caps(name)
}

pub fn enum_type(name: &str) -> String {
    identifier(name)
}

/// Suffix used to build enum value constants, e.g. `"_ASC"`.
pub fn enum_value_suffix(value: &str) -> String {
    format!("_{}", value.to_uppercase())
}

/// Name of the generated list holding every member of an enum.
pub fn enum_all_values_identifier(name: &str) -> String {
    enum_type(name) + ENUM_ALL_VALUES_SUFFIX
}

pub fn uc_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lc_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

fn to_mixed_caps(name: &str) -> String {
    split_words(name)
        .into_iter()
        .map(|(word, keep_acronym)| mixed_caps_word(word, keep_acronym))
        .collect()
}

/// Splits on underscores, on a lower-case letter or digit followed by an
/// upper-case letter, and before the last capital of an upper-case run that
/// starts a new word (`HTTPServer` is `HTTP` + `Server`, `IDs` stays whole).
/// Empty words are dropped.
///
/// Each word is paired with whether it is an acronym inside a camelCase
/// segment, whose casing is kept as written.
fn split_words(name: &str) -> Vec<(&str, bool)> {
    let mut words = Vec::new();
    for segment in name.split('_') {
        let camel_case =
            segment.chars().any(char::is_lowercase) && segment.chars().any(char::is_uppercase);
        let chars: Vec<char> = segment.chars().collect();
        let mut start = 0;
        for (position, (index, c)) in segment.char_indices().enumerate().skip(1) {
            let Some(&previous) = chars.get(position - 1) else {
                continue;
            };
            let next = chars.get(position + 1).copied();
            let after_next = chars.get(position + 2).copied();
            let word_start =
                c.is_uppercase() && (previous.is_lowercase() || previous.is_ascii_digit());
            let acronym_end = c.is_uppercase()
                && previous.is_uppercase()
                && next.is_some_and(char::is_lowercase)
                && !is_plural_suffix(next, after_next);
            if word_start || acronym_end {
                words.push(word(&segment[start..index], camel_case));
                start = index;
            }
        }
        words.push(word(&segment[start..], camel_case));
    }
    words.retain(|(word, _)| !word.is_empty());
    words
}

fn word(text: &str, camel_case: bool) -> (&str, bool) {
    let acronym = text.chars().count() > 1 && !text.chars().any(char::is_lowercase);
    (text, camel_case && acronym)
}

/// A lone trailing `s` pluralizes the acronym before it, as in `IDs`.
fn is_plural_suffix(next: Option<char>, after_next: Option<char>) -> bool {
    next == Some('s') && !after_next.is_some_and(char::is_lowercase)
}

fn mixed_caps_word(word: &str, keep_acronym: bool) -> String {
    if word.eq_ignore_ascii_case("IDs") {
        return "IDs".to_string();
    }
    if let Some(initialism) = INITIALISMS.iter().find(|i| i.eq_ignore_ascii_case(word)) {
        return initialism.to_string();
    }
    if let Some(brand) = BRANDS.iter().find(|b| b.eq_ignore_ascii_case(word)) {
        return brand.to_string();
    }
    if keep_acronym {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
