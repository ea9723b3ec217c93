//! Small text helpers shared by the reply tables.
use chrono::{DateTime, Utc};

/// Whether any keyword occurs in the input
pub fn contains_any(input: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| input.contains(keyword))
}

/// Whether any keyword occurs in the input as a whole word
pub fn contains_word(input: &str, keywords: &[&str]) -> bool {
    input
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| keywords.contains(&word))
}

/// Remove search verbs from a query.
/// Each verb followed by whitespace is dropped, along with a `for` that follows it.
pub fn strip_verbs(input: &str, verbs: &[&str]) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    'scan: while let Some(c) = rest.chars().next() {
        for verb in verbs {
            if let Some(after) = strip_word(rest, verb) {
                rest = strip_word(after, "for").unwrap_or(after);
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out.trim().to_string()
}

/// Strip `word` and the whitespace after it, ignoring ascii case.
/// Returns None unless at least one whitespace character follows.
fn strip_word<'a>(input: &'a str, word: &str) -> Option<&'a str> {
    let head = input.get(..word.len())?;
    if !head.eq_ignore_ascii_case(word) {
        return None;
    }
    let tail = &input[word.len()..];
    let trimmed = tail.trim_start();
    (trimmed.len() < tail.len()).then_some(trimmed)
}

/// Percent encode a query component the way browsers do for `encodeURIComponent`
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

pub fn google_search_url(query: &str) -> String {
    format!("https://www.google.com/search?q={}", encode_component(query))
}

pub fn format_time(now: DateTime<Utc>) -> String {
    now.format("%-I:%M:%S %p").to_string()
}

pub fn format_date(now: DateTime<Utc>) -> String {
    now.format("%-m/%-d/%Y").to_string()
}
