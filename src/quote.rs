//! Quoting of string and byte literals.
//!
//! Strings are double-quoted. Bytes are quoted the same way over their UTF-8
//! prefix-decoded content and then have their delimiters swapped for `'`, so
//! an embedded `"` stays escaped and an embedded `'` does not.

use std::fmt::Write;

/// Quote a string as a double-quoted literal.
///
/// # Example
///
/// ```rust
/// use adt_debug::quote::quote;
///
/// assert_eq!(quote("a\"b"), r#""a\"b""#);
/// assert_eq!(quote("line\n"), r#""line\n""#);
/// ```
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        push_escaped(&mut out, c);
    }
    out.push('"');
    out
}

/// Quote a byte string as a single-quoted literal.
///
/// Invalid UTF-8 is escaped byte by byte as `\xNN`.
///
/// # Example
///
/// ```rust
/// use adt_debug::quote::quote_bytes;
///
/// assert_eq!(quote_bytes(b"ab"), "'ab'");
/// assert_eq!(quote_bytes(&[0xff]), r"'\xff'");
/// ```
pub fn quote_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('\'');
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            push_escaped(&mut out, c);
        }
        for b in chunk.invalid() {
            push_hex_byte(&mut out, *b);
        }
    }
    out.push('\'');
    out
}

/// Whether `s` can be written as a bare identifier.
///
/// Identifiers start with a letter, `_` or `$` and continue with letters,
/// digits, `_` or `$`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '"' => out.push_str("\\\""),
        '\\' => out.push_str("\\\\"),
        '\u{07}' => out.push_str("\\a"),
        '\u{08}' => out.push_str("\\b"),
        '\u{0c}' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{0b}' => out.push_str("\\v"),
        c if is_printable(c) => out.push(c),
        c if c < ' ' || c == '\u{7f}' => push_hex_byte(out, c as u8),
        c if (c as u32) < 0x10000 => {
            let _ = write!(out, "\\u{:04x}", c as u32);
        }
        c => {
            let _ = write!(out, "\\U{:08x}", c as u32);
        }
    }
}

fn push_hex_byte(out: &mut String, b: u8) {
    let _ = write!(out, "\\x{:02x}", b);
}

fn is_printable(c: char) -> bool {
    if c.is_ascii() {
        return (' '..='~').contains(&c);
    }
    !c.is_control() && !c.is_whitespace() && !is_format(c) && !is_private_or_noncharacter(c)
}

fn is_private_or_noncharacter(c: char) -> bool {
    (c as u32) & 0xfffe == 0xfffe
        || matches!(
            c,
            '\u{e000}'..='\u{f8ff}'
                | '\u{fdd0}'..='\u{fdef}'
                | '\u{f0000}'..='\u{ffffd}'
                | '\u{100000}'..='\u{10fffd}'
        )
}

// Invisible formatting characters that must not appear verbatim.
fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
    )
}
