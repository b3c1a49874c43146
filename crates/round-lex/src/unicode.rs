//! Character classes and escape decoding for the lexer.
//!
//! The predicates here back [`StandardSpans`](crate::StandardSpans); hosts
//! that plug in their own [`SpanScanner`](crate::SpanScanner) may reuse them.

use std::iter::Peekable;
use std::str::Chars;

/// Characters the scanner skips between tokens: everything up to and
/// including the space character (`U+0000..=U+0020`).
///
/// # Example
///
/// ```
/// use round_lex::unicode::is_skippable;
///
/// assert!(is_skippable(' '));
/// assert!(is_skippable('\n'));
/// assert!(is_skippable('\u{1}'));
/// assert!(!is_skippable('a'));
/// ```
#[inline]
pub fn is_skippable(c: char) -> bool {
    c <= ' '
}

/// Checks if a character is valid as the start of an identifier.
///
/// # Example
///
/// ```
/// use round_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('$'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character is valid as a continuation of an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Checks if a character starts a numeric literal.
#[inline]
pub fn is_digit_start(c: char) -> bool {
    c.is_ascii_digit()
}

/// Converts a hex character to its numeric value.
///
/// # Example
///
/// ```
/// use round_lex::unicode::hex_digit_to_value;
///
/// assert_eq!(hex_digit_to_value('9'), Some(9));
/// assert_eq!(hex_digit_to_value('F'), Some(15));
/// assert_eq!(hex_digit_to_value('g'), None);
/// ```
pub fn hex_digit_to_value(c: char) -> Option<u32> {
    c.to_digit(16)
}

/// Parses a hex string into a Unicode scalar value.
///
/// Returns `None` for empty input, more than six digits, surrogates and
/// values above `U+10FFFF`.
///
/// # Example
///
/// ```
/// use round_lex::unicode::parse_hex_char;
///
/// assert_eq!(parse_hex_char("41"), Some('A'));
/// assert_eq!(parse_hex_char("1F600"), Some('😀'));
/// assert_eq!(parse_hex_char("D800"), None);
/// assert_eq!(parse_hex_char("110000"), None);
/// ```
pub fn parse_hex_char(hex: &str) -> Option<char> {
    if hex.is_empty() || hex.len() > 6 {
        return None;
    }
    let mut value = 0u32;
    for c in hex.chars() {
        value = value * 16 + hex_digit_to_value(c)?;
    }
    char::from_u32(value)
}

/// Decode backslash escapes in the body of a string literal.
///
/// Recognized: `\n \t \r \0 \b \f \\ \' \" \``, `\xNN`, `\uNNNN` and
/// `\u{N..}`. Any other escaped character stands for itself, and a
/// malformed numeric escape is kept as written minus the backslash.
///
/// # Example
///
/// ```
/// use round_lex::unicode::unescape;
///
/// assert_eq!(unescape(r"a\tb"), "a\tb");
/// assert_eq!(unescape(r"\x41B\u{43}"), "ABC");
/// assert_eq!(unescape(r"\q"), "q");
/// ```
pub fn unescape(content: &str) -> String {
    if !content.contains('\\') {
        return content.to_string();
    }

    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('x') => decode_fixed(&mut chars, 'x', 2, &mut out),
            Some('u') if chars.peek() == Some(&'{') => decode_braced(&mut chars, &mut out),
            Some('u') => decode_fixed(&mut chars, 'u', 4, &mut out),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn take_hex(chars: &mut Peekable<Chars<'_>>, max: usize) -> String {
    let mut hex = String::new();
    while hex.len() < max {
        match chars.peek() {
            Some(h) if h.is_ascii_hexdigit() => {
                hex.push(*h);
                chars.next();
            },
            _ => break,
        }
    }
    hex
}

fn decode_fixed(chars: &mut Peekable<Chars<'_>>, marker: char, width: usize, out: &mut String) {
    let hex = take_hex(chars, width);
    match parse_hex_char(&hex).filter(|_| hex.len() == width) {
        Some(decoded) => out.push(decoded),
        None => {
            out.push(marker);
            out.push_str(&hex);
        },
    }
}

fn decode_braced(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    chars.next();
    let hex = take_hex(chars, 6);
    if chars.peek() == Some(&'}') {
        if let Some(decoded) = parse_hex_char(&hex) {
            chars.next();
            out.push(decoded);
            return;
        }
    }
    out.push_str("u{");
    out.push_str(&hex);
}
