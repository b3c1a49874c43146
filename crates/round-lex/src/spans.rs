//! Literal span detection.
//!
//! The scanner decides *which* rule applies at an offset; a [`SpanScanner`]
//! decides *where* an identifier, number or string literal ends. Hosts
//! with different literal syntax plug in their own implementation through
//! [`LexConfig::spans`](crate::LexConfig::spans).

use crate::unicode;

/// A string literal located by a [`SpanScanner`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringLiteral {
    /// Offset just past the closing quote
    pub end: usize,
    /// Unescaped content between the quotes
    pub value: String,
}

/// Finds the extent of identifier, number and string literals.
///
/// All offsets are byte offsets into `text`. Implementations are shared by
/// every stream a lexer produces, possibly across threads.
pub trait SpanScanner: Send + Sync {
    /// Can `c` start an identifier?
    fn is_identifier_start(&self, c: char) -> bool;

    /// Can `c` start a numeric literal?
    fn is_digit_start(&self, c: char) -> bool;

    /// End of the identifier starting at `offset`.
    ///
    /// Only called when `is_identifier_start` accepted the character at
    /// `offset`; the result must be greater than `offset`.
    fn identifier_end(&self, text: &str, offset: usize) -> usize;

    /// End of the numeric literal starting at `offset` and whether it is
    /// floating-point, or `None` if the literal is malformed.
    fn number_end(&self, text: &str, offset: usize) -> Option<(usize, bool)>;

    /// The quoted literal starting at `offset` (which holds the opening
    /// quote), or `None` if it never closes.
    fn string_literal(&self, text: &str, offset: usize) -> Option<StringLiteral>;
}

/// Default literal syntax.
///
/// - identifiers: `_` or a letter, then `_`, letters or digits
/// - numbers: `digits ('.' digits)? ([eE] [+-]? digits)?`
/// - strings: `\` escapes the next character; the literal ends at the
///   first unescaped copy of the opening quote
///
/// # Example
///
/// ```
/// use round_lex::{SpanScanner, StandardSpans};
///
/// let spans = StandardSpans;
/// assert_eq!(spans.number_end("3.14 + x", 0), Some((4, true)));
/// assert_eq!(spans.number_end("1..2", 0), Some((1, false)));
/// assert_eq!(spans.identifier_end("foo.bar", 0), 3);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardSpans;

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

impl SpanScanner for StandardSpans {
    fn is_identifier_start(&self, c: char) -> bool {
        unicode::is_ident_start(c)
    }

    fn is_digit_start(&self, c: char) -> bool {
        unicode::is_digit_start(c)
    }

    fn identifier_end(&self, text: &str, offset: usize) -> usize {
        text[offset..]
            .char_indices()
            .find(|&(_, c)| !unicode::is_ident_continue(c))
            .map_or(text.len(), |(i, _)| offset + i)
    }

    fn number_end(&self, text: &str, offset: usize) -> Option<(usize, bool)> {
        let bytes = text.as_bytes();
        let mut end = skip_digits(bytes, offset);
        if end == offset {
            return None;
        }

        let mut floating = false;
        if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
            floating = true;
            end = skip_digits(bytes, end + 1);
        }

        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let digits_end = skip_digits(bytes, exp);
            if digits_end == exp {
                return None;
            }
            floating = true;
            end = digits_end;
        }

        Some((end, floating))
    }

    fn string_literal(&self, text: &str, offset: usize) -> Option<StringLiteral> {
        let mut chars = text[offset..].char_indices();
        let (_, quote) = chars.next()?;
        let body_start = offset + quote.len_utf8();

        while let Some((i, c)) = chars.next() {
            if c == '\\' {
                chars.next();
            } else if c == quote {
                let close = offset + i;
                return Some(StringLiteral {
                    end: close + quote.len_utf8(),
                    value: unicode::unescape(&text[body_start..close]),
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_end() {
        let spans = StandardSpans;
        assert_eq!(spans.identifier_end("abc", 0), 3);
        assert_eq!(spans.identifier_end("x + y", 4), 5);
        assert_eq!(spans.identifier_end("_a1(b)", 0), 3);
        assert_eq!(spans.identifier_end("αβ γ", 0), "αβ".len());
    }

    #[test]
    fn test_number_end_integers() {
        let spans = StandardSpans;
        assert_eq!(spans.number_end("42", 0), Some((2, false)));
        assert_eq!(spans.number_end("x=7;", 2), Some((3, false)));
        assert_eq!(spans.number_end("1.x", 0), Some((1, false)));
    }

    #[test]
    fn test_number_end_floats() {
        let spans = StandardSpans;
        assert_eq!(spans.number_end("0.5", 0), Some((3, true)));
        assert_eq!(spans.number_end("1e10", 0), Some((4, true)));
        assert_eq!(spans.number_end("2.5E-3)", 0), Some((6, true)));
        assert_eq!(spans.number_end("6e+2", 0), Some((4, true)));
    }

    #[test]
    fn test_number_end_malformed() {
        let spans = StandardSpans;
        assert_eq!(spans.number_end("1e", 0), None);
        assert_eq!(spans.number_end("1e+", 0), None);
        assert_eq!(spans.number_end("a", 0), None);
    }

    #[test]
    fn test_string_literal() {
        let spans = StandardSpans;
        let lit = spans.string_literal("'abc' + 1", 0);
        assert_eq!(
            lit,
            Some(StringLiteral {
                end: 5,
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_string_literal_escaped_quote() {
        let spans = StandardSpans;
        let lit = spans.string_literal(r#""a\"b""#, 0);
        assert_eq!(lit.map(|l| (l.end, l.value)), Some((6, "a\"b".to_string())));
    }

    #[test]
    fn test_string_literal_other_quotes_inside() {
        let spans = StandardSpans;
        let lit = spans.string_literal("`it's \"x\"`", 0);
        assert_eq!(lit.map(|l| l.value), Some("it's \"x\"".to_string()));
    }

    #[test]
    fn test_string_literal_unterminated() {
        let spans = StandardSpans;
        assert_eq!(spans.string_literal("'abc", 0), None);
        assert_eq!(spans.string_literal("'abc\\'", 0), None);
    }
}
