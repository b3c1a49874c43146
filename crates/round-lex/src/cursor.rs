//! Character cursor for traversing source text.
//!
//! The cursor only tracks a byte position. Line and column numbers are
//! derived by the token stream from the gaps between tokens, so nothing
//! here counts newlines.

/// A cursor over UTF-8 source text.
///
/// # Example
///
/// ```
/// use round_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a->b");
/// cursor.advance();
/// assert!(cursor.match_char('-'));
/// assert_eq!(cursor.current_char(), '>');
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::new_at(source, 0)
    }

    /// Creates a cursor at byte offset `position`, clamped to the source
    /// length.
    pub fn new_at(source: &'a str, position: usize) -> Self {
        Self {
            source,
            position: position.min(source.len()),
        }
    }

    /// Returns the current character, or `'\0'` at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        let pos = self.position;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Advances past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances by `count` bytes, stopping at the end of the source.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        self.position = (self.position + count).min(self.source.len());
    }

    /// Moves forward to byte offset `end`. Never moves backward.
    pub fn advance_to(&mut self, end: usize) {
        self.position = end.clamp(self.position, self.source.len());
    }

    /// Consumes `expected` if it is the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use round_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or("")
    }

    /// Returns the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("let x = 42;");
        assert_eq!(cursor.current_char(), 'l');
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_new_at_clamps() {
        let cursor = Cursor::new_at("abc", 10);
        assert!(cursor.is_at_end());
        assert_eq!(Cursor::new_at("abc", 1).current_char(), 'b');
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβγ");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        assert_eq!(cursor.position(), 2);
        cursor.advance();
        assert_eq!(cursor.current_char(), 'γ');
    }

    #[test]
    fn test_advance_to_never_rewinds() {
        let mut cursor = Cursor::new("abcdef");
        cursor.advance_to(4);
        assert_eq!(cursor.current_char(), 'e');
        cursor.advance_to(1);
        assert_eq!(cursor.position(), 4);
        cursor.advance_to(100);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_bytes() {
        let mut cursor = Cursor::new("abcdef");
        cursor.advance_bytes(3);
        assert_eq!(cursor.current_char(), 'd');
        cursor.advance_bytes(10);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new(">>>");
        assert!(cursor.match_char('>'));
        assert!(cursor.match_char('>'));
        assert!(cursor.match_char('>'));
        assert!(!cursor.match_char('>'));
        assert!(!cursor.match_char('\0'));
    }

    #[test]
    fn test_slice_and_remaining() {
        let mut cursor = Cursor::new("let x = 42;");
        let start = cursor.position();
        cursor.advance_bytes(3);
        assert_eq!(cursor.slice_from(start), "let");
        assert_eq!(cursor.remaining(), " x = 42;");
        assert_eq!(cursor.source(), "let x = 42;");
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert!(cursor.is_at_end());
    }
}
