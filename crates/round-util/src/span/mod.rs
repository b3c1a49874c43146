//! Span module - Source location tracking.
//!
//! Offsets are byte offsets into a `str`; lines and columns are 1-based and
//! columns count characters, not bytes.
//!
//! # Examples
//!
//! ```
//! use round_util::span::{LineCol, Span};
//!
//! let span = Span::new(4, 9);
//! assert_eq!(span.len(), 5);
//!
//! let pos = LineCol::ORIGIN.advance("ab\ncd");
//! assert_eq!((pos.line, pos.column), (2, 3));
//! ```

use std::fmt;

/// A half-open byte range `[start, end)` in a source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Empty span at offset zero
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use round_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Width of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// # Examples
    ///
    /// ```
    /// use round_util::span::Span;
    ///
    /// assert!(Span::new(10, 10).is_empty());
    /// assert!(!Span::new(10, 20).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns true if `offset` lies inside the span
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Slice `source` by this span, returning `None` when out of bounds or
    /// not on a character boundary.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A 1-based line/column coordinate.
///
/// `LineCol` values are produced by walking text forward from a known
/// coordinate, which lets callers compute positions incrementally: the
/// coordinate of a later offset is the coordinate of an earlier offset
/// advanced over the text in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCol {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl LineCol {
    /// Line 1, column 1
    pub const ORIGIN: LineCol = LineCol { line: 1, column: 1 };

    /// Create a new coordinate
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Advance this coordinate over `text`.
    ///
    /// A `\n` moves to column 1 of the next line; every other character
    /// moves one column to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// use round_util::span::LineCol;
    ///
    /// let pos = LineCol::new(3, 7).advance("xy");
    /// assert_eq!(pos, LineCol::new(3, 9));
    ///
    /// let pos = LineCol::new(3, 7).advance("x\n\ny");
    /// assert_eq!(pos, LineCol::new(5, 2));
    /// ```
    pub fn advance(self, text: &str) -> LineCol {
        let mut line = self.line;
        let mut column = self.column;
        for c in text.chars() {
            if c == '\n' {
                line = line.saturating_add(1);
                column = 1;
            } else {
                column = column.saturating_add(1);
            }
        }
        LineCol { line, column }
    }

    /// Coordinate of byte `offset` in `source`, counted from `origin`.
    ///
    /// Offsets past the end are clamped to the end of `source`; offsets
    /// inside a multi-byte character are rounded down to its start.
    ///
    /// # Examples
    ///
    /// ```
    /// use round_util::span::LineCol;
    ///
    /// let source = "let\n  x";
    /// assert_eq!(LineCol::locate(source, 6, LineCol::ORIGIN), LineCol::new(2, 3));
    /// ```
    pub fn locate(source: &str, offset: usize, origin: LineCol) -> LineCol {
        let mut end = offset.min(source.len());
        while !source.is_char_boundary(end) {
            end -= 1;
        }
        origin.advance(&source[..end])
    }
}

impl Default for LineCol {
    #[inline]
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_span_len_and_empty() {
        assert_eq!(Span::new(3, 8).len(), 5);
        assert!(Span::DUMMY.is_empty());
        assert!(Span::new(3, 8).contains(3));
        assert!(!Span::new(3, 8).contains(8));
    }

    #[test]
    fn test_span_slice() {
        let source = "hello world";
        assert_eq!(Span::new(6, 11).slice(source), Some("world"));
        assert_eq!(Span::new(6, 20).slice(source), None);
    }

    #[test]
    fn test_advance_counts_chars_not_bytes() {
        let pos = LineCol::ORIGIN.advance("αβγ");
        assert_eq!(pos, LineCol::new(1, 4));
    }

    #[test]
    fn test_advance_newlines() {
        let pos = LineCol::ORIGIN.advance("a\nbc\n");
        assert_eq!(pos, LineCol::new(3, 1));
    }

    #[test]
    fn test_locate_clamps() {
        assert_eq!(LineCol::locate("ab", 100, LineCol::ORIGIN), LineCol::new(1, 3));
        assert_eq!(LineCol::locate("αb", 1, LineCol::ORIGIN), LineCol::ORIGIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(LineCol::new(4, 2).to_string(), "4:2");
        assert_eq!(Span::new(1, 5).to_string(), "1-5");
    }

    #[quickcheck]
    fn prop_advance_is_additive(a: String, b: String) -> bool {
        let whole = format!("{}{}", a, b);
        LineCol::ORIGIN.advance(&whole) == LineCol::ORIGIN.advance(&a).advance(&b)
    }

    #[quickcheck]
    fn prop_line_count_matches_newlines(s: String) -> bool {
        let newlines = s.chars().filter(|&c| c == '\n').count() as u32;
        LineCol::ORIGIN.advance(&s).line == 1 + newlines
    }
}
