//! Structural single-character symbols.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;

/// Punctuation tokens: `, ; : ( ) [ ] { } @ # $`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Punctuation {
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `@`
    At,
    /// `#`
    Sharp,
    /// `$`
    Dollar,
}

static BY_CHAR: LazyLock<FxHashMap<char, Punctuation>> = LazyLock::new(|| {
    Punctuation::ALL
        .into_iter()
        .map(|p| (p.as_char(), p))
        .collect()
});

impl Punctuation {
    /// Every punctuation token.
    pub const ALL: [Punctuation; 12] = [
        Punctuation::Comma,
        Punctuation::Semicolon,
        Punctuation::Colon,
        Punctuation::LeftParen,
        Punctuation::RightParen,
        Punctuation::LeftBracket,
        Punctuation::RightBracket,
        Punctuation::LeftBrace,
        Punctuation::RightBrace,
        Punctuation::At,
        Punctuation::Sharp,
        Punctuation::Dollar,
    ];

    /// O(1) lookup by character.
    ///
    /// # Example
    ///
    /// ```
    /// use round_lex::Punctuation;
    ///
    /// assert_eq!(Punctuation::from_char('('), Some(Punctuation::LeftParen));
    /// assert_eq!(Punctuation::from_char('+'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Punctuation> {
        BY_CHAR.get(&c).copied()
    }

    /// The character this token stands for.
    pub const fn as_char(self) -> char {
        match self {
            Punctuation::Comma => ',',
            Punctuation::Semicolon => ';',
            Punctuation::Colon => ':',
            Punctuation::LeftParen => '(',
            Punctuation::RightParen => ')',
            Punctuation::LeftBracket => '[',
            Punctuation::RightBracket => ']',
            Punctuation::LeftBrace => '{',
            Punctuation::RightBrace => '}',
            Punctuation::At => '@',
            Punctuation::Sharp => '#',
            Punctuation::Dollar => '$',
        }
    }

    /// Raw source text.
    pub const fn symbol(self) -> &'static str {
        match self {
            Punctuation::Comma => ",",
            Punctuation::Semicolon => ";",
            Punctuation::Colon => ":",
            Punctuation::LeftParen => "(",
            Punctuation::RightParen => ")",
            Punctuation::LeftBracket => "[",
            Punctuation::RightBracket => "]",
            Punctuation::LeftBrace => "{",
            Punctuation::RightBrace => "}",
            Punctuation::At => "@",
            Punctuation::Sharp => "#",
            Punctuation::Dollar => "$",
        }
    }
}

impl fmt::Display for Punctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_every_symbol() {
        for p in Punctuation::ALL {
            assert_eq!(Punctuation::from_char(p.as_char()), Some(p));
            assert_eq!(p.symbol().chars().next(), Some(p.as_char()));
        }
    }

    #[test]
    fn test_lookup_misses() {
        for c in ['+', '.', ' ', 'a', '?'] {
            assert_eq!(Punctuation::from_char(c), None);
        }
    }
}
