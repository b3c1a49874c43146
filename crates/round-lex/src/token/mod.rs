//! Token type definitions.
//!
//! [`Token`] is a closed sum type. Capability queries (`is_comma`,
//! `is_operator`, ...) are exhaustive matches over it and default to
//! `false`; there is no token hierarchy to walk.
//!
//! Heap-backed tokens sit behind `Arc`, so cloning a token is a pointer
//! copy and interned tokens can be compared with `Arc::ptr_eq`.

mod operator;
mod punctuation;
mod value;

pub use operator::{Associativity, Operator};
pub use punctuation::Punctuation;
pub use value::{
    ConstantToken, ConstantValue, Number, NumberToken, Quote, StringShape, StringToken,
};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Discriminant of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifiers and keywords
    Identifier,
    /// Literal values
    Value(ValueKind),
    /// Operators
    Operator,
    /// Structural punctuation
    Punctuation,
    /// Comments
    Comment,
}

/// Sub-kind of a value token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Numeric literal
    Number,
    /// String literal
    String,
    /// Configured constant such as `true`
    Constant,
}

/// An identifier or keyword.
///
/// Keywords are pre-built by the configuration and flagged; plain
/// identifiers are interned per lexer.
#[derive(Clone, Debug)]
pub struct IdentifierToken {
    name: Box<str>,
    keyword: bool,
}

impl IdentifierToken {
    /// A plain identifier
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Self {
            name: name.into(),
            keyword: false,
        }
    }

    /// A reserved word
    pub fn keyword(name: impl Into<Box<str>>) -> Self {
        Self {
            name: name.into(),
            keyword: true,
        }
    }

    /// Spelling
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if this token came from the keyword table
    pub fn is_keyword(&self) -> bool {
        self.keyword
    }
}

impl PartialEq for IdentifierToken {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for IdentifierToken {}

impl Hash for IdentifierToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// How a comment was delimited.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommentShape {
    /// Runs from `marker` to the end of the line
    SingleLine {
        /// Marker that opened the comment, e.g. `//`
        marker: Box<str>,
    },
    /// Runs from `open` through `close`
    MultiLine {
        /// Opening delimiter, e.g. `/*`
        open: Box<str>,
        /// Closing delimiter, e.g. `*/`
        close: Box<str>,
    },
}

/// A comment, kept in the stream so tools can see it.
#[derive(Clone, Debug)]
pub struct CommentToken {
    raw: Box<str>,
    shape: CommentShape,
}

impl CommentToken {
    /// A single-line comment; `raw` includes the marker.
    pub fn single_line(raw: impl Into<Box<str>>, marker: &str) -> Self {
        Self {
            raw: raw.into(),
            shape: CommentShape::SingleLine {
                marker: marker.into(),
            },
        }
    }

    /// A multi-line comment; `raw` includes both delimiters.
    pub fn multi_line(raw: impl Into<Box<str>>, open: &str, close: &str) -> Self {
        Self {
            raw: raw.into(),
            shape: CommentShape::MultiLine {
                open: open.into(),
                close: close.into(),
            },
        }
    }

    /// Comment text including delimiters
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Delimiter shape
    pub fn shape(&self) -> &CommentShape {
        &self.shape
    }

    /// Returns true for single-line comments
    pub fn is_single_line(&self) -> bool {
        matches!(self.shape, CommentShape::SingleLine { .. })
    }

    /// Returns true for multi-line comments
    pub fn is_multi_line(&self) -> bool {
        matches!(self.shape, CommentShape::MultiLine { .. })
    }
}

impl PartialEq for CommentToken {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for CommentToken {}

impl Hash for CommentToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

/// A lexical token.
///
/// # Example
///
/// ```
/// use round_lex::{Operator, Punctuation, Token};
///
/// let token = Token::Operator(Operator::Add);
/// assert!(token.is_operator());
/// assert_eq!(token.operator(), Some(Operator::Add));
/// assert!(!token.is_comma());
/// assert!(Token::Punctuation(Punctuation::Comma).is_comma());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// Identifier or keyword
    Identifier(Arc<IdentifierToken>),
    /// Numeric literal
    Number(Arc<NumberToken>),
    /// String literal
    String(Arc<StringToken>),
    /// Configured constant
    Constant(Arc<ConstantToken>),
    /// Operator
    Operator(Operator),
    /// Punctuation
    Punctuation(Punctuation),
    /// Comment
    Comment(Arc<CommentToken>),
}

impl Token {
    /// Kind discriminant
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Number(_) => TokenKind::Value(ValueKind::Number),
            Token::String(_) => TokenKind::Value(ValueKind::String),
            Token::Constant(_) => TokenKind::Value(ValueKind::Constant),
            Token::Operator(_) => TokenKind::Operator,
            Token::Punctuation(_) => TokenKind::Punctuation,
            Token::Comment(_) => TokenKind::Comment,
        }
    }

    /// Source text of the token
    pub fn raw(&self) -> &str {
        match self {
            Token::Identifier(t) => t.name(),
            Token::Number(t) => t.raw(),
            Token::String(t) => t.raw(),
            Token::Constant(t) => t.name(),
            Token::Operator(op) => op.symbol(),
            Token::Punctuation(p) => p.symbol(),
            Token::Comment(t) => t.raw(),
        }
    }

    /// Returns true for identifiers, keywords included
    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }

    /// Identifier payload
    pub fn identifier(&self) -> Option<&IdentifierToken> {
        match self {
            Token::Identifier(t) => Some(t),
            _ => None,
        }
    }

    /// Returns true for identifiers that came from the keyword table
    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Identifier(t) if t.is_keyword())
    }

    /// Returns true if the token is the given keyword
    pub fn is_keyword_named(&self, name: &str) -> bool {
        matches!(self, Token::Identifier(t) if t.is_keyword() && t.name() == name)
    }

    /// Returns true for numbers, strings and constants
    pub fn is_value(&self) -> bool {
        matches!(self.kind(), TokenKind::Value(_))
    }

    /// Value sub-kind, if this is a value token
    pub fn value_kind(&self) -> Option<ValueKind> {
        match self.kind() {
            TokenKind::Value(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns true for numeric literals
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    /// Materialized number, if this is a numeric literal
    pub fn number(&self) -> Option<&Number> {
        match self {
            Token::Number(t) => Some(t.value()),
            _ => None,
        }
    }

    /// Returns true for string literals
    pub fn is_string(&self) -> bool {
        matches!(self, Token::String(_))
    }

    /// String payload
    pub fn string(&self) -> Option<&StringToken> {
        match self {
            Token::String(t) => Some(t),
            _ => None,
        }
    }

    /// Returns true for configured constants
    pub fn is_constant(&self) -> bool {
        matches!(self, Token::Constant(_))
    }

    /// Constant payload
    pub fn constant(&self) -> Option<&ConstantToken> {
        match self {
            Token::Constant(t) => Some(t),
            _ => None,
        }
    }

    /// Returns true for operators
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    /// Operator payload
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Token::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// Returns true for punctuation
    pub fn is_punctuation(&self) -> bool {
        matches!(self, Token::Punctuation(_))
    }

    /// Punctuation payload
    pub fn punctuation(&self) -> Option<Punctuation> {
        match self {
            Token::Punctuation(p) => Some(*p),
            _ => None,
        }
    }

    fn is_punct(&self, expected: Punctuation) -> bool {
        matches!(self, Token::Punctuation(p) if *p == expected)
    }

    /// `,`
    pub fn is_comma(&self) -> bool {
        self.is_punct(Punctuation::Comma)
    }

    /// `;`
    pub fn is_semicolon(&self) -> bool {
        self.is_punct(Punctuation::Semicolon)
    }

    /// `:`
    pub fn is_colon(&self) -> bool {
        self.is_punct(Punctuation::Colon)
    }

    /// `(`
    pub fn is_left_paren(&self) -> bool {
        self.is_punct(Punctuation::LeftParen)
    }

    /// `)`
    pub fn is_right_paren(&self) -> bool {
        self.is_punct(Punctuation::RightParen)
    }

    /// `[`
    pub fn is_left_bracket(&self) -> bool {
        self.is_punct(Punctuation::LeftBracket)
    }

    /// `]`
    pub fn is_right_bracket(&self) -> bool {
        self.is_punct(Punctuation::RightBracket)
    }

    /// `{`
    pub fn is_left_brace(&self) -> bool {
        self.is_punct(Punctuation::LeftBrace)
    }

    /// `}`
    pub fn is_right_brace(&self) -> bool {
        self.is_punct(Punctuation::RightBrace)
    }

    /// `@`
    pub fn is_at(&self) -> bool {
        self.is_punct(Punctuation::At)
    }

    /// `#`
    pub fn is_sharp(&self) -> bool {
        self.is_punct(Punctuation::Sharp)
    }

    /// `$`
    pub fn is_dollar(&self) -> bool {
        self.is_punct(Punctuation::Dollar)
    }

    /// `.`
    pub fn is_dot(&self) -> bool {
        matches!(self, Token::Operator(op) if op.is_dot())
    }

    /// Returns true for comments
    pub fn is_comment(&self) -> bool {
        matches!(self, Token::Comment(_))
    }

    /// Comment payload
    pub fn comment(&self) -> Option<&CommentToken> {
        match self {
            Token::Comment(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl From<Punctuation> for Token {
    fn from(p: Punctuation) -> Self {
        Token::Punctuation(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Token {
        Token::Identifier(Arc::new(IdentifierToken::new(name)))
    }

    #[test]
    fn test_identifier_equality_by_spelling() {
        assert_eq!(ident("foo"), ident("foo"));
        assert_ne!(ident("foo"), ident("bar"));
    }

    #[test]
    fn test_keyword_flag() {
        let kw = Token::Identifier(Arc::new(IdentifierToken::keyword("if")));
        assert!(kw.is_identifier());
        assert!(kw.is_keyword());
        assert!(kw.is_keyword_named("if"));
        assert!(!ident("if").is_keyword());
    }

    #[test]
    fn test_kinds() {
        let num = Token::Number(Arc::new(NumberToken::new("1", Number::Int(1))));
        assert_eq!(num.kind(), TokenKind::Value(ValueKind::Number));
        assert!(num.is_value());
        assert_eq!(num.number(), Some(&Number::Int(1)));
        assert_eq!(ident("x").value_kind(), None);
        assert_eq!(Token::from(Operator::Dot).kind(), TokenKind::Operator);
    }

    #[test]
    fn test_capability_queries_default_false() {
        let comma = Token::from(Punctuation::Comma);
        assert!(comma.is_comma());
        assert!(!comma.is_colon());
        assert!(!comma.is_operator());
        assert!(!comma.is_dot());
        assert!(Token::from(Operator::Dot).is_dot());
        assert!(!Token::from(Operator::DoubleDot).is_dot());
    }

    #[test]
    fn test_comment_equality_by_raw() {
        let a = Token::Comment(Arc::new(CommentToken::single_line("// x", "//")));
        let b = Token::Comment(Arc::new(CommentToken::single_line("// x", "#")));
        assert_eq!(a, b);
        assert!(a.comment().map_or(false, CommentToken::is_single_line));
    }

    #[test]
    fn test_raw() {
        assert_eq!(ident("abc").raw(), "abc");
        assert_eq!(Token::from(Operator::UShr).raw(), ">>>");
        assert_eq!(Token::from(Punctuation::Sharp).to_string(), "#");
    }
}
