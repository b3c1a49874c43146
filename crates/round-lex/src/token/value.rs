//! Value tokens: numbers, strings and configured constants.
//!
//! Value tokens compare by their materialized value, never by spelling:
//! `1e3` and `1000.0` are different spellings of the same `Double`.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A materialized numeric literal.
///
/// Which variant a literal lands in is decided by
/// [`BigNumberStrategy`](crate::BigNumberStrategy). Equality is
/// variant-strict: `Int(1)` and `Long(1)` are different values.
#[derive(Clone, Debug)]
pub enum Number {
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit signed integer
    Long(i64),
    /// 64-bit float
    Double(f64),
    /// Arbitrary-precision integer
    BigInteger(BigInt),
    /// Arbitrary-precision decimal
    BigDecimal(BigDecimal),
}

impl Number {
    /// Returns true for integer variants.
    pub fn is_integral(&self) -> bool {
        matches!(self, Number::Int(_) | Number::Long(_) | Number::BigInteger(_))
    }

    /// Returns true for the arbitrary-precision variants.
    pub fn is_big(&self) -> bool {
        matches!(self, Number::BigInteger(_) | Number::BigDecimal(_))
    }

    /// Integer value if it fits in an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        use num_traits::ToPrimitive;

        match self {
            Number::Int(v) => Some(i64::from(*v)),
            Number::Long(v) => Some(*v),
            Number::BigInteger(v) => v.to_i64(),
            Number::Double(_) | Number::BigDecimal(_) => None,
        }
    }

    /// Nearest `f64`, if one exists.
    pub fn to_f64(&self) -> Option<f64> {
        use num_traits::ToPrimitive;

        match self {
            Number::Int(v) => Some(f64::from(*v)),
            Number::Long(v) => Some(*v as f64),
            Number::Double(v) => Some(*v),
            Number::BigInteger(v) => v.to_f64(),
            Number::BigDecimal(v) => v.to_f64(),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Long(a), Number::Long(b)) => a == b,
            (Number::Double(a), Number::Double(b)) => a.to_bits() == b.to_bits(),
            (Number::BigInteger(a), Number::BigInteger(b)) => a == b,
            (Number::BigDecimal(a), Number::BigDecimal(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Number::Int(v) => v.hash(state),
            Number::Long(v) => v.hash(state),
            Number::Double(v) => v.to_bits().hash(state),
            Number::BigInteger(v) => v.hash(state),
            Number::BigDecimal(v) => v.hash(state),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Long(v) => write!(f, "{}", v),
            Number::Double(v) => write!(f, "{}", v),
            Number::BigInteger(v) => write!(f, "{}", v),
            Number::BigDecimal(v) => write!(f, "{}", v),
        }
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Long(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Double(v)
    }
}

/// A numeric literal: its source spelling plus its materialized value.
#[derive(Clone, Debug)]
pub struct NumberToken {
    raw: Box<str>,
    value: Number,
}

impl NumberToken {
    /// Create a number token
    pub fn new(raw: impl Into<Box<str>>, value: Number) -> Self {
        Self {
            raw: raw.into(),
            value,
        }
    }

    /// Literal text as written
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Materialized value
    pub fn value(&self) -> &Number {
        &self.value
    }
}

impl PartialEq for NumberToken {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for NumberToken {}

impl Hash for NumberToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Quote character that opened a string literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quote {
    /// `'...'`
    Single,
    /// `"..."`
    Double,
    /// `` `...` ``
    Backtick,
}

impl Quote {
    /// Map a quote character to its style.
    pub const fn from_char(c: char) -> Option<Quote> {
        match c {
            '\'' => Some(Quote::Single),
            '"' => Some(Quote::Double),
            '`' => Some(Quote::Backtick),
            _ => None,
        }
    }

    /// The quote character.
    pub const fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
            Quote::Backtick => '`',
        }
    }
}

/// How a string literal is delimited.
///
/// The scanner only produces [`StringShape::Quoted`]; the other shapes are
/// built by hosts that layer templated strings on top of the lexer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StringShape {
    /// `'abc'`, `"abc"` or `` `abc` ``
    Quoted(Quote),
    /// A prefix before a delimiter pair, e.g. `f'$a ${b}'`
    Prefixed {
        /// Text before the opening delimiter
        prefix: Box<str>,
        /// Opening delimiter
        open: char,
        /// Closing delimiter
        close: char,
    },
    /// A one- or two-part separator, e.g. `${ ... }`
    Separated {
        /// Opening separator
        open: Box<str>,
        /// Closing separator
        close: Box<str>,
    },
}

/// A string literal. Strings are never interned.
#[derive(Clone, Debug)]
pub struct StringToken {
    raw: Box<str>,
    value: String,
    shape: StringShape,
}

impl StringToken {
    /// A quoted literal; `raw` includes the quotes.
    pub fn quoted(raw: impl Into<Box<str>>, value: String, quote: Quote) -> Self {
        Self {
            raw: raw.into(),
            value,
            shape: StringShape::Quoted(quote),
        }
    }

    /// A prefixed literal such as `f'...'`.
    ///
    /// # Example
    ///
    /// ```
    /// use round_lex::StringToken;
    ///
    /// let token = StringToken::prefixed("a ${b}", "f", '\'', '\'');
    /// assert_eq!(token.raw(), "f'a ${b}'");
    /// assert!(token.is_prefixed());
    /// assert!(token.is_single());
    /// ```
    pub fn prefixed(content: &str, prefix: &str, open: char, close: char) -> Self {
        Self {
            raw: format!("{}{}{}{}", prefix, open, content, close).into(),
            value: crate::unicode::unescape(content),
            shape: StringShape::Prefixed {
                prefix: prefix.into(),
                open,
                close,
            },
        }
    }

    /// A literal bounded by two separators, such as `${ ... }`.
    pub fn separated(content: &str, open: &str, close: &str) -> Self {
        Self {
            raw: format!("{}{}{}", open, content, close).into(),
            value: crate::unicode::unescape(content),
            shape: StringShape::Separated {
                open: open.into(),
                close: close.into(),
            },
        }
    }

    /// Source text including delimiters
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Unescaped content
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Delimiter shape
    pub fn shape(&self) -> &StringShape {
        &self.shape
    }

    fn opening_char(&self) -> Option<char> {
        match &self.shape {
            StringShape::Quoted(quote) => Some(quote.as_char()),
            StringShape::Prefixed { open, .. } => Some(*open),
            StringShape::Separated { .. } => None,
        }
    }

    /// Opened with `'`
    pub fn is_single(&self) -> bool {
        self.opening_char() == Some('\'')
    }

    /// Opened with `"`
    pub fn is_double(&self) -> bool {
        self.opening_char() == Some('"')
    }

    /// Opened with `` ` ``
    pub fn is_backtick(&self) -> bool {
        self.opening_char() == Some('`')
    }

    /// Has a prefix before its opening delimiter
    pub fn is_prefixed(&self) -> bool {
        matches!(self.shape, StringShape::Prefixed { .. })
    }

    /// Bounded by a separator pair
    pub fn is_separated(&self) -> bool {
        matches!(self.shape, StringShape::Separated { .. })
    }
}

impl PartialEq for StringToken {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for StringToken {}

impl Hash for StringToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Value bound to a configured constant spelling.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstantValue {
    /// `null`, `nil` and friends
    Null,
    /// `true` / `false`
    Bool(bool),
    /// A numeric constant such as `PI`
    Number(Number),
    /// A textual constant
    Text(String),
}

impl From<bool> for ConstantValue {
    fn from(v: bool) -> Self {
        ConstantValue::Bool(v)
    }
}

impl From<Number> for ConstantValue {
    fn from(v: Number) -> Self {
        ConstantValue::Number(v)
    }
}

impl From<&str> for ConstantValue {
    fn from(v: &str) -> Self {
        ConstantValue::Text(v.to_string())
    }
}

impl From<String> for ConstantValue {
    fn from(v: String) -> Self {
        ConstantValue::Text(v)
    }
}

/// An identifier spelling that lexes as a value, e.g. `true`.
#[derive(Clone, Debug)]
pub struct ConstantToken {
    name: Box<str>,
    value: ConstantValue,
}

impl ConstantToken {
    /// Create a constant token
    pub fn new(name: impl Into<Box<str>>, value: ConstantValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Spelling in the source
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bound value
    pub fn value(&self) -> &ConstantValue {
        &self.value
    }
}

impl PartialEq for ConstantToken {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for ConstantToken {}

impl Hash for ConstantToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_equality_is_variant_strict() {
        assert_eq!(Number::Int(1), Number::Int(1));
        assert_ne!(Number::Int(1), Number::Long(1));
        assert_eq!(Number::Double(0.5), Number::Double(0.5));
        assert_ne!(Number::Double(0.0), Number::Double(-0.0));
    }

    #[test]
    fn test_number_nan_equals_itself() {
        let nan = Number::Double(f64::NAN);
        assert_eq!(nan, nan.clone());
    }

    #[test]
    fn test_number_token_compares_by_value() {
        let a = NumberToken::new("1e3", Number::Double(1000.0));
        let b = NumberToken::new("1000.0", Number::Double(1000.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_number_conversions() {
        assert_eq!(Number::Int(7).as_i64(), Some(7));
        assert_eq!(Number::Double(1.5).as_i64(), None);
        assert_eq!(Number::BigInteger(BigInt::from(3)).to_f64(), Some(3.0));
        assert!(Number::BigInteger(BigInt::from(3)).is_big());
        assert!(Number::Long(3).is_integral());
    }

    #[test]
    fn test_string_shapes() {
        let single = StringToken::quoted("'a'", "a".to_string(), Quote::Single);
        assert!(single.is_single());
        assert!(!single.is_prefixed());

        let sep = StringToken::separated("x", "${", "}");
        assert_eq!(sep.raw(), "${x}");
        assert!(sep.is_separated());
        assert!(!sep.is_double());
    }

    #[test]
    fn test_string_equality_ignores_quote() {
        let a = StringToken::quoted("'a'", "a".to_string(), Quote::Single);
        let b = StringToken::quoted("\"a\"", "a".to_string(), Quote::Double);
        assert_eq!(a, b);
    }

    #[test]
    fn test_prefixed_unescapes() {
        let token = StringToken::prefixed("a\\tb", "f", '"', '"');
        assert_eq!(token.value(), "a\tb");
    }

    #[test]
    fn test_constant_compares_by_value() {
        let t = ConstantToken::new("true", ConstantValue::Bool(true));
        let yes = ConstantToken::new("yes", ConstantValue::Bool(true));
        assert_eq!(t, yes);
        assert_eq!(t.name(), "true");
    }
}
