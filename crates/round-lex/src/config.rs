//! Lexer configuration.
//!
//! A [`LexConfig`] is built with chained setters and then handed to a
//! [`Lexer`](crate::Lexer), which wraps it in an `Arc`. From then on it is
//! read-only: every stream the lexer produces sees the same configuration.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use round_util::LineCol;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::diagnostic;
use crate::error::{LexError, LexFailure, SyntaxError, SyntaxFailure};
use crate::spans::{SpanScanner, StandardSpans};
use crate::token::{ConstantToken, ConstantValue, IdentifierToken, Number};

/// Builds a [`LexError`] from failure data.
pub type LexErrorProducer = Arc<dyn Fn(&LexConfig, LexFailure) -> LexError + Send + Sync>;

/// Builds a [`SyntaxError`] from failure data.
pub type SyntaxErrorProducer =
    Arc<dyn Fn(&LexConfig, SyntaxFailure) -> SyntaxError + Send + Sync>;

/// Default sample width for syntax error snippets.
pub const DEFAULT_SAMPLE_WIDTH: usize = 256;

/// When numeric literals materialize as arbitrary-precision values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BigNumberStrategy {
    /// Machine types only: `i32`, then `i64`, then `f64`
    #[default]
    None,
    /// Always `BigInteger` / `BigDecimal`
    Always,
    /// Arbitrary precision only when the value does not fit a machine type
    Range,
}

impl BigNumberStrategy {
    /// Materialize `literal` per this strategy.
    ///
    /// Returns `None` if the literal does not parse.
    ///
    /// # Example
    ///
    /// ```
    /// use round_lex::{BigNumberStrategy, Number};
    ///
    /// let n = BigNumberStrategy::Range.materialize("2147483648", false);
    /// assert_eq!(n, Some(Number::Long(2147483648)));
    ///
    /// let n = BigNumberStrategy::None.materialize("7", false);
    /// assert_eq!(n, Some(Number::Int(7)));
    /// ```
    pub fn materialize(self, literal: &str, floating: bool) -> Option<Number> {
        match (self, floating) {
            (BigNumberStrategy::None, true) => literal.parse().ok().map(Number::Double),
            (BigNumberStrategy::None, false) => literal
                .parse()
                .map(Number::Int)
                .or_else(|_| literal.parse().map(Number::Long))
                .or_else(|_| literal.parse().map(Number::Double))
                .ok(),
            (BigNumberStrategy::Always, true) => {
                BigDecimal::from_str(literal).ok().map(Number::BigDecimal)
            },
            (BigNumberStrategy::Always, false) => {
                BigInt::from_str(literal).ok().map(Number::BigInteger)
            },
            (BigNumberStrategy::Range, true) => {
                let big = BigDecimal::from_str(literal).ok()?;
                Some(match big.to_f64() {
                    Some(v) if v.is_finite() => Number::Double(v),
                    _ => Number::BigDecimal(big),
                })
            },
            (BigNumberStrategy::Range, false) => {
                let big = BigInt::from_str(literal).ok()?;
                Some(if let Some(v) = big.to_i32() {
                    Number::Int(v)
                } else if let Some(v) = big.to_i64() {
                    Number::Long(v)
                } else {
                    Number::BigInteger(big)
                })
            },
        }
    }
}

/// How a stream produces its tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Production {
    /// Scan the whole input before returning the stream
    #[default]
    Eager,
    /// Scan one token at a time as the stream is advanced
    Lazy,
}

/// Configuration shared by every stream a lexer produces.
///
/// # Example
///
/// ```
/// use round_lex::{BigNumberStrategy, LexConfig, Production};
///
/// let config = LexConfig::new()
///     .with_keywords(["if", "else"])
///     .with_constant("true", true)
///     .with_line_comment("#")
///     .big_number_strategy(BigNumberStrategy::Range)
///     .name("formula")
///     .production(Production::Lazy);
///
/// assert!(config.keyword("if").is_some());
/// assert_eq!(config.line_comments(), ["//", "#"]);
/// ```
#[derive(Clone)]
pub struct LexConfig {
    keywords: FxHashMap<Box<str>, Arc<IdentifierToken>>,
    constants: FxHashMap<Box<str>, Arc<ConstantToken>>,
    line_comments: Vec<String>,
    block_comments: Vec<(String, String)>,
    strategy: BigNumberStrategy,
    name: String,
    sample_width: usize,
    production: Production,
    track_positions: bool,
    origin: LineCol,
    spans: Arc<dyn SpanScanner>,
    lex_error_producer: LexErrorProducer,
    syntax_error_producer: SyntaxErrorProducer,
}

impl LexConfig {
    /// Default configuration: `//` and `/* */` comments, no keywords.
    pub fn new() -> Self {
        Self {
            keywords: FxHashMap::default(),
            constants: FxHashMap::default(),
            line_comments: vec!["//".to_string()],
            block_comments: vec![("/*".to_string(), "*/".to_string())],
            strategy: BigNumberStrategy::None,
            name: "expression".to_string(),
            sample_width: DEFAULT_SAMPLE_WIDTH,
            production: Production::Eager,
            track_positions: true,
            origin: LineCol::ORIGIN,
            spans: Arc::new(StandardSpans),
            lex_error_producer: Arc::new(diagnostic::default_lex_error),
            syntax_error_producer: Arc::new(diagnostic::default_syntax_error),
        }
    }

    /// Reserve `word`; it lexes as a keyword identifier from now on.
    pub fn with_keyword(mut self, word: &str) -> Self {
        self.keywords
            .insert(word.into(), Arc::new(IdentifierToken::keyword(word)));
        self
    }

    /// Reserve several words.
    pub fn with_keywords<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .fold(self, |config, word| config.with_keyword(word.as_ref()))
    }

    /// Bind `name` to a constant value, e.g. `true` or `null`.
    pub fn with_constant(mut self, name: &str, value: impl Into<ConstantValue>) -> Self {
        self.constants
            .insert(name.into(), Arc::new(ConstantToken::new(name, value.into())));
        self
    }

    /// Add a single-line comment marker. Markers are tried in the order
    /// they were added; empty markers are ignored.
    pub fn with_line_comment(mut self, marker: &str) -> Self {
        if marker.is_empty() {
            tracing::warn!("ignoring empty line comment marker");
        } else {
            self.line_comments.push(marker.to_string());
        }
        self
    }

    /// Replace the single-line comment markers.
    pub fn with_line_comments<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.line_comments.clear();
        markers
            .into_iter()
            .fold(self, |config, marker| config.with_line_comment(marker.as_ref()))
    }

    /// Add a multi-line comment delimiter pair. Pairs with an empty side
    /// are ignored.
    pub fn with_block_comment(mut self, open: &str, close: &str) -> Self {
        if open.is_empty() || close.is_empty() {
            tracing::warn!(open, close, "ignoring block comment with an empty delimiter");
        } else {
            self.block_comments
                .push((open.to_string(), close.to_string()));
        }
        self
    }

    /// Replace the multi-line comment delimiter pairs.
    pub fn with_block_comments<I, S>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        self.block_comments.clear();
        pairs.into_iter().fold(self, |config, (open, close)| {
            config.with_block_comment(open.as_ref(), close.as_ref())
        })
    }

    /// Set the numeric materialization strategy.
    pub fn big_number_strategy(mut self, strategy: BigNumberStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the subject name used in diagnostics, e.g. `"expression"`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the context snippet width for syntax errors; 0 disables it.
    pub fn sample_width(mut self, width: usize) -> Self {
        self.sample_width = width;
        self
    }

    /// Choose eager or lazy production.
    pub fn production(mut self, production: Production) -> Self {
        self.production = production;
        self
    }

    /// Compute line/column for every token.
    pub fn track_positions(mut self, enabled: bool) -> Self {
        self.track_positions = enabled;
        self
    }

    /// Coordinate of the first character of every source.
    pub fn origin(mut self, origin: LineCol) -> Self {
        self.origin = origin;
        self
    }

    /// Plug in literal span detection.
    pub fn spans(mut self, spans: impl SpanScanner + 'static) -> Self {
        self.spans = Arc::new(spans);
        self
    }

    /// Replace the lex error producer.
    pub fn lex_error_producer<F>(mut self, producer: F) -> Self
    where
        F: Fn(&LexConfig, LexFailure) -> LexError + Send + Sync + 'static,
    {
        self.lex_error_producer = Arc::new(producer);
        self
    }

    /// Replace the syntax error producer.
    pub fn syntax_error_producer<F>(mut self, producer: F) -> Self
    where
        F: Fn(&LexConfig, SyntaxFailure) -> SyntaxError + Send + Sync + 'static,
    {
        self.syntax_error_producer = Arc::new(producer);
        self
    }

    // ---- accessors ----

    /// Keyword token for `word`, if reserved
    pub fn keyword(&self, word: &str) -> Option<&Arc<IdentifierToken>> {
        self.keywords.get(word)
    }

    /// Constant token for `name`, if bound
    pub fn constant(&self, name: &str) -> Option<&Arc<ConstantToken>> {
        self.constants.get(name)
    }

    /// Reserved words, unordered
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.keys().map(|k| &**k)
    }

    /// Constant tokens, unordered
    pub fn constants(&self) -> impl Iterator<Item = &Arc<ConstantToken>> {
        self.constants.values()
    }

    /// Single-line comment markers in match order
    pub fn line_comments(&self) -> &[String] {
        &self.line_comments
    }

    /// Multi-line comment pairs in match order
    pub fn block_comments(&self) -> &[(String, String)] {
        &self.block_comments
    }

    /// Numeric materialization strategy
    pub fn strategy(&self) -> BigNumberStrategy {
        self.strategy
    }

    /// Subject name used in diagnostics
    pub fn subject(&self) -> &str {
        &self.name
    }

    /// Context snippet width
    pub fn width(&self) -> usize {
        self.sample_width
    }

    /// Production strategy
    pub fn production_mode(&self) -> Production {
        self.production
    }

    /// Whether tokens carry line/column
    pub fn tracks_positions(&self) -> bool {
        self.track_positions
    }

    /// Coordinate of the first character
    pub fn start_position(&self) -> LineCol {
        self.origin
    }

    /// Literal span detection
    pub fn span_scanner(&self) -> &dyn SpanScanner {
        &*self.spans
    }

    pub(crate) fn produce_lex_error(&self, failure: LexFailure) -> LexError {
        (self.lex_error_producer)(self, failure)
    }

    pub(crate) fn produce_syntax_error(&self, failure: SyntaxFailure) -> SyntaxError {
        (self.syntax_error_producer)(self, failure)
    }
}

impl Default for LexConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LexConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keywords: Vec<&str> = self.keywords().collect();
        keywords.sort_unstable();
        let mut constants: Vec<&str> = self.constants.keys().map(|k| &**k).collect();
        constants.sort_unstable();

        f.debug_struct("LexConfig")
            .field("keywords", &keywords)
            .field("constants", &constants)
            .field("line_comments", &self.line_comments)
            .field("block_comments", &self.block_comments)
            .field("strategy", &self.strategy)
            .field("name", &self.name)
            .field("sample_width", &self.sample_width)
            .field("production", &self.production)
            .field("track_positions", &self.track_positions)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
