//! Core lexer implementation.
//!
//! [`Lexer`] owns the configuration and the interning caches; [`Scanner`]
//! turns the text at one offset into exactly one token.

use round_util::{InternTable, InternerStats, Span};
use std::sync::Arc;

use crate::config::{BigNumberStrategy, LexConfig, Production};
use crate::cursor::Cursor;
use crate::diagnostic;
use crate::error::{LexError, LexErrorKind};
use crate::stream::TokenStream;
use crate::token::{IdentifierToken, NumberToken, Punctuation, Quote, Token};

/// Per-lexer caches of identifier and number tokens.
#[derive(Debug, Default)]
pub(crate) struct Interner {
    pub(crate) identifiers: InternTable<Arc<IdentifierToken>>,
    pub(crate) numbers: NumberTables,
}

/// Number literal caches, one per big-number strategy.
///
/// A literal materializes differently under each strategy, so streams on
/// different strategies never see each other's entries.
#[derive(Debug, Default)]
pub(crate) struct NumberTables {
    none: InternTable<Arc<NumberToken>>,
    always: InternTable<Arc<NumberToken>>,
    range: InternTable<Arc<NumberToken>>,
}

impl NumberTables {
    pub(crate) fn table(&self, strategy: BigNumberStrategy) -> &InternTable<Arc<NumberToken>> {
        match strategy {
            BigNumberStrategy::None => &self.none,
            BigNumberStrategy::Always => &self.always,
            BigNumberStrategy::Range => &self.range,
        }
    }

    fn clear(&self) {
        self.none.clear();
        self.always.clear();
        self.range.clear();
    }

    fn stats(&self) -> InternerStats {
        self.none
            .stats()
            .merge(self.always.stats())
            .merge(self.range.stats())
    }
}

/// Cache statistics for a [`Lexer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerStats {
    /// Identifier cache
    pub identifiers: InternerStats,
    /// Number literal caches, summed over strategies
    pub numbers: InternerStats,
}

/// Turns source text into token streams.
///
/// A lexer is cheap to clone; clones share the configuration and the
/// caches. Tokenizing the same spelling twice through one lexer (or its
/// clones) yields the same `Arc`, even from different threads.
///
/// # Example
///
/// ```
/// use round_lex::{Lexer, Operator};
///
/// let lexer = Lexer::default();
/// let mut stream = lexer.lex("x + 1").unwrap();
///
/// assert!(stream.next().unwrap().is_identifier());
/// assert_eq!(stream.next().unwrap().operator(), Some(Operator::Add));
/// assert!(stream.next().unwrap().is_number());
/// assert!(!stream.has_next().unwrap());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Lexer {
    config: Arc<LexConfig>,
    interner: Arc<Interner>,
}

impl Lexer {
    /// Creates a lexer with empty caches.
    pub fn new(config: LexConfig) -> Self {
        Self {
            config: Arc::new(config),
            interner: Arc::default(),
        }
    }

    /// The configuration new streams are produced with.
    pub fn config(&self) -> &LexConfig {
        &self.config
    }

    /// Replace the configuration for streams produced from now on.
    ///
    /// Existing streams keep the configuration they were created with.
    /// Caches are kept: keywords and constants are checked before the
    /// identifier cache, and number literals are cached per strategy.
    pub fn set_config(&mut self, config: LexConfig) {
        self.config = Arc::new(config);
    }

    /// Tokenize `source`.
    ///
    /// An eager lexer scans the whole input here and fails with the first
    /// lex error. A lazy lexer returns immediately; lex errors surface from
    /// [`TokenStream::has_next`] and [`TokenStream::next`] instead.
    pub fn lex(&self, source: impl Into<Arc<str>>) -> Result<TokenStream, LexError> {
        let source = source.into();
        let state = ScanState::new(Arc::clone(&self.config), Arc::clone(&self.interner));
        let mut stream = TokenStream::new(Arc::clone(&source), Arc::clone(&self.config), state);

        match self.config.production_mode() {
            Production::Eager => {
                stream.fill()?;
                tracing::debug!(
                    source_len = source.len(),
                    tokens = stream.len(),
                    "eager stream complete"
                );
            },
            Production::Lazy => {
                tracing::debug!(source_len = source.len(), "lazy stream created");
            },
        }
        Ok(stream)
    }

    /// Empty the identifier and number caches.
    pub fn clear(&self) {
        self.interner.identifiers.clear();
        self.interner.numbers.clear();
    }

    /// Cache statistics.
    pub fn stats(&self) -> LexerStats {
        LexerStats {
            identifiers: self.interner.identifiers.stats(),
            numbers: self.interner.numbers.stats(),
        }
    }
}

/// Where a stream's scanner resumes.
#[derive(Clone, Debug)]
pub(crate) struct ScanState {
    config: Arc<LexConfig>,
    interner: Arc<Interner>,
    offset: usize,
}

impl ScanState {
    pub(crate) fn new(config: Arc<LexConfig>, interner: Arc<Interner>) -> Self {
        Self {
            config,
            interner,
            offset: 0,
        }
    }

    /// Scan the next token, or `None` at the end of `text`.
    ///
    /// The resume offset only moves when a token is produced, so a failed
    /// scan fails again at the same offset.
    pub(crate) fn scan_next(
        &mut self,
        text: &Arc<str>,
    ) -> Result<Option<(Token, Span)>, LexError> {
        let mut scanner = Scanner::new(text, self.offset, &self.config, &self.interner);
        let scanned = scanner.next_token()?;
        self.offset = scanner.cursor.position();
        Ok(scanned)
    }
}

/// Scans single tokens out of one source text.
pub(super) struct Scanner<'a> {
    /// Character cursor over the source
    pub(super) cursor: Cursor<'a>,

    pub(super) config: &'a LexConfig,
    pub(super) interner: &'a Interner,
    pub(super) text: &'a Arc<str>,

    /// Byte offset where the current token starts
    pub(super) token_start: usize,
}

impl<'a> Scanner<'a> {
    pub(super) fn new(
        text: &'a Arc<str>,
        offset: usize,
        config: &'a LexConfig,
        interner: &'a Interner,
    ) -> Self {
        Self {
            cursor: Cursor::new_at(text, offset),
            config,
            interner,
            text,
            token_start: offset,
        }
    }

    /// Skip whitespace and return the next token with its span, or `None`
    /// at the end of the input.
    ///
    /// Rules are tried in a fixed order and the first match wins.
    pub(super) fn next_token(&mut self) -> Result<Option<(Token, Span)>, LexError> {
        self.skip_whitespace();
        self.token_start = self.cursor.position();
        if self.cursor.is_at_end() {
            return Ok(None);
        }

        let token = self.scan_token()?;
        Ok(Some((token, Span::new(self.token_start, self.cursor.position()))))
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        if let Some(token) = self.lex_line_comment() {
            return Ok(token);
        }
        if let Some(token) = self.lex_block_comment()? {
            return Ok(token);
        }

        let config = self.config;
        let spans = config.span_scanner();
        let c = self.cursor.current_char();
        if spans.is_identifier_start(c) {
            return Ok(self.lex_identifier());
        }
        if spans.is_digit_start(c) {
            return self.lex_number();
        }
        if let Some(quote) = Quote::from_char(c) {
            return self.lex_string(quote);
        }
        if let Some(punctuation) = Punctuation::from_char(c) {
            self.cursor.advance();
            return Ok(Token::Punctuation(punctuation));
        }
        if let Some(operator) = self.lex_operator() {
            return Ok(Token::Operator(operator));
        }

        Err(self.error_at(self.token_start, LexErrorKind::UnexpectedCharacter(c)))
    }

    /// Build the configured lex error for `offset`.
    pub(super) fn error_at(&self, offset: usize, kind: LexErrorKind) -> LexError {
        diagnostic::lex_error_at(self.config, self.text, offset, kind)
    }
}
