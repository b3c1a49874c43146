//! Token streams.
//!
//! A [`TokenStream`] is a cursor over positioned tokens with backtracking
//! support. The same type serves both production strategies:
//!
//! - eager streams are fully scanned before [`Lexer::lex`](crate::Lexer::lex)
//!   returns
//! - lazy streams scan one token whenever the cursor reaches the end of what
//!   has been produced so far
//!
//! Produced tokens are never rescanned or replaced. Line/column positions
//! are computed incrementally from the previous token's end, so the total
//! cost stays linear in the consumed input.
//!
//! # Example
//!
//! ```
//! use round_lex::{Lexer, Operator};
//!
//! let lexer = Lexer::default();
//! let mut stream = lexer.lex("a + b").unwrap();
//!
//! stream.mark();
//! stream.next().unwrap();
//! assert_eq!(stream.next().unwrap().operator(), Some(Operator::Add));
//! stream.reset();
//! assert_eq!(stream.position(), 0);
//! ```

use round_util::{LineCol, Span};
use std::fmt;
use std::sync::Arc;

use crate::config::LexConfig;
use crate::error::{Error, LexError, Result, SyntaxFailure};
use crate::lexer::ScanState;
use crate::token::Token;

/// A token with its source span and, when tracked, its coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenInfo {
    token: Token,
    span: Span,
    location: Option<(LineCol, LineCol)>,
}

impl TokenInfo {
    /// Create a positioned token
    pub fn new(token: Token, span: Span, location: Option<(LineCol, LineCol)>) -> Self {
        Self {
            token,
            span,
            location,
        }
    }

    /// The token
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// `[start, end)` byte range in the source
    pub fn span(&self) -> Span {
        self.span
    }

    /// Start byte offset
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// End byte offset (exclusive)
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Start and end coordinates; the end column is the one just past the
    /// last character. `None` when positions are not tracked.
    pub fn location(&self) -> Option<(LineCol, LineCol)> {
        self.location
    }

    /// Coordinate of the first character
    pub fn start_position(&self) -> Option<LineCol> {
        self.location.map(|(start, _)| start)
    }

    /// Coordinate just past the last character
    pub fn end_position(&self) -> Option<LineCol> {
        self.location.map(|(_, end)| end)
    }

    /// Source text of the token
    pub fn raw(&self) -> &str {
        self.token.raw()
    }
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.token, self.span)?;
        if let Some((start, end)) = self.location {
            write!(f, " ({}, {})", start, end)?;
        }
        Ok(())
    }
}

/// Cursor over the tokens of one source text.
///
/// `Clone` (and [`copy`](Self::copy)) yields an independent stream: the
/// produced tokens are copied, the cursor and mark are private to each copy,
/// and a lazy copy continues scanning on its own.
#[derive(Clone, Debug)]
pub struct TokenStream {
    source: Arc<str>,
    config: Arc<LexConfig>,
    tokens: Vec<TokenInfo>,

    /// Index of the token `next` returns
    cursor: usize,

    /// Index `reset` rewinds to
    mark: usize,

    /// Scanner state, `None` once the input is exhausted
    pending: Option<ScanState>,

    /// End offset and coordinate of the last produced token
    last_end: usize,
    last_position: LineCol,
}

impl TokenStream {
    pub(crate) fn new(source: Arc<str>, config: Arc<LexConfig>, state: ScanState) -> Self {
        let origin = config.start_position();
        Self {
            source,
            config,
            tokens: Vec::new(),
            cursor: 0,
            mark: 0,
            pending: Some(state),
            last_end: 0,
            last_position: origin,
        }
    }

    /// Scan until the input is exhausted.
    pub(crate) fn fill(&mut self) -> std::result::Result<(), LexError> {
        while self.produce()? {}
        Ok(())
    }

    /// Scan one more token. Returns false once the input is exhausted.
    fn produce(&mut self) -> std::result::Result<bool, LexError> {
        let Some(state) = self.pending.as_mut() else {
            return Ok(false);
        };
        match state.scan_next(&self.source)? {
            Some((token, span)) => {
                let location = self.locate(span);
                let info = TokenInfo::new(token, span, location);
                tracing::trace!(token = %info, "produced token");
                self.tokens.push(info);
                Ok(true)
            },
            None => {
                self.pending = None;
                Ok(false)
            },
        }
    }

    fn locate(&mut self, span: Span) -> Option<(LineCol, LineCol)> {
        if !self.config.tracks_positions() {
            return None;
        }
        let start = self
            .last_position
            .advance(&self.source[self.last_end..span.start]);
        let end = start.advance(&self.source[span.start..span.end]);
        self.last_end = span.end;
        self.last_position = end;
        Some((start, end))
    }

    /// Is there a token at the cursor?
    ///
    /// On a lazy stream whose cursor sits at the end of the produced
    /// tokens, this scans exactly one more token. Fails only if that scan
    /// raises a lex error.
    pub fn has_next(&mut self) -> Result<bool> {
        if self.cursor < self.tokens.len() {
            return Ok(true);
        }
        Ok(self.produce()?)
    }

    /// Return the token at the cursor and move past it.
    pub fn next(&mut self) -> Result<Token> {
        if !self.has_next()? {
            return self.wrong_syntax();
        }
        let token = self.tokens[self.cursor].token.clone();
        self.cursor += 1;
        Ok(token)
    }

    /// Is there a produced token before the cursor?
    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    /// Move back one token and return it. Never scans.
    pub fn previous(&mut self) -> Result<Token> {
        if !self.has_previous() {
            return self.wrong_syntax();
        }
        self.cursor -= 1;
        Ok(self.tokens[self.cursor].token.clone())
    }

    /// The token at the cursor, without moving it.
    ///
    /// Never scans: on a lazy stream call [`has_next`](Self::has_next)
    /// first. Fails when the cursor is past the produced tokens.
    pub fn get(&self) -> Result<&TokenInfo> {
        match self.tokens.get(self.cursor) {
            Some(info) => Ok(info),
            None => Err(self.syntax_error()),
        }
    }

    /// Like [`get`](Self::get), but `None` instead of an error.
    pub fn peek(&self) -> Option<&TokenInfo> {
        self.tokens.get(self.cursor)
    }

    /// Remember the cursor position.
    pub fn mark(&mut self) {
        self.mark = self.cursor;
    }

    /// Rewind to the mark and clear it; without a mark this rewinds to the
    /// first token.
    pub fn reset(&mut self) {
        self.cursor = self.mark;
        self.mark = 0;
    }

    /// An independent stream at the same position.
    pub fn copy(&self) -> TokenStream {
        self.clone()
    }

    /// Build the syntax error for the current position.
    ///
    /// The error is bound to the token at the cursor, clamped to the
    /// produced range, and carries a copy of this stream positioned there.
    pub fn syntax_error(&self) -> Error {
        let index = self.cursor.min(self.tokens.len().saturating_sub(1));
        let failure = SyntaxFailure {
            token: self.tokens.get(index).cloned(),
            stream: self.fork_at(index),
        };
        Error::Syntax(self.config.produce_syntax_error(failure))
    }

    /// Raise a syntax error at the current position; never returns `Ok`.
    ///
    /// # Example
    ///
    /// ```
    /// use round_lex::Lexer;
    ///
    /// let mut stream = Lexer::default().lex("f(").unwrap();
    /// let parsed: round_lex::Result<()> = stream.wrong_syntax();
    /// assert!(parsed.is_err());
    /// ```
    pub fn wrong_syntax<T>(&self) -> Result<T> {
        Err(self.syntax_error())
    }

    pub(crate) fn fork_at(&self, index: usize) -> TokenStream {
        let mut fork = self.clone();
        fork.cursor = index;
        fork
    }

    /// Cursor index
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of tokens produced so far
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no token has been produced yet
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns true once the whole input has been scanned
    pub fn is_exhausted(&self) -> bool {
        self.pending.is_none()
    }

    /// Tokens produced so far
    pub fn tokens(&self) -> &[TokenInfo] {
        &self.tokens
    }

    /// Full source text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Configuration the stream was produced with
    pub fn config(&self) -> &LexConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LexConfig, Lexer, Operator, Production};

    fn eager(source: &str) -> TokenStream {
        Lexer::default().lex(source).unwrap()
    }

    fn lazy(source: &str) -> TokenStream {
        Lexer::new(LexConfig::new().production(Production::Lazy))
            .lex(source)
            .unwrap()
    }

    #[test]
    fn test_eager_is_fully_scanned() {
        let stream = eager("a b c");
        assert_eq!(stream.len(), 3);
        assert!(stream.is_exhausted());
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_lazy_scans_nothing_upfront() {
        let stream = lazy("a b c");
        assert_eq!(stream.len(), 0);
        assert!(!stream.is_exhausted());
    }

    #[test]
    fn test_next_and_previous() {
        let mut stream = eager("a + b");
        assert_eq!(stream.next().unwrap().raw(), "a");
        assert_eq!(stream.next().unwrap().operator(), Some(Operator::Add));
        assert_eq!(stream.previous().unwrap().operator(), Some(Operator::Add));
        assert_eq!(stream.get().unwrap().raw(), "+");
        assert_eq!(stream.position(), 1);
    }

    #[test]
    fn test_out_of_bounds_is_syntax_error() {
        let mut stream = eager("a");
        assert!(stream.previous().unwrap_err().as_syntax().is_some());
        stream.next().unwrap();
        assert!(!stream.has_next().unwrap());
        assert!(stream.get().is_err());
        assert!(stream.next().unwrap_err().as_syntax().is_some());
    }

    #[test]
    fn test_get_before_scan_fails_on_lazy() {
        let mut stream = lazy("x");
        assert!(stream.get().is_err());
        assert!(stream.has_next().unwrap());
        assert_eq!(stream.get().unwrap().raw(), "x");
    }

    #[test]
    fn test_mark_reset() {
        let mut stream = eager("a b c d e");
        stream.next().unwrap();
        stream.mark();
        for _ in 0..3 {
            stream.next().unwrap();
        }
        stream.reset();
        assert_eq!(stream.position(), 1);
        stream.next().unwrap();
        stream.reset();
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut stream = eager("a b c d e");
        stream.next().unwrap();
        let mut fork = stream.copy();
        for _ in 0..3 {
            fork.next().unwrap();
        }
        assert_eq!(fork.position(), 4);
        assert_eq!(stream.position(), 1);
    }

    #[test]
    fn test_lazy_copy_scans_independently() {
        let mut stream = lazy("a b c");
        stream.next().unwrap();
        let mut fork = stream.copy();
        fork.next().unwrap();
        fork.next().unwrap();
        assert_eq!(fork.len(), 3);
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.next().unwrap().raw(), "b");
    }

    #[test]
    fn test_positions_are_incremental() {
        let stream = eager("ab\n  cd /* x\ny */ e");
        let locations: Vec<_> = stream.tokens().iter().map(|t| t.location().unwrap()).collect();
        assert_eq!(locations[0], (LineCol::new(1, 1), LineCol::new(1, 3)));
        assert_eq!(locations[1], (LineCol::new(2, 3), LineCol::new(2, 5)));
        assert_eq!(locations[2], (LineCol::new(2, 6), LineCol::new(3, 5)));
        assert_eq!(locations[3], (LineCol::new(3, 6), LineCol::new(3, 7)));
    }

    #[test]
    fn test_positions_match_full_rescan() {
        let source = "let x =\n\t'a\\nb' +  // c\n 42\n";
        let stream = eager(source);
        for info in stream.tokens() {
            let start = LineCol::locate(source, info.start(), LineCol::ORIGIN);
            let end = LineCol::locate(source, info.end(), LineCol::ORIGIN);
            assert_eq!(info.location(), Some((start, end)), "{}", info);
        }
    }

    #[test]
    fn test_positions_disabled() {
        let stream = Lexer::new(LexConfig::new().track_positions(false))
            .lex("a b")
            .unwrap();
        assert!(stream.tokens().iter().all(|t| t.location().is_none()));
    }

    #[test]
    fn test_display() {
        let stream = eager("  foo");
        assert_eq!(stream.tokens()[0].to_string(), "foo (2-5) (1:3, 1:6)");
    }

    #[test]
    fn test_syntax_error_binds_clamped_token() {
        let mut stream = eager("a b");
        stream.next().unwrap();
        stream.next().unwrap();
        let err = stream.syntax_error();
        let syntax = err.as_syntax().unwrap();
        assert_eq!(syntax.token().map(TokenInfo::raw), Some("b"));
        assert_eq!(syntax.stream().position(), 1);
        assert_eq!(stream.position(), 2);
    }

    #[test]
    fn test_empty_stream_syntax_error() {
        let stream = eager("");
        let err = stream.syntax_error();
        assert!(err.as_syntax().unwrap().token().is_none());
    }
}
