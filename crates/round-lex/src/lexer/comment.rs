//! Whitespace and comment lexing.
//!
//! Comments are tokens: a parser that does not care for them filters on
//! [`Token::is_comment`].

use std::sync::Arc;

use super::core::Scanner;
use crate::error::{LexError, LexErrorKind};
use crate::token::{CommentToken, Token};
use crate::unicode::is_skippable;

impl Scanner<'_> {
    /// Skips every character at or below `' '`.
    pub(super) fn skip_whitespace(&mut self) {
        while !self.cursor.is_at_end() && is_skippable(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }

    /// Lexes a single-line comment if one of the configured markers starts
    /// here, checking markers in configured order.
    ///
    /// The comment runs up to, not including, the next `\n`.
    pub(super) fn lex_line_comment(&mut self) -> Option<Token> {
        let config = self.config;
        let rest = self.cursor.remaining();
        let marker = config
            .line_comments()
            .iter()
            .find(|marker| rest.starts_with(marker.as_str()))?;

        self.cursor.advance_bytes(rest.find('\n').unwrap_or(rest.len()));
        let raw = self.cursor.slice_from(self.token_start);
        Some(Token::Comment(Arc::new(CommentToken::single_line(raw, marker))))
    }

    /// Lexes a multi-line comment if one of the configured open delimiters
    /// starts here.
    ///
    /// Fails at the open delimiter when the close delimiter never follows.
    pub(super) fn lex_block_comment(&mut self) -> Result<Option<Token>, LexError> {
        let config = self.config;
        let rest = self.cursor.remaining();
        let Some((open, close)) = config
            .block_comments()
            .iter()
            .find(|(open, _)| rest.starts_with(open.as_str()))
        else {
            return Ok(None);
        };

        let Some(body_len) = rest[open.len()..].find(close.as_str()) else {
            return Err(self.error_at(self.token_start, LexErrorKind::UnterminatedComment));
        };

        self.cursor.advance_bytes(open.len() + body_len + close.len());
        let raw = self.cursor.slice_from(self.token_start);
        Ok(Some(Token::Comment(Arc::new(CommentToken::multi_line(raw, open, close)))))
    }
}
