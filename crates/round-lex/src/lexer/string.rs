//! String literal lexing.

use std::sync::Arc;

use super::core::Scanner;
use crate::error::{LexError, LexErrorKind};
use crate::token::{Quote, StringToken, Token};

impl Scanner<'_> {
    /// Lexes a string literal opened by `quote`.
    ///
    /// Escapes are resolved by the span scanner. Strings are not interned.
    pub(super) fn lex_string(&mut self, quote: Quote) -> Result<Token, LexError> {
        let config = self.config;
        let source = self.cursor.source();
        let start = self.token_start;
        let Some(literal) = config
            .span_scanner()
            .string_literal(source, start)
            .filter(|literal| literal.end > start && source.is_char_boundary(literal.end))
        else {
            return Err(self.error_at(start, LexErrorKind::UnterminatedString));
        };

        self.cursor.advance_to(literal.end);
        let raw = self.cursor.slice_from(start);
        Ok(Token::String(Arc::new(StringToken::quoted(raw, literal.value, quote))))
    }
}
