//! Identifier, keyword and constant lexing.

use std::sync::Arc;

use super::core::Scanner;
use crate::token::{IdentifierToken, Token};

impl Scanner<'_> {
    /// Lexes an identifier.
    ///
    /// The span scanner decides where the word ends. The spelling is then
    /// looked up as a keyword, then as a constant, and only then interned
    /// as a plain identifier.
    pub(super) fn lex_identifier(&mut self) -> Token {
        let config = self.config;
        let source = self.cursor.source();
        let end = config.span_scanner().identifier_end(source, self.token_start);
        if end > self.token_start && source.is_char_boundary(end) {
            self.cursor.advance_to(end);
        } else {
            self.cursor.advance();
        }

        let name = self.cursor.slice_from(self.token_start);
        if let Some(keyword) = config.keyword(name) {
            return Token::Identifier(Arc::clone(keyword));
        }
        if let Some(constant) = config.constant(name) {
            return Token::Constant(Arc::clone(constant));
        }
        Token::Identifier(
            self.interner
                .identifiers
                .get_or_insert_with(name, || Arc::new(IdentifierToken::new(name))),
        )
    }
}
