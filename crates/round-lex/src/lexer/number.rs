//! Number literal lexing.

use std::sync::Arc;

use super::core::Scanner;
use crate::error::{LexError, LexErrorKind};
use crate::token::{NumberToken, Token};

impl Scanner<'_> {
    /// Lexes a numeric literal.
    ///
    /// The span scanner finds the end and says whether the literal is
    /// floating-point; the configured strategy materializes the value. The
    /// token is interned by literal text in the strategy's own table, so a
    /// cached literal is never parsed again.
    pub(super) fn lex_number(&mut self) -> Result<Token, LexError> {
        let config = self.config;
        let source = self.cursor.source();
        let start = self.token_start;
        let Some((end, floating)) = config
            .span_scanner()
            .number_end(source, start)
            .filter(|&(end, _)| end > start && source.is_char_boundary(end))
        else {
            return Err(self.error_at(start, LexErrorKind::MalformedNumber));
        };

        let literal = &source[start..end];
        let strategy = config.strategy();
        let table = self.interner.numbers.table(strategy);
        let token = table.try_get_or_insert_with(literal, || {
            strategy
                .materialize(literal, floating)
                .map(|value| Arc::new(NumberToken::new(literal, value)))
                .ok_or(LexErrorKind::MalformedNumber)
        });

        match token {
            Ok(token) => {
                self.cursor.advance_to(end);
                Ok(Token::Number(token))
            },
            Err(kind) => Err(self.error_at(start, kind)),
        }
    }
}
