//! Operator lexing.
//!
//! Dispatch is on the first character, then on up to two more; the longest
//! operator always wins (`...` over `..` over `.`, `>>>` over `>>` over
//! `>`).

use super::core::Scanner;
use crate::token::Operator;

impl Scanner<'_> {
    /// Lexes an operator, or returns `None` without consuming anything.
    pub(super) fn lex_operator(&mut self) -> Option<Operator> {
        let op = match self.cursor.current_char() {
            '=' => self.either('=', Operator::Eq, Operator::Assign),
            '!' => self.either('=', Operator::Ne, Operator::Not),
            '|' => self.either('|', Operator::Or, Operator::BitOr),
            '&' => self.either('&', Operator::And, Operator::BitAnd),
            '*' => self.either('*', Operator::Pow, Operator::Mul),
            '-' => self.either('>', Operator::Arrow, Operator::Sub),
            '+' => self.single(Operator::Add),
            '/' => self.single(Operator::Div),
            '%' => self.single(Operator::Rem),
            '^' => self.single(Operator::BitXor),
            '~' => self.single(Operator::BitNot),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '.' => self.lex_dots(),
            _ => return None,
        };
        Some(op)
    }

    fn single(&mut self, op: Operator) -> Operator {
        self.cursor.advance();
        op
    }

    /// Lexes `c` or `c second`.
    fn either(&mut self, second: char, double: Operator, single: Operator) -> Operator {
        self.cursor.advance();
        if self.cursor.match_char(second) {
            double
        } else {
            single
        }
    }

    /// Handles: `<`, `<=`, `<<`
    fn lex_less(&mut self) -> Operator {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Operator::Le
        } else if self.cursor.match_char('<') {
            Operator::Shl
        } else {
            Operator::Lt
        }
    }

    /// Handles: `>`, `>=`, `>>`, `>>>`
    fn lex_greater(&mut self) -> Operator {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Operator::Ge
        } else if self.cursor.match_char('>') {
            if self.cursor.match_char('>') {
                Operator::UShr
            } else {
                Operator::Shr
            }
        } else {
            Operator::Gt
        }
    }

    /// Handles: `.`, `..`, `...`
    fn lex_dots(&mut self) -> Operator {
        self.cursor.advance();
        if self.cursor.match_char('.') {
            if self.cursor.match_char('.') {
                Operator::TripleDot
            } else {
                Operator::DoubleDot
            }
        } else {
            Operator::Dot
        }
    }
}
