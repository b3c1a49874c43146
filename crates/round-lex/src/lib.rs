//! round-lex - Lexical analysis for the round expression language
//!
//! This crate turns source text into a navigable stream of typed tokens for
//! a downstream parser. Streams support backtracking (`mark`/`reset`),
//! independent copies, and either eager or on-demand production.
//!
//! # Example Usage
//!
//! ```
//! use round_lex::{LexConfig, Lexer, Operator};
//!
//! let lexer = Lexer::new(LexConfig::new().with_keyword("if"));
//! let mut stream = lexer.lex("if x >= 10 // bound").unwrap();
//!
//! assert!(stream.next().unwrap().is_keyword_named("if"));
//! assert!(stream.next().unwrap().is_identifier());
//! assert_eq!(stream.next().unwrap().operator(), Some(Operator::Ge));
//! assert!(stream.next().unwrap().is_number());
//! assert!(stream.next().unwrap().is_comment());
//! assert!(!stream.has_next().unwrap());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - token model and capability queries
//! - [`lexer`] - the scanner and its interning caches
//! - [`stream`] - token streams and positioned tokens
//! - [`config`] - lexer configuration
//! - [`settings`] - TOML-backed settings
//! - [`diagnostic`] - default error messages and context snippets
//! - [`spans`] - pluggable literal span detection
//! - [`cursor`] - character cursor for source traversal
//! - [`unicode`] - character classes and escape handling
//!
//! # Scanning Rules
//!
//! At each offset the first matching rule wins:
//!
//! 1. characters at or below `' '` are skipped
//! 2. single-line comments, markers tried in configured order
//! 3. multi-line comments; an unclosed one is a lex error
//! 4. identifiers, resolved as keyword, then constant, then plain name
//! 5. numbers, materialized per [`BigNumberStrategy`]
//! 6. strings quoted with `'`, `"` or `` ` ``
//! 7. punctuation: `, ; : ( ) [ ] { } @ # $`
//! 8. operators, longest match first
//!
//! Anything else is a [`LexError`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod diagnostic;
pub mod error;
pub mod lexer;
pub mod settings;
pub mod spans;
pub mod stream;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{
    BigNumberStrategy, LexConfig, LexErrorProducer, Production, SyntaxErrorProducer,
    DEFAULT_SAMPLE_WIDTH,
};
pub use cursor::Cursor;
pub use error::{
    Error, LexError, LexErrorKind, LexFailure, Result, SettingsError, SyntaxError, SyntaxFailure,
};
pub use lexer::{Lexer, LexerStats};
pub use settings::{BlockComment, LexSettings, OriginSettings, SettingValue};
pub use spans::{SpanScanner, StandardSpans, StringLiteral};
pub use stream::{TokenInfo, TokenStream};
pub use token::{
    Associativity, CommentShape, CommentToken, ConstantToken, ConstantValue, IdentifierToken,
    Number, NumberToken, Operator, Punctuation, Quote, StringShape, StringToken, Token, TokenKind,
    ValueKind,
};

pub use round_util::{LineCol, Span};

static_assertions::assert_impl_all!(Lexer: Send, Sync, Clone);
static_assertions::assert_impl_all!(TokenStream: Send, Clone);
static_assertions::assert_impl_all!(Token: Send, Sync);
