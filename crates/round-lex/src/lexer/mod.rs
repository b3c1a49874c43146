//! Lexer module.
//!
//! The scanning algorithm is split into small components:
//! - `core` - `Lexer`, its interning caches, and rule dispatch
//! - `comment` - whitespace skipping and comment tokens
//! - `identifier` - identifiers, keywords and constants
//! - `number` - numeric literals
//! - `string` - quoted string literals
//! - `operator` - longest-match operator dispatch

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::{Lexer, LexerStats};

pub(crate) use core::ScanState;
