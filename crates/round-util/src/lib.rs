//! round-util - Foundation types for the round expression toolchain
//!
//! This crate holds the small pieces shared by the lexer and anything that
//! consumes its output:
//!
//! - [`span`] - byte spans and 1-based line/column arithmetic
//! - [`intern`] - a concurrent intern table used for token caches
//!
//! # Example
//!
//! ```
//! use round_util::span::{LineCol, Span};
//!
//! let source = "a +\n  b";
//! let span = Span::new(6, 7);
//! let start = LineCol::ORIGIN.advance(&source[..span.start]);
//! assert_eq!(start, LineCol::new(2, 3));
//! ```

#![warn(missing_docs)]

pub mod intern;
pub mod span;

pub use intern::{InternTable, InternerStats};
pub use span::{LineCol, Span};
