//! Error types for the lexer.
//!
//! Two kinds of diagnostics leave this crate:
//!
//! - [`LexError`] - the scanner could not classify the text at an offset.
//!   Fatal for the scan; nothing is resynchronized.
//! - [`SyntaxError`] - a [`TokenStream`] was asked to move out of bounds or
//!   a parser called [`TokenStream::wrong_syntax`].
//!
//! Both carry a rendered message built by the configured producer, see
//! [`LexConfig::lex_error_producer`](crate::LexConfig::lex_error_producer).

use std::sync::Arc;
use thiserror::Error;

use crate::stream::{TokenInfo, TokenStream};

/// What went wrong at a lex error offset.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No scanning rule accepts this character
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// A multi-line comment never closes
    #[error("unterminated comment")]
    UnterminatedComment,

    /// A string literal never closes
    #[error("unterminated string literal")]
    UnterminatedString,

    /// The number span detector rejected the literal
    #[error("malformed number literal")]
    MalformedNumber,
}

/// Everything known about a lex failure before it is rendered.
///
/// Handed to the configured lex error producer.
#[derive(Debug, Clone)]
pub struct LexFailure {
    /// Full source text
    pub text: Arc<str>,
    /// Byte offset of the failure
    pub offset: usize,
    /// 1-based line of `offset`
    pub line: u32,
    /// 1-based column of `offset`, in characters
    pub column: u32,
    /// Failure kind
    pub kind: LexErrorKind,
}

/// Error raised when the scanner cannot produce a token.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct LexError {
    text: Arc<str>,
    offset: usize,
    line: u32,
    column: u32,
    kind: LexErrorKind,
    message: String,
}

impl LexError {
    /// Build an error from failure data and a rendered message
    pub fn new(failure: LexFailure, message: impl Into<String>) -> Self {
        Self {
            text: failure.text,
            offset: failure.offset,
            line: failure.line,
            column: failure.column,
            kind: failure.kind,
            message: message.into(),
        }
    }

    /// Full source text that failed to lex
    pub fn source_text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the failure
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of the failure
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the failure
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Failure kind
    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }

    /// Rendered message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Everything known about a syntax failure before it is rendered.
///
/// Handed to the configured syntax error producer.
#[derive(Debug, Clone)]
pub struct SyntaxFailure {
    /// Token at the clamped cursor, or `None` if the stream is empty
    pub token: Option<TokenInfo>,
    /// Independent copy of the stream, positioned at `token`
    pub stream: TokenStream,
}

/// Error raised by a token stream on behalf of its parser.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct SyntaxError {
    token: Option<TokenInfo>,
    stream: Box<TokenStream>,
    message: String,
}

impl SyntaxError {
    /// Build an error from failure data and a rendered message
    pub fn new(failure: SyntaxFailure, message: impl Into<String>) -> Self {
        Self {
            token: failure.token,
            stream: Box::new(failure.stream),
            message: message.into(),
        }
    }

    /// Offending token, `None` for an empty stream
    pub fn token(&self) -> Option<&TokenInfo> {
        self.token.as_ref()
    }

    /// Copy of the stream at the time of the error
    pub fn stream(&self) -> &TokenStream {
        &self.stream
    }

    /// Rendered message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Any diagnostic raised while lexing or walking a token stream.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Scanner failure
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Stream navigation failure
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl Error {
    /// The lex error, if this is one
    pub fn as_lex(&self) -> Option<&LexError> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Syntax(_) => None,
        }
    }

    /// The syntax error, if this is one
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Error::Syntax(e) => Some(e),
            Error::Lex(_) => None,
        }
    }
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from loading or saving [`LexSettings`](crate::LexSettings).
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Reading or writing the settings file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML for this schema
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings could not be rendered as TOML
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Settings parsed but describe an unusable configuration
    #[error("Invalid settings: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(kind: LexErrorKind) -> LexFailure {
        LexFailure {
            text: Arc::from("a ? b"),
            offset: 2,
            line: 1,
            column: 3,
            kind,
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(
            LexErrorKind::UnexpectedCharacter('?').to_string(),
            "unexpected character '?'"
        );
        assert_eq!(LexErrorKind::UnterminatedComment.to_string(), "unterminated comment");
    }

    #[test]
    fn test_lex_error_display_is_message() {
        let err = LexError::new(failure(LexErrorKind::UnexpectedCharacter('?')), "bad char");
        assert_eq!(err.to_string(), "bad char");
        assert_eq!(err.offset(), 2);
        assert_eq!((err.line(), err.column()), (1, 3));
        assert_eq!(err.source_text(), "a ? b");
    }

    #[test]
    fn test_error_from_lex() {
        let err: Error = LexError::new(failure(LexErrorKind::MalformedNumber), "m").into();
        assert!(err.as_lex().is_some());
        assert!(err.as_syntax().is_none());
        assert_eq!(err.to_string(), "m");
    }

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::Invalid("empty comment marker".to_string());
        assert_eq!(err.to_string(), "Invalid settings: empty comment marker");
    }
}
