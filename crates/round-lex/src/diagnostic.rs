//! Diagnostic rendering.
//!
//! The default producers installed by [`LexConfig::new`] live here, along
//! with the context-window extraction they use. Custom producers can call
//! [`context_window`] to get the same snippet.

use round_util::LineCol;
use std::sync::Arc;

use crate::config::LexConfig;
use crate::error::{LexError, LexErrorKind, LexFailure, SyntaxError, SyntaxFailure};
use crate::stream::{TokenInfo, TokenStream};

/// Collect the failure data for `offset` and hand it to the configured
/// lex error producer.
///
/// Line and column are those of the character at `offset`, counted from
/// the configured origin.
pub(crate) fn lex_error_at(
    config: &LexConfig,
    text: &Arc<str>,
    offset: usize,
    kind: LexErrorKind,
) -> LexError {
    let at = LineCol::locate(text, offset, config.start_position());
    tracing::debug!(offset, line = at.line, column = at.column, %kind, "lex error");
    config.produce_lex_error(LexFailure {
        text: Arc::clone(text),
        offset,
        line: at.line,
        column: at.column,
        kind,
    })
}

/// Default lex error producer.
///
/// Renders `"<kind> in your <name>, at line L col C"`.
pub fn default_lex_error(config: &LexConfig, failure: LexFailure) -> LexError {
    let message = format!(
        "{} in your {}, at line {} col {}",
        failure.kind,
        config.subject(),
        failure.line,
        failure.column
    );
    LexError::new(failure, message)
}

/// Default syntax error producer.
///
/// - empty stream: `"wrong syntax in your empty <name>"`
/// - positions not tracked: `"... invalid token <raw>"`
/// - sample width 0: `"... at line L col C"`
/// - otherwise: `"... at line L col C, near by: <snippet>"`
pub fn default_syntax_error(config: &LexConfig, failure: SyntaxFailure) -> SyntaxError {
    let name = config.subject();
    let message = match &failure.token {
        None => format!("wrong syntax in your empty {}", name),
        Some(info) => match info.start_position() {
            None => format!(
                "wrong syntax in your {}, invalid token {}",
                name,
                info.token().raw()
            ),
            Some(at) if config.width() == 0 => format!(
                "wrong syntax in your {}, at line {} col {}",
                name, at.line, at.column
            ),
            Some(at) => format!(
                "wrong syntax in your {}, at line {} col {}, near by: {}",
                name,
                at.line,
                at.column,
                context_window(info, &failure.stream, config.width())
            ),
        },
    };
    tracing::debug!(%message, "syntax error");
    SyntaxError::new(failure, message)
}

/// Source text around `info`, about `width` bytes wide, cut on token
/// boundaries.
///
/// `stream` must be positioned at `info`; it is not modified. If the token
/// alone is wider than `width`, its first `width` characters are returned.
/// Otherwise neighbouring tokens are added on each side while they start
/// (left) or end (right) within `(width - w) / 2` bytes of the token. A lex
/// failure while scanning ahead simply ends the walk.
///
/// # Example
///
/// ```
/// use round_lex::{diagnostic::context_window, Lexer};
///
/// let lexer = Lexer::default();
/// let mut stream = lexer.lex("a + bb * ccc - dddd").unwrap();
/// stream.next().unwrap();
/// stream.next().unwrap();
/// let info = stream.get().unwrap().clone();
/// assert_eq!(context_window(&info, &stream, 8), "+ bb *");
/// ```
pub fn context_window(info: &TokenInfo, stream: &TokenStream, width: usize) -> String {
    let source = stream.source();
    let (start, end) = (info.start(), info.end());
    let token_width = end - start;
    if token_width > width {
        return source[start..end].chars().take(width).collect();
    }

    let margin = (width - token_width) / 2;
    let (mut left, mut right) = (start, end);
    let mut walker = stream.copy();

    while walker.has_previous() {
        if walker.previous().is_err() {
            break;
        }
        match walker.peek() {
            Some(prev) if prev.start() + margin > start => left = prev.start(),
            _ => break,
        }
    }

    let mut walker = stream.copy();
    if matches!(walker.has_next(), Ok(true)) && walker.next().is_ok() {
        while let Ok(true) = walker.has_next() {
            match walker.peek() {
                Some(next) if next.end() < end + margin => right = next.end(),
                _ => break,
            }
            if walker.next().is_err() {
                break;
            }
        }
    }

    source[left..right].to_string()
}
