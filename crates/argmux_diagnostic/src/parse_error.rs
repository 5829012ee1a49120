//! Errors raised while parsing a pattern string into a `CompiledRoute`.

use argmux_ir::Span;
use thiserror::Error;

/// A parse error, positioned at the offending span of the *pattern text*
/// (never of `argv` — parsing happens once, at registration time).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The lexer produced an `Invalid` token at this position.
    #[error("invalid token `{lexeme}` at {span:?}")]
    InvalidToken { span: Span, lexeme: String },

    /// The parser expected one kind of token and found another.
    #[error("expected {expected} at {span:?}, found {found}")]
    UnexpectedToken {
        span: Span,
        expected: String,
        found: String,
    },

    /// `{*name}` appeared somewhere other than the final positional segment.
    #[error("catch-all parameter `{name}` must be the last positional segment")]
    CatchAllNotLast { span: Span, name: String },

    /// Two option matchers in the same route share a primary or alternate
    /// form.
    #[error("duplicate option `{name}`")]
    DuplicateOption { span: Span, name: String },

    /// The pattern string was empty or contained only whitespace.
    #[error("pattern must not be empty")]
    EmptyPattern,

    /// A `{` was never closed by a matching `}`.
    #[error("unterminated `{{` opened at {span:?}")]
    UnterminatedBrace { span: Span },

    /// A standalone `--` end-of-options marker appeared more than once.
    #[error("`--` end-of-options marker may appear at most once, second at {span:?}")]
    DuplicateEndOfOptions { span: Span },
}

impl ParseError {
    /// The span this error should be reported at, for callers that want to
    /// render their own diagnostics instead of using [`crate::render`].
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::InvalidToken { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::CatchAllNotLast { span, .. }
            | ParseError::DuplicateOption { span, .. }
            | ParseError::UnterminatedBrace { span }
            | ParseError::DuplicateEndOfOptions { span } => Some(*span),
            ParseError::EmptyPattern => None,
        }
    }
}
