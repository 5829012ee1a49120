//! Token kinds produced by the lexer and consumed by the parser.

use std::fmt;

use crate::Span;

/// The kind of one lexical token in a pattern string.
///
/// `Identifier` and `Invalid` carry their lexeme inline since the parser
/// needs the text (an identifier name, or the offending run to report)
/// and re-slicing the source on every access is not worth avoiding for
/// strings this short.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `[A-Za-z_][A-Za-z_0-9]*(-[A-Za-z_0-9]+)*`
    Identifier(String),
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `:`
    Colon,
    /// `?`
    Question,
    /// `*`
    Asterisk,
    /// `|`
    Pipe,
    /// `,`
    Comma,
    /// `--name` (long option prefix, identifier attached)
    DoubleDash(String),
    /// `-x` (short option prefix, identifier attached)
    SingleDash(String),
    /// A standalone `--`, surrounded by whitespace or input boundaries.
    EndOfOptions,
    /// A malformed run: consecutive/trailing dashes, or a bare `<...>`.
    Invalid(String),
    /// Terminates every token stream, unconditionally.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(s) => write!(f, "identifier `{s}`"),
            TokenKind::LeftBrace => write!(f, "`{{`"),
            TokenKind::RightBrace => write!(f, "`}}`"),
            TokenKind::Colon => write!(f, "`:`"),
            TokenKind::Question => write!(f, "`?`"),
            TokenKind::Asterisk => write!(f, "`*`"),
            TokenKind::Pipe => write!(f, "`|`"),
            TokenKind::Comma => write!(f, "`,`"),
            TokenKind::DoubleDash(s) => write!(f, "`--{s}`"),
            TokenKind::SingleDash(s) => write!(f, "`-{s}`"),
            TokenKind::EndOfOptions => write!(f, "`--`"),
            TokenKind::Invalid(s) => write!(f, "invalid token `{s}`"),
            TokenKind::EndOfInput => write!(f, "end of pattern"),
        }
    }
}

/// One lexical token: its kind plus the span of source text it came from.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_identifier() {
        let kind = TokenKind::Identifier("dry-run".to_string());
        assert_eq!(kind.to_string(), "identifier `dry-run`");
    }

    #[test]
    fn display_renders_end_of_options() {
        assert_eq!(TokenKind::EndOfOptions.to_string(), "`--`");
    }
}
