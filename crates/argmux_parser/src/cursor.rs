//! A forward-only view over a token slice, with one-token lookahead.

use argmux_ir::{Span, Token, TokenKind};

/// Walks a token stream produced by the lexer.
///
/// The final token is always `EndOfInput`, so `peek`/`peek_kind` never need
/// an `Option` — advancing past the end just keeps returning it.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::EndOfInput)),
            "token stream must end in EndOfInput"
        );
        Cursor { tokens, pos: 0 }
    }

    pub(crate) fn peek_kind(&self) -> &TokenKind {
        &self.tokens[self.pos].kind
    }

    pub(crate) fn span(&self) -> Span {
        self.tokens[self.pos].span
    }

    /// Consume and return the current token, staying put once `EndOfInput`
    /// is reached.
    pub(crate) fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }
}
