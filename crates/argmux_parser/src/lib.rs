//! Recursive-descent parser turning a pattern string into a `CompiledRoute`.
//!
//! Parsing happens once, at route registration time — it never runs on
//! `argv`. All positions in [`argmux_diagnostic::ParseError`] refer to the
//! pattern text, not to dispatch input.

mod cursor;
mod grammar;

use argmux_diagnostic::ParseError;
use argmux_route::CompiledRoute;

use cursor::Cursor;

/// Parse a pattern string into a [`CompiledRoute`].
///
/// # Errors
///
/// Returns [`ParseError::EmptyPattern`] if `pattern` is empty or
/// whitespace-only, and any other [`ParseError`] variant for a malformed
/// pattern.
pub fn parse(pattern: &str) -> Result<CompiledRoute, ParseError> {
    if pattern.trim().is_empty() {
        return Err(ParseError::EmptyPattern);
    }

    let tokens = argmux_lexer::lex(pattern);
    let mut cursor = Cursor::new(&tokens);
    grammar::parse_pattern(&mut cursor)
}
