//! Lexer for the route pattern DSL, built on `logos`.
//!
//! Produces a finite, forward-only `Vec<Token>` terminated by `EndOfInput`.
//! The lexer never aborts on malformed input: a bad run of dashes or a
//! bare `<...>` bracket sequence becomes an `Invalid` token and scanning
//! resumes immediately after it. Rejecting the pattern is the parser's
//! job, not the lexer's.

use argmux_ir::{Span, Token, TokenKind};
use logos::Logos;

/// Raw token alphabet recognized by `logos`.
///
/// Kept separate from [`TokenKind`] so that `logos`'s maximal-munch
/// matching can do the context-sensitive work (`--` alone vs. `--name`)
/// purely through regex specificity, with no hand-written lookahead.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
enum RawToken {
    #[regex(r"[A-Za-z_][A-Za-z_0-9-]*", validate_dash_run)]
    Ident(String),

    // Longer than the bare `--` token below, so logos prefers this whenever
    // an identifier character immediately follows the dashes.
    #[regex(r"--[A-Za-z_][A-Za-z_0-9-]*", |lex| validate_dash_run_from(lex, 2))]
    LongOption(String),

    #[regex(r"-[A-Za-z_][A-Za-z_0-9-]*", |lex| validate_dash_run_from(lex, 1))]
    ShortOption(String),

    #[token("--")]
    EndOfOptions,

    // Any standalone dash-led run that isn't a valid identifier/option is
    // malformed on its own (e.g. a lone `-`).
    #[token("-")]
    LoneDash,

    #[regex(r"<[^\s{}]*", |lex| lex.slice().to_string())]
    AngleRun(String),

    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token("*")]
    Asterisk,
    #[token("|")]
    Pipe,
    #[token(",")]
    Comma,
}

/// Validates that a dash-delimited identifier run has no consecutive or
/// trailing dashes: `dry-run` is fine, `dry--run` and `dry-` are not.
///
/// The first segment can never be empty (the regex's leading character
/// class excludes `-`), so an empty segment anywhere in the split can only
/// come from a doubled or trailing dash.
fn is_valid_dash_run(run: &str) -> bool {
    run.split('-').all(|segment| !segment.is_empty())
}

fn validate_dash_run(lex: &mut logos::Lexer<RawToken>) -> Result<String, ()> {
    let slice = lex.slice();
    if is_valid_dash_run(slice) {
        Ok(slice.to_string())
    } else {
        Err(())
    }
}

fn validate_dash_run_from(lex: &mut logos::Lexer<RawToken>, prefix_len: usize) -> Result<String, ()> {
    let slice = &lex.slice()[prefix_len..];
    if is_valid_dash_run(slice) {
        Ok(slice.to_string())
    } else {
        Err(())
    }
}

/// Lex a pattern string into a token stream, terminated by `EndOfInput`.
#[must_use]
pub fn lex(pattern: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut logos = RawToken::lexer(pattern);

    while let Some(result) = logos.next() {
        let span: Span = logos.span().into();
        match result {
            Ok(raw) => out.push(Token::new(convert(raw), span)),
            Err(()) => out.push(Token::new(TokenKind::Invalid(logos.slice().to_string()), span)),
        }
    }

    let eof_at = u32::try_from(pattern.len()).unwrap_or(u32::MAX);
    out.push(Token::new(TokenKind::EndOfInput, Span::point(eof_at)));
    out
}

fn convert(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Ident(name) => TokenKind::Identifier(name),
        RawToken::LongOption(name) => TokenKind::DoubleDash(name),
        RawToken::ShortOption(name) => TokenKind::SingleDash(name),
        RawToken::EndOfOptions => TokenKind::EndOfOptions,
        RawToken::LoneDash => TokenKind::Invalid("-".to_string()),
        RawToken::AngleRun(run) => TokenKind::Invalid(run),
        RawToken::LeftBrace => TokenKind::LeftBrace,
        RawToken::RightBrace => TokenKind::RightBrace,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Question => TokenKind::Question,
        RawToken::Asterisk => TokenKind::Asterisk,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Comma => TokenKind::Comma,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(pattern: &str) -> Vec<TokenKind> {
        lex(pattern).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_literal_and_parameter() {
        let tokens = kinds("deploy {env}");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Identifier("deploy".to_string()),
                TokenKind::LeftBrace,
                TokenKind::Identifier("env".to_string()),
                TokenKind::RightBrace,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn lexes_typed_optional_parameter() {
        let tokens = kinds("{tag:int?}");
        assert_eq!(
            tokens,
            vec![
                TokenKind::LeftBrace,
                TokenKind::Identifier("tag".to_string()),
                TokenKind::Colon,
                TokenKind::Identifier("int".to_string()),
                TokenKind::Question,
                TokenKind::RightBrace,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn lexes_catch_all() {
        let tokens = kinds("{*args}");
        assert_eq!(
            tokens,
            vec![
                TokenKind::LeftBrace,
                TokenKind::Asterisk,
                TokenKind::Identifier("args".to_string()),
                TokenKind::RightBrace,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn distinguishes_end_of_options_from_double_dash_option() {
        assert_eq!(
            kinds("exec --"),
            vec![
                TokenKind::Identifier("exec".to_string()),
                TokenKind::EndOfOptions,
                TokenKind::EndOfInput,
            ]
        );
        assert_eq!(
            kinds("--dry-run"),
            vec![
                TokenKind::DoubleDash("dry-run".to_string()),
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn lexes_short_option_with_multiple_characters() {
        assert_eq!(
            kinds("-bl"),
            vec![TokenKind::SingleDash("bl".to_string()), TokenKind::EndOfInput]
        );
    }

    #[test]
    fn internal_single_dash_is_a_valid_identifier() {
        assert_eq!(
            kinds("max-count"),
            vec![
                TokenKind::Identifier("max-count".to_string()),
                TokenKind::EndOfInput
            ]
        );
    }

    #[test]
    fn consecutive_dashes_are_invalid() {
        assert_eq!(
            kinds("dry--run"),
            vec![
                TokenKind::Invalid("dry--run".to_string()),
                TokenKind::EndOfInput
            ]
        );
    }

    #[test]
    fn trailing_dash_is_invalid() {
        assert_eq!(
            kinds("dry-"),
            vec![TokenKind::Invalid("dry-".to_string()), TokenKind::EndOfInput]
        );
    }

    #[test]
    fn bare_angle_bracket_sequence_is_invalid() {
        let tokens = kinds("{<name>}");
        assert_eq!(tokens[1], TokenKind::Invalid("<name>".to_string()));
    }

    #[test]
    fn lexer_resumes_after_invalid_token() {
        let tokens = kinds("deploy dry-- {env}");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Identifier("deploy".to_string()),
                TokenKind::Invalid("dry--".to_string()),
                TokenKind::LeftBrace,
                TokenKind::Identifier("env".to_string()),
                TokenKind::RightBrace,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn every_stream_ends_with_end_of_input() {
        for pattern in ["", "deploy", "{x:int}", "---"] {
            let tokens = lex(pattern);
            assert!(matches!(tokens.last().unwrap().kind, TokenKind::EndOfInput));
        }
    }

    #[test]
    fn whitespace_is_discarded_and_never_a_token() {
        let tokens = kinds("  deploy   {env}  ");
        assert!(!tokens
            .iter()
            .any(|k| matches!(k, TokenKind::Identifier(s) if s.trim().is_empty())));
    }

    #[test]
    fn pipe_is_lexed_as_an_ordinary_token() {
        assert_eq!(
            kinds("status | Show status"),
            vec![
                TokenKind::Identifier("status".to_string()),
                TokenKind::Pipe,
                TokenKind::Identifier("Show".to_string()),
                TokenKind::Identifier("status".to_string()),
                TokenKind::EndOfInput,
            ]
        );
    }
}
