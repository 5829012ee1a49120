//! Recursive-descent grammar: `Pattern := Segment* ('|' Description)?`.

use argmux_diagnostic::ParseError;
use argmux_ir::{Span, TokenKind};
use argmux_route::{CompiledRoute, LiteralMatcher, OptionMatcher, ParameterMatcher, PositionalMatcher};
use rustc_hash::FxHashSet;

use crate::cursor::Cursor;

pub(crate) fn parse_pattern(cur: &mut Cursor<'_>) -> Result<CompiledRoute, ParseError> {
    let mut positional = Vec::new();
    let mut options = Vec::new();
    let mut option_forms: FxHashSet<String> = FxHashSet::default();
    let mut catch_all_seen: Option<(String, Span)> = None;
    let mut description = None;

    loop {
        if let TokenKind::Invalid(lexeme) = cur.peek_kind() {
            return Err(ParseError::InvalidToken {
                span: cur.span(),
                lexeme: lexeme.clone(),
            });
        }

        match cur.peek_kind().clone() {
            TokenKind::EndOfInput => break,

            TokenKind::Pipe => {
                cur.advance();
                description = Some(consume_rest_as_description(cur));
                break;
            }

            TokenKind::Identifier(text) => {
                if let Some((name, span)) = &catch_all_seen {
                    return Err(ParseError::CatchAllNotLast {
                        span: *span,
                        name: name.clone(),
                    });
                }
                cur.advance();
                positional.push(PositionalMatcher::Literal(LiteralMatcher::new(text)));
            }

            TokenKind::LeftBrace => {
                if let Some((name, span)) = &catch_all_seen {
                    return Err(ParseError::CatchAllNotLast {
                        span: *span,
                        name: name.clone(),
                    });
                }
                let (param, name_span) = parse_parameter(cur)?;
                if param.catch_all {
                    catch_all_seen = Some((param.name.clone(), name_span));
                }
                positional.push(PositionalMatcher::Parameter(param));
            }

            TokenKind::DoubleDash(_) | TokenKind::SingleDash(_) => {
                let opt = parse_option(cur, &mut option_forms)?;
                options.push(opt);
            }

            TokenKind::EndOfOptions => {
                if let Some((name, span)) = &catch_all_seen {
                    return Err(ParseError::CatchAllNotLast {
                        span: *span,
                        name: name.clone(),
                    });
                }
                let span = cur.span();
                if positional
                    .iter()
                    .any(|m| matches!(m, PositionalMatcher::EndOfOptions))
                {
                    return Err(ParseError::DuplicateEndOfOptions { span });
                }
                cur.advance();
                positional.push(PositionalMatcher::EndOfOptions);
            }

            other => {
                return Err(ParseError::UnexpectedToken {
                    span: cur.span(),
                    expected: "a literal, parameter, option, or end of pattern".to_string(),
                    found: other.to_string(),
                });
            }
        }
    }

    Ok(CompiledRoute::new(positional, options, description))
}

fn parse_parameter(cur: &mut Cursor<'_>) -> Result<(ParameterMatcher, Span), ParseError> {
    let open_span = cur.span();
    cur.advance(); // '{'

    let catch_all = matches!(cur.peek_kind(), TokenKind::Asterisk);
    if catch_all {
        cur.advance();
    }

    let name_span = cur.span();
    let name = expect_identifier(cur)?;

    let mut optional = false;
    if !catch_all && matches!(cur.peek_kind(), TokenKind::Question) {
        cur.advance();
        optional = true;
    }

    let mut constraint = None;
    if matches!(cur.peek_kind(), TokenKind::Colon) {
        cur.advance();
        constraint = Some(expect_identifier(cur)?);
        if !catch_all && matches!(cur.peek_kind(), TokenKind::Question) {
            cur.advance();
            optional = true;
        }
    }

    let mut description = None;
    if matches!(cur.peek_kind(), TokenKind::Pipe) {
        cur.advance();
        description = Some(consume_until_right_brace(cur));
    }

    expect_right_brace(cur, open_span)?;

    let mut param = ParameterMatcher::new(name);
    param.optional = optional;
    param.catch_all = catch_all;
    param.constraint = constraint;
    param.description = description;
    Ok((param, name_span))
}

fn parse_option(
    cur: &mut Cursor<'_>,
    seen_forms: &mut FxHashSet<String>,
) -> Result<OptionMatcher, ParseError> {
    let (primary, primary_span) = expect_option_form(cur)?;
    reject_duplicate(seen_forms, &primary, primary_span)?;

    let mut alternate = None;
    if matches!(cur.peek_kind(), TokenKind::Comma) {
        cur.advance();
        let (alt, alt_span) = expect_option_form(cur)?;
        reject_duplicate(seen_forms, &alt, alt_span)?;
        alternate = Some(alt);
    }

    let mut is_optional = false;
    if matches!(cur.peek_kind(), TokenKind::Question) {
        cur.advance();
        is_optional = true;
    }

    let mut expects_value = false;
    let mut parameter_name = None;
    let mut parameter_is_optional = false;
    let mut value_constraint = None;
    if matches!(cur.peek_kind(), TokenKind::LeftBrace) {
        let open_span = cur.span();
        cur.advance();
        expects_value = true;
        parameter_name = Some(expect_identifier(cur)?);
        if matches!(cur.peek_kind(), TokenKind::Question) {
            cur.advance();
            parameter_is_optional = true;
        }
        if matches!(cur.peek_kind(), TokenKind::Colon) {
            cur.advance();
            value_constraint = Some(expect_identifier(cur)?);
        }
        expect_right_brace(cur, open_span)?;
    }

    let mut is_repeated = false;
    if matches!(cur.peek_kind(), TokenKind::Asterisk) {
        cur.advance();
        is_repeated = true;
    }

    let mut description = None;
    if matches!(cur.peek_kind(), TokenKind::Pipe) {
        cur.advance();
        description = Some(consume_until_structural(cur));
    }

    let mut opt = OptionMatcher::new(primary);
    opt.alternate = alternate;
    opt.expects_value = expects_value;
    opt.parameter_name = parameter_name;
    opt.parameter_is_optional = parameter_is_optional;
    opt.value_constraint = value_constraint;
    opt.is_optional = is_optional;
    opt.is_repeated = is_repeated;
    opt.description = description;
    Ok(opt)
}

fn reject_duplicate(
    seen: &mut FxHashSet<String>,
    form: &str,
    span: Span,
) -> Result<(), ParseError> {
    if seen.insert(form.to_string()) {
        Ok(())
    } else {
        Err(ParseError::DuplicateOption {
            span,
            name: form.to_string(),
        })
    }
}

fn expect_identifier(cur: &mut Cursor<'_>) -> Result<String, ParseError> {
    let span = cur.span();
    match cur.peek_kind().clone() {
        TokenKind::Identifier(s) => {
            cur.advance();
            Ok(s)
        }
        TokenKind::Invalid(lexeme) => Err(ParseError::InvalidToken { span, lexeme }),
        other => Err(ParseError::UnexpectedToken {
            span,
            expected: "an identifier".to_string(),
            found: other.to_string(),
        }),
    }
}

fn expect_option_form(cur: &mut Cursor<'_>) -> Result<(String, Span), ParseError> {
    let span = cur.span();
    match cur.peek_kind().clone() {
        TokenKind::DoubleDash(s) => {
            cur.advance();
            Ok((format!("--{s}"), span))
        }
        TokenKind::SingleDash(s) => {
            cur.advance();
            Ok((format!("-{s}"), span))
        }
        TokenKind::Invalid(lexeme) => Err(ParseError::InvalidToken { span, lexeme }),
        other => Err(ParseError::UnexpectedToken {
            span,
            expected: "an option (`--name` or `-x`)".to_string(),
            found: other.to_string(),
        }),
    }
}

fn expect_right_brace(cur: &mut Cursor<'_>, open_span: Span) -> Result<(), ParseError> {
    if matches!(cur.peek_kind(), TokenKind::RightBrace) {
        cur.advance();
        Ok(())
    } else {
        Err(ParseError::UnterminatedBrace { span: open_span })
    }
}

/// Render a token's literal text for reconstructing free-form description
/// strings. Deliberately distinct from `TokenKind`'s `Display`, which is
/// meant for "expected X, found Y" diagnostics, not for roundtripping text.
fn lexeme_text(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Identifier(s) | TokenKind::Invalid(s) => s.clone(),
        TokenKind::LeftBrace => "{".to_string(),
        TokenKind::RightBrace => "}".to_string(),
        TokenKind::Colon => ":".to_string(),
        TokenKind::Question => "?".to_string(),
        TokenKind::Asterisk => "*".to_string(),
        TokenKind::Pipe => "|".to_string(),
        TokenKind::Comma => ",".to_string(),
        TokenKind::DoubleDash(s) => format!("--{s}"),
        TokenKind::SingleDash(s) => format!("-{s}"),
        TokenKind::EndOfOptions => "--".to_string(),
        TokenKind::EndOfInput => String::new(),
    }
}

/// A pattern-level trailing description runs to the end of the token
/// stream unconditionally — it is the last thing the grammar allows.
fn consume_rest_as_description(cur: &mut Cursor<'_>) -> String {
    let mut words = Vec::new();
    while !matches!(cur.peek_kind(), TokenKind::EndOfInput) {
        words.push(lexeme_text(cur.peek_kind()));
        cur.advance();
    }
    words.join(" ")
}

/// A parameter's inline description runs until the `}` that closes it.
fn consume_until_right_brace(cur: &mut Cursor<'_>) -> String {
    let mut words = Vec::new();
    while !matches!(cur.peek_kind(), TokenKind::RightBrace | TokenKind::EndOfInput) {
        words.push(lexeme_text(cur.peek_kind()));
        cur.advance();
    }
    words.join(" ")
}

/// An option's trailing description runs until the next segment-starting
/// token or the end of the pattern.
fn consume_until_structural(cur: &mut Cursor<'_>) -> String {
    let mut words = Vec::new();
    loop {
        match cur.peek_kind() {
            TokenKind::LeftBrace
            | TokenKind::DoubleDash(_)
            | TokenKind::SingleDash(_)
            | TokenKind::EndOfOptions
            | TokenKind::EndOfInput => break,
            other => {
                words.push(lexeme_text(other));
                cur.advance();
            }
        }
    }
    words.join(" ")
}
