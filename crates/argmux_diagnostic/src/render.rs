//! Human-readable rendering of [`ParseError`] against the original pattern
//! text, for hosts that want a caret-annotated diagnostic instead of (or in
//! addition to) the `Display` impl.

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::ParseError;

const SOURCE_ID: &str = "pattern";

/// Render a parse error as a multi-line, caret-annotated diagnostic
/// pointing at the offending span of `pattern`.
///
/// Falls back to the plain `Display` message when the error carries no
/// span (only [`ParseError::EmptyPattern`] today).
#[must_use]
pub fn render_parse_error(pattern: &str, err: &ParseError) -> String {
    let Some(span) = err.span() else {
        return err.to_string();
    };

    let start = span.start as usize;
    // Ariadne requires a non-empty range to anchor a label; widen
    // zero-width spans by one so the caret still lands on a character.
    let end = (span.end as usize).max(start + 1).min(pattern.len().max(1));

    let mut buf = Vec::new();
    let report = Report::build(ReportKind::Error, SOURCE_ID, start)
        .with_message(err.to_string())
        .with_label(
            Label::new((SOURCE_ID, start..end))
                .with_message(err.to_string())
                .with_color(Color::Red),
        )
        .finish();

    if report
        .write((SOURCE_ID, Source::from(pattern)), &mut buf)
        .is_err()
    {
        return err.to_string();
    }
    String::from_utf8_lossy(&buf).into_owned()
}
