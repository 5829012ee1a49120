//! Source location spans within one pattern string.

use std::fmt;

/// A byte range within the pattern text being lexed or parsed.
///
/// Layout: 8 bytes total (`start: u32`, `end: u32`). Patterns are short
/// command-line strings, so `u32` offsets are never a practical limit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Dummy span for synthesized tokens that have no source text.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    #[inline]
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a zero-width span at a single offset (used for `EndOfInput`).
    #[inline]
    #[must_use]
    pub const fn point(at: u32) -> Self {
        Span { start: at, end: at }
    }

    /// Number of bytes covered by this span.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// True if this span covers zero bytes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice the original pattern text with this span.
    ///
    /// # Panics
    /// Panics if the span is out of bounds or falls on a non-UTF8
    /// boundary of `source`.
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start as usize..self.end as usize]
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        // Pattern strings come from registration-time literals; u32 overflow
        // here would mean a multi-gigabyte pattern, which is not a realistic
        // input, so we saturate rather than thread a fallible conversion
        // through every call site.
        Span {
            start: u32::try_from(range.start).unwrap_or(u32::MAX),
            end: u32::try_from(range.end).unwrap_or(u32::MAX),
        }
    }
}
