//! Leaf matcher types that make up a compiled route's positional and
//! option segments.
//!
//! These carry no matching *algorithm* beyond a per-segment predicate — the
//! consumption order, catch-all accumulation, and end-of-options handling
//! are the resolver's job, not this crate's.

/// A fixed word that must appear verbatim at this position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralMatcher {
    pub text: String,
}

impl LiteralMatcher {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Literal matching is case-sensitive and exact.
    #[must_use]
    pub fn try_match(&self, token: &str) -> bool {
        self.text == token
    }

    /// Same comparison, with case sensitivity left to the caller — the
    /// resolver threads a router-wide `case_sensitive_literals` knob through
    /// here instead of hard-coding one policy.
    #[must_use]
    pub fn try_match_with(&self, token: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            self.try_match(token)
        } else {
            self.text.eq_ignore_ascii_case(token)
        }
    }
}

/// A named capture at a positional slot: `{name}`, `{name?}`, `{*name}`,
/// `{name:constraint}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterMatcher {
    pub name: String,
    pub optional: bool,
    pub catch_all: bool,
    pub constraint: Option<String>,
    pub description: Option<String>,
}

impl ParameterMatcher {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
            catch_all: false,
            constraint: None,
            description: None,
        }
    }

    /// A non-catch-all parameter matches any single token unconditionally;
    /// constraint checking happens at bind time, not at resolve time.
    #[must_use]
    pub fn bind(&self, token: &str) -> String {
        token.to_string()
    }
}

/// One positional segment of a compiled route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PositionalMatcher {
    Literal(LiteralMatcher),
    Parameter(ParameterMatcher),
    /// The standalone `--` marker: matches zero-width, but sets the
    /// resolver's "stop treating dash-prefixed tokens as options" flag.
    EndOfOptions,
}

impl PositionalMatcher {
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        matches!(self, PositionalMatcher::Parameter(p) if p.catch_all)
    }

    #[must_use]
    pub fn is_optional(&self) -> bool {
        matches!(self, PositionalMatcher::Parameter(p) if p.optional)
    }
}

/// An `--option`/`-o` segment, independent of argv position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionMatcher {
    /// Primary form, dash-prefixed (e.g. `--dry-run`, `-d`).
    pub primary: String,
    /// Optional alternate form, dash-prefixed.
    pub alternate: Option<String>,
    pub expects_value: bool,
    pub parameter_name: Option<String>,
    pub parameter_is_optional: bool,
    pub value_constraint: Option<String>,
    pub is_optional: bool,
    pub is_repeated: bool,
    pub description: Option<String>,
}

impl OptionMatcher {
    #[must_use]
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            alternate: None,
            expects_value: false,
            parameter_name: None,
            parameter_is_optional: false,
            value_constraint: None,
            is_optional: false,
            is_repeated: false,
            description: None,
        }
    }

    /// Does `token` name this option, under either of its two forms?
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.primary == token || self.alternate.as_deref() == Some(token)
    }

    /// The bindings-map key this option's captured value (or `"true"`/
    /// `"false"` presence flag) is stored under.
    ///
    /// Falls back to the primary form with its leading dashes stripped when
    /// no explicit `{name}` value placeholder was declared, so a bare flag
    /// like `--dry-run` still has somewhere to bind its presence.
    #[must_use]
    pub fn binding_name(&self) -> String {
        self.parameter_name
            .clone()
            .unwrap_or_else(|| self.primary.trim_start_matches('-').to_string())
    }
}
