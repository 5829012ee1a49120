//! The compiled, immutable representation of one registered pattern.

use crate::matcher::{OptionMatcher, PositionalMatcher};

/// A fully parsed pattern: its positional segments, its option segments,
/// and a couple of cheap derived facts the resolver's specificity ordering
/// needs.
///
/// Immutable once built — a `CompiledRoute` is never mutated after the
/// parser returns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledRoute {
    pub positional_matchers: Vec<PositionalMatcher>,
    pub option_matchers: Vec<OptionMatcher>,
    pub has_catch_all: bool,
    pub description: Option<String>,
}

impl CompiledRoute {
    #[must_use]
    pub fn new(
        positional_matchers: Vec<PositionalMatcher>,
        option_matchers: Vec<OptionMatcher>,
        description: Option<String>,
    ) -> Self {
        let has_catch_all = positional_matchers
            .last()
            .is_some_and(PositionalMatcher::is_catch_all);
        Self {
            positional_matchers,
            option_matchers,
            has_catch_all,
            description,
        }
    }

    /// Number of literal positional segments. Used as the first key of
    /// specificity ordering: more literals means a more specific pattern.
    #[must_use]
    pub fn literal_count(&self) -> usize {
        self.positional_matchers
            .iter()
            .filter(|m| matches!(m, PositionalMatcher::Literal(_)))
            .count()
    }

    /// Number of option matchers that are not themselves optional.
    #[must_use]
    pub fn required_option_count(&self) -> usize {
        self.option_matchers.iter().filter(|o| !o.is_optional).count()
    }

    /// Number of optional positional parameters (`{name?}`).
    #[must_use]
    pub fn optional_parameter_count(&self) -> usize {
        self.positional_matchers
            .iter()
            .filter(|m| m.is_optional())
            .count()
    }

    /// Total positional segment count, including the end-of-options marker
    /// and catch-all, if present.
    #[must_use]
    pub fn positional_len(&self) -> usize {
        self.positional_matchers.len()
    }

    /// Look up the option matcher naming `form` (e.g. `--dry-run` or
    /// `-d`), under either of its two forms.
    #[must_use]
    pub fn find_option(&self, form: &str) -> Option<&OptionMatcher> {
        self.option_matchers.iter().find(|o| o.matches(form))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::matcher::{LiteralMatcher, ParameterMatcher};
    use pretty_assertions::assert_eq;

    #[test]
    fn has_catch_all_true_only_when_last_segment_is_catch_all() {
        let mut catch_all = ParameterMatcher::new("rest");
        catch_all.catch_all = true;
        let route = CompiledRoute::new(
            vec![
                PositionalMatcher::Literal(LiteralMatcher::new("run")),
                PositionalMatcher::Parameter(catch_all),
            ],
            vec![],
            None,
        );
        assert!(route.has_catch_all);
        assert_eq!(route.literal_count(), 1);
        assert_eq!(route.positional_len(), 2);
    }

    #[test]
    fn has_catch_all_false_when_last_segment_is_literal() {
        let route = CompiledRoute::new(
            vec![PositionalMatcher::Literal(LiteralMatcher::new("status"))],
            vec![],
            None,
        );
        assert!(!route.has_catch_all);
    }

    #[test]
    fn find_option_matches_either_form() {
        let mut opt = OptionMatcher::new("--dry-run");
        opt.alternate = Some("-d".to_string());
        let route = CompiledRoute::new(vec![], vec![opt], None);
        assert!(route.find_option("-d").is_some());
        assert!(route.find_option("--dry-run").is_some());
        assert!(route.find_option("--missing").is_none());
    }
}
