//! Property-based tests for the pattern parser: structurally valid
//! patterns are generated directly rather than hand-picked.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use argmux_parser::parse;
use argmux_route::PositionalMatcher;
use proptest::prelude::*;

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}"
}

proptest! {
    /// A pattern built from plain literals, with an optional trailing
    /// catch-all parameter, reports `has_catch_all` exactly when that
    /// trailing catch-all was present.
    #[test]
    fn has_catch_all_matches_trailing_catch_all_presence(
        literals in prop::collection::vec(ident(), 1..5),
        trailing_catch_all in proptest::option::of(ident()),
    ) {
        let mut pattern = literals.join(" ");
        if let Some(name) = &trailing_catch_all {
            pattern.push_str(&format!(" {{*{name}}}"));
        }

        let route = parse(&pattern).expect("constructed pattern is always valid");
        prop_assert_eq!(route.has_catch_all, trailing_catch_all.is_some());
    }

    /// A pattern made entirely of bare identifiers parses into that many
    /// literal positional segments and nothing else.
    #[test]
    fn literal_only_pattern_has_no_parameters(literals in prop::collection::vec(ident(), 1..6)) {
        let pattern = literals.join(" ");
        let route = parse(&pattern).expect("literal pattern always parses");
        prop_assert_eq!(route.literal_count(), literals.len());
        prop_assert!(route
            .positional_matchers
            .iter()
            .all(|m| matches!(m, PositionalMatcher::Literal(_))));
    }

    /// A catch-all that is *not* the last positional segment is always
    /// rejected, regardless of what follows it.
    #[test]
    fn catch_all_followed_by_anything_is_rejected(name in ident(), trailing in ident()) {
        let pattern = format!("{{*{name}}} {trailing}");
        prop_assert!(parse(&pattern).is_err());
    }
}
