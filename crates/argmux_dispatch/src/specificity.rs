//! The specificity ordering key: more constrained patterns sort before
//! less constrained ones, with a lexicographic and then insertion-order
//! tiebreak.

use std::cmp::Reverse;

use argmux_route::CompiledRoute;

/// Sortable key: smaller compares as "more specific", so endpoints sort in
/// ascending key order to rank highest-specificity first.
pub(crate) type SpecificityKey = (Reverse<usize>, Reverse<usize>, usize, bool, Reverse<usize>, String);

/// `Vec::sort_by` is a stable sort, so two endpoints with an equal key
/// retain the relative order they already had — which, because `insert`
/// always appends before resorting, is insertion order. That gives the
/// final tiebreaker for free, without threading an explicit sequence
/// number through this type.
pub(crate) fn key(route_pattern: &str, route: &CompiledRoute) -> SpecificityKey {
    (
        Reverse(route.literal_count()),
        Reverse(route.required_option_count()),
        route.optional_parameter_count(),
        route.has_catch_all,
        Reverse(route.positional_len()),
        route_pattern.trim().to_string(),
    )
}
