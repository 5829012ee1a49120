//! Walks `argv` against an [`EndpointCollection`] in specificity order.
//!
//! Nothing here converts a captured string to a typed value — that is
//! `argmux_bind`'s job, run after a successful resolve. This module only
//! ever produces raw string captures.

use argmux_diagnostic::ResolveError;
use argmux_route::{Bindings, CompiledRoute, PositionalMatcher};

use crate::collection::EndpointCollection;
use crate::endpoint::Endpoint;

/// The outcome of one `resolve` call.
#[derive(Debug)]
pub enum ResolverResult<'a, H> {
    Success { endpoint: &'a Endpoint<H>, bindings: Bindings },
    Failure { error: ResolveError },
}

/// Find the first (highest-specificity) endpoint whose compiled route
/// matches `argv`, and extract its bindings.
///
/// `case_sensitive_literals` threads the router-wide configuration knob
/// through to literal matching; everything else in the algorithm is
/// case-sensitivity-agnostic.
#[must_use]
pub fn resolve<'a, H>(
    argv: &[String],
    endpoints: &'a EndpointCollection<H>,
    case_sensitive_literals: bool,
) -> ResolverResult<'a, H> {
    for endpoint in endpoints.iter() {
        tracing::trace!(pattern = %endpoint.route_pattern, "probing endpoint");
        if let Some(bindings) = try_match(&endpoint.compiled_route, argv, case_sensitive_literals) {
            tracing::trace!(pattern = %endpoint.route_pattern, "endpoint matched");
            return ResolverResult::Success { endpoint, bindings };
        }
    }
    tracing::trace!(argv_len = argv.len(), "no endpoint matched");
    ResolverResult::Failure {
        error: ResolveError::NoRouteMatched,
    }
}

fn looks_like_defined_option(route: &CompiledRoute, token: &str) -> bool {
    token.starts_with('-') && route.option_matchers.iter().any(|o| o.matches(token))
}

/// Try one endpoint's compiled route against `argv`. `None` means this
/// endpoint does not match; the resolver moves on to the next one.
fn try_match(route: &CompiledRoute, argv: &[String], case_sensitive_literals: bool) -> Option<Bindings> {
    let mut bindings = Bindings::new();
    let mut pos = 0usize;
    let mut seen_end_of_options = false;

    for matcher in &route.positional_matchers {
        match matcher {
            PositionalMatcher::EndOfOptions => {
                // Zero-width: consumes the literal `--` opportunistically,
                // but always flips the flag even if it isn't there.
                if argv.get(pos).is_some_and(|tok| tok == "--") {
                    pos += 1;
                }
                seen_end_of_options = true;
            }

            PositionalMatcher::Parameter(p) if p.catch_all => {
                let mut collected = Vec::new();
                while pos < argv.len() && !looks_like_defined_option(route, &argv[pos]) {
                    collected.push(argv[pos].clone());
                    pos += 1;
                }
                bindings.insert(&p.name, collected.join(" "));
            }

            PositionalMatcher::Parameter(p) => {
                let blocked_by_dash = !seen_end_of_options && argv.get(pos).is_some_and(|tok| tok.starts_with('-'));
                if pos >= argv.len() || blocked_by_dash {
                    if p.optional {
                        continue;
                    }
                    return None;
                }
                bindings.insert(&p.name, p.bind(&argv[pos]));
                pos += 1;
            }

            PositionalMatcher::Literal(lit) => {
                let blocked_by_dash = !seen_end_of_options && argv.get(pos).is_some_and(|tok| tok.starts_with('-'));
                if pos >= argv.len() || blocked_by_dash {
                    return None;
                }
                if !lit.try_match_with(&argv[pos], case_sensitive_literals) {
                    return None;
                }
                pos += 1;
            }
        }
    }

    let remaining = &argv[pos..];
    let options_consumed = match_options(route, remaining, &mut bindings)?;

    if !route.has_catch_all && pos + options_consumed != argv.len() {
        return None;
    }

    Some(bindings)
}

/// Scan `remaining` for each of the route's option matchers, in the order
/// they were declared in the pattern, accumulating bindings as they're
/// found. Returns the number of `remaining` positions consumed, or `None`
/// if a required option (or its required value) is missing.
fn match_options(route: &CompiledRoute, remaining: &[String], bindings: &mut Bindings) -> Option<usize> {
    let mut used = vec![false; remaining.len()];

    for opt in &route.option_matchers {
        let name = opt.binding_name();
        let mut found = false;
        let mut idx = 0;

        while idx < remaining.len() {
            if !used[idx] && opt.matches(&remaining[idx]) {
                found = true;
                used[idx] = true;

                if opt.expects_value {
                    let has_value = remaining
                        .get(idx + 1)
                        .is_some_and(|next| !used[idx + 1] && !next.starts_with('-'));
                    if has_value {
                        used[idx + 1] = true;
                        let value = &remaining[idx + 1];
                        if opt.is_repeated {
                            bindings.append(&name, value);
                        } else {
                            bindings.insert(&name, value.clone());
                        }
                    } else if !opt.parameter_is_optional {
                        return None;
                    }
                } else {
                    bindings.insert(&name, "true".to_string());
                }

                if !opt.is_repeated {
                    break;
                }
            }
            idx += 1;
        }

        if !found {
            if !opt.is_optional {
                return None;
            }
            if !opt.expects_value {
                bindings.insert(&name, "false".to_string());
            }
        }
    }

    Some(used.iter().filter(|&&u| u).count())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use argmux_parser::parse;
    use pretty_assertions::assert_eq;

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| (*s).to_string()).collect()
    }

    fn single_endpoint(pattern: &str) -> EndpointCollection<()> {
        let mut collection = EndpointCollection::new();
        let route = parse(pattern).expect("valid pattern");
        collection.insert(Endpoint::new(pattern, route, crate::endpoint::HandlerIdentity::Inline(())));
        collection
    }

    fn expect_success<H>(result: ResolverResult<'_, H>) -> Bindings {
        match result {
            ResolverResult::Success { bindings, .. } => bindings,
            ResolverResult::Failure { error } => panic!("expected a match, got {error}"),
        }
    }

    #[test]
    fn typed_positional_parameters_bind_raw_strings() {
        let endpoints = single_endpoint("add {x:int} {y:int}");
        let bindings = expect_success(resolve(&argv(&["add", "15", "25"]), &endpoints, true));
        assert_eq!(bindings.get("x"), Some("15"));
        assert_eq!(bindings.get("y"), Some("25"));
    }

    #[test]
    fn trailing_optional_parameter_may_be_absent() {
        let endpoints = single_endpoint("deploy {env} {tag?}");
        let bindings = expect_success(resolve(&argv(&["deploy", "prod"]), &endpoints, true));
        assert_eq!(bindings.get("env"), Some("prod"));
        assert!(!bindings.contains("tag"));
    }

    #[test]
    fn more_specific_registration_wins_over_less_specific() {
        let mut endpoints = EndpointCollection::new();
        let route_a = parse("deploy {app} --env {e} --dry-run").expect("valid pattern");
        endpoints.insert(Endpoint::new(
            "deploy {app} --env {e} --dry-run",
            route_a,
            crate::endpoint::HandlerIdentity::Inline("specific"),
        ));
        let route_b = parse("deploy {app} --env {e}").expect("valid pattern");
        endpoints.insert(Endpoint::new(
            "deploy {app} --env {e}",
            route_b,
            crate::endpoint::HandlerIdentity::Inline("generic"),
        ));

        let result = resolve(&argv(&["deploy", "api", "--env", "prod", "--dry-run"]), &endpoints, true);
        match result {
            ResolverResult::Success { endpoint, bindings } => {
                assert_eq!(endpoint.route_pattern, "deploy {app} --env {e} --dry-run");
                assert_eq!(bindings.get("dry-run"), Some("true"));
            }
            ResolverResult::Failure { error } => panic!("expected a match, got {error}"),
        }
    }

    #[test]
    fn catch_all_absorbs_everything_including_dash_prefixed_tokens() {
        let endpoints = single_endpoint("docker {*args}");
        let bindings = expect_success(resolve(&argv(&["docker", "run", "-it", "ubuntu"]), &endpoints, true));
        assert_eq!(bindings.get("args"), Some("run -it ubuntu"));
    }

    #[test]
    fn standalone_end_of_options_flips_dash_handling_for_the_catch_all() {
        let endpoints = single_endpoint("exec -- {*cmd}");
        let bindings = expect_success(resolve(&argv(&["exec", "--", "ls", "-la"]), &endpoints, true));
        assert_eq!(bindings.get("cmd"), Some("ls -la"));
    }

    #[test]
    fn constraint_mismatch_is_not_checked_at_resolve_time() {
        let endpoints = single_endpoint("wait {seconds:int}");
        let bindings = expect_success(resolve(&argv(&["wait", "abc"]), &endpoints, true));
        assert_eq!(bindings.get("seconds"), Some("abc"));
    }

    #[test]
    fn alternate_option_form_binds_to_the_same_parameter() {
        let endpoints = single_endpoint("build --output,-o {path}");
        let bindings = expect_success(resolve(&argv(&["build", "-o", "out.bin"]), &endpoints, true));
        assert_eq!(bindings.get("path"), Some("out.bin"));
    }

    #[test]
    fn repeated_option_values_are_space_joined_in_encounter_order() {
        let endpoints = single_endpoint("build --tag {value}*");
        let bindings = expect_success(resolve(
            &argv(&["build", "--tag", "a", "--tag", "b", "--tag", "c"]),
            &endpoints,
            true,
        ));
        assert_eq!(bindings.get("value"), Some("a b c"));
    }

    #[test]
    fn missing_required_option_fails_the_endpoint() {
        let endpoints = single_endpoint("build --output {path}");
        let result = resolve(&argv(&["build"]), &endpoints, true);
        assert!(matches!(result, ResolverResult::Failure { .. }));
    }

    #[test]
    fn absent_optional_flag_binds_false() {
        let endpoints = single_endpoint("deploy {app} --dry-run?");
        let bindings = expect_success(resolve(&argv(&["deploy", "api"]), &endpoints, true));
        assert_eq!(bindings.get("dry-run"), Some("false"));
    }

    #[test]
    fn case_insensitive_literals_when_configured() {
        let endpoints = single_endpoint("status");
        assert!(matches!(
            resolve(&argv(&["Status"]), &endpoints, false),
            ResolverResult::Success { .. }
        ));
        assert!(matches!(
            resolve(&argv(&["Status"]), &endpoints, true),
            ResolverResult::Failure { .. }
        ));
    }

    #[test]
    fn no_match_returns_no_route_matched() {
        let endpoints = single_endpoint("status");
        let result = resolve(&argv(&["unknown"]), &endpoints, true);
        assert!(matches!(
            result,
            ResolverResult::Failure {
                error: ResolveError::NoRouteMatched
            }
        ));
    }
}
