//! Route-based command-line dispatch: a pattern DSL compiler, a
//! specificity-ordered resolver, and a reflection-free parameter binder.
//!
//! ```
//! use argmux::{Router, ResolverResult};
//!
//! let mut router: Router<&str> = Router::new();
//! router.register("greet {name} --loud?", "greet").unwrap();
//!
//! let argv: Vec<String> = vec!["greet".into(), "world".into(), "--loud".into()];
//! match router.resolve(&argv) {
//!     ResolverResult::Success { endpoint, bindings } => {
//!         let binder = router.binder(endpoint, &bindings);
//!         let name: String = binder.required("name").unwrap();
//!         let loud = binder.flag("loud");
//!         assert_eq!(name, "world");
//!         assert!(loud);
//!     }
//!     ResolverResult::Failure { error } => panic!("{error}"),
//! }
//! ```
//!
//! The crate is a thin facade over six lower-level crates, each scoped to
//! one stage of the pipeline: [`argmux_lexer`] tokenizes a pattern string,
//! [`argmux_parser`] compiles it to a [`CompiledRoute`], [`argmux_dispatch`]
//! ranks and matches routes against `argv`, [`argmux_convert`] turns a
//! captured string into a typed [`Value`], and [`argmux_bind`] extracts
//! those values for a handler. [`argmux_diagnostic`] supplies the error
//! types and caret-annotated rendering shared by all of them.

mod router;

pub use argmux_bind::Binder;
pub use argmux_convert::{EnumConstraint, FromCapture, TypeConverterRegistry, Value};
pub use argmux_diagnostic::{render_parse_error, BindError, ParseError, ResolveError};
pub use argmux_dispatch::{Endpoint, EndpointCollection, HandlerIdentity, ResolverResult};
pub use argmux_route::{Bindings, CompiledRoute};
pub use router::{Router, RouterConfig};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    /// Concurrent reads against one shared, immutably-published `Router` —
    /// the deployment shape a long-lived host process actually uses.
    #[test]
    fn concurrent_resolves_against_one_shared_router_agree_with_sequential() {
        let mut router: Router<u32> = Router::new();
        router.register("deploy {app} --env {e}", 1).expect("valid pattern");
        router.register("deploy {app} --env {e} --dry-run", 2).expect("valid pattern");
        router.register("status", 3).expect("valid pattern");

        let cases: Vec<Vec<String>> = vec![
            vec!["deploy".into(), "api".into(), "--env".into(), "prod".into()],
            vec![
                "deploy".into(),
                "api".into(),
                "--env".into(),
                "prod".into(),
                "--dry-run".into(),
            ],
            vec!["status".into()],
            vec!["unknown".into()],
        ];

        let expected: Vec<Option<u32>> = cases.iter().map(|argv| resolved_handler(&router, argv)).collect();

        let actual: Vec<Option<u32>> = cases.par_iter().map(|argv| resolved_handler(&router, argv)).collect();

        assert_eq!(actual, expected);
    }

    fn resolved_handler(router: &Router<u32>, argv: &[String]) -> Option<u32> {
        match router.resolve(argv) {
            ResolverResult::Success { endpoint, .. } => match &endpoint.handler {
                HandlerIdentity::Inline(h) => Some(*h),
                HandlerIdentity::Typed(_) => None,
            },
            ResolverResult::Failure { .. } => None,
        }
    }
}
