//! The (single) externally visible failure mode of the resolver.

use thiserror::Error;

/// Why `resolve` failed to find a matching endpoint.
///
/// Per-endpoint mismatch reasons are deliberately not surfaced here: this
/// takes the conservative position that "no route matched" is the only
/// externally visible resolver failure, leaving per-candidate diagnostics
/// as a deliberately unaddressed extension rather than a guess.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no matching command found")]
    NoRouteMatched,
}
