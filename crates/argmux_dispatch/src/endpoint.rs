//! One registered route, paired with an opaque handler identity.

use argmux_route::CompiledRoute;

/// What a matched endpoint hands back to its caller, so the core never has
/// to know how a handler is actually invoked.
///
/// `Inline` carries whatever payload the host finds convenient — a boxed
/// closure, an enum tag, an index into a side table. `Typed` models a
/// mediator-style command: the handler is named by a type tag and
/// resolved through a factory the host supplies outside the core.
/// Dispatch treats the two uniformly; this crate never inspects either.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandlerIdentity<H> {
    Inline(H),
    Typed(String),
}

/// A compiled route plus the metadata needed to enumerate and invoke it.
#[derive(Clone, Debug)]
pub struct Endpoint<H> {
    /// The original pattern text, kept for specificity tiebreaking and for
    /// help rendering at the host layer.
    pub route_pattern: String,
    pub compiled_route: CompiledRoute,
    pub handler: HandlerIdentity<H>,
    pub description: Option<String>,
}

impl<H> Endpoint<H> {
    /// `route_pattern` may be the full source text, including a trailing
    /// `| description` — only the portion before the top-level `|` is kept
    /// for display and specificity tiebreaking, matching what
    /// [`CompiledRoute::description`] already parsed out separately.
    #[must_use]
    pub fn new(route_pattern: impl Into<String>, compiled_route: CompiledRoute, handler: HandlerIdentity<H>) -> Self {
        let route_pattern = route_pattern.into();
        let route_pattern = route_pattern.split('|').next().unwrap_or(&route_pattern).trim().to_string();
        let description = compiled_route.description.clone();
        Self {
            route_pattern,
            compiled_route,
            handler,
            description,
        }
    }
}
