//! The ordered set of registered endpoints, kept sorted by specificity.

use crate::endpoint::Endpoint;
use crate::specificity;

/// Endpoints sorted so the most specific pattern is probed first,
/// regardless of registration order.
///
/// Re-sorts on every `insert`. Registration happens at startup, not in a
/// hot loop, so an O(n log n) re-sort per insert is the simpler and
/// cheaper choice over maintaining an always-sorted insertion structure.
#[derive(Clone, Debug, Default)]
pub struct EndpointCollection<H> {
    endpoints: Vec<Endpoint<H>>,
}

impl<H> EndpointCollection<H> {
    #[must_use]
    pub fn new() -> Self {
        Self { endpoints: Vec::new() }
    }

    /// Add an endpoint and re-sort by specificity.
    ///
    /// Equal-specificity endpoints keep their relative insertion order:
    /// the new endpoint is appended before the stable sort runs, so it
    /// lands after any existing endpoint it ties with.
    pub fn insert(&mut self, endpoint: Endpoint<H>) {
        tracing::trace!(pattern = %endpoint.route_pattern, "registering endpoint");
        self.endpoints.push(endpoint);
        self.endpoints
            .sort_by_cached_key(|ep| specificity::key(&ep.route_pattern, &ep.compiled_route));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Iterate endpoints in specificity order, most specific first.
    pub fn iter(&self) -> impl Iterator<Item = &Endpoint<H>> {
        self.endpoints.iter()
    }

    /// `(route_pattern, description)` pairs in specificity order, for a
    /// host's `--help` rendering.
    pub fn descriptions(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.endpoints
            .iter()
            .map(|ep| (ep.route_pattern.as_str(), ep.description.as_deref()))
    }
}
