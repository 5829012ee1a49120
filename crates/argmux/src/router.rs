//! The facade tying the pattern DSL, dispatch engine, and binder together
//! into the three calls a host actually makes: `register`, `resolve`,
//! `bind`.

use argmux_bind::Binder;
use argmux_convert::{EnumConstraint, TypeConverterRegistry, Value};
use argmux_diagnostic::ParseError;
use argmux_dispatch::{resolve, Endpoint, EndpointCollection, HandlerIdentity, ResolverResult};
use argmux_route::Bindings;

/// Construction-time knobs. Deliberately a small, explicit set rather than
/// a sprawling options struct — there is no file- or environment-based
/// configuration layer, since the core has no persisted state to source
/// one from.
#[derive(Clone, Copy, Debug)]
pub struct RouterConfig {
    /// Whether literal positional segments (`deploy`, `status`, …) must
    /// match `argv` tokens exactly or case-insensitively. Defaults to
    /// `true` (case-sensitive).
    pub case_sensitive_literals: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            case_sensitive_literals: true,
        }
    }
}

/// Registers patterns, resolves `argv` against them, and binds the
/// resulting captures to typed handler arguments.
///
/// `H` is the opaque handler payload a host attaches to each pattern via
/// [`Router::register`] — a boxed closure, an enum tag, an index into a
/// side table. The router never inspects it; see
/// [`argmux_dispatch::HandlerIdentity`] for the `Inline`/`Typed` split
/// this models.
pub struct Router<H> {
    endpoints: EndpointCollection<H>,
    converters: TypeConverterRegistry,
    config: RouterConfig,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Router<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            endpoints: EndpointCollection::new(),
            converters: TypeConverterRegistry::new(),
            config,
        }
    }

    /// Parse `pattern`, compile it, and register it with an inline
    /// handler payload. Re-sorts the endpoint collection by specificity.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `pattern` is malformed.
    pub fn register(&mut self, pattern: &str, handler: H) -> Result<(), ParseError> {
        let route = argmux_parser::parse(pattern)?;
        tracing::trace!(pattern, "registering inline endpoint");
        self.endpoints
            .insert(Endpoint::new(pattern, route, HandlerIdentity::Inline(handler)));
        Ok(())
    }

    /// Parse `pattern` and register it under a `Typed` handler identity:
    /// dispatched by a type tag through a factory the host supplies
    /// outside this crate.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `pattern` is malformed.
    pub fn register_typed(&mut self, pattern: &str, type_tag: impl Into<String>) -> Result<(), ParseError> {
        let route = argmux_parser::parse(pattern)?;
        let type_tag = type_tag.into();
        tracing::trace!(pattern, type_tag = %type_tag, "registering typed endpoint");
        self.endpoints
            .insert(Endpoint::new(pattern, route, HandlerIdentity::Typed(type_tag)));
        Ok(())
    }

    /// Find the best-matching endpoint for `argv` and extract its raw
    /// string bindings. Pure: never invokes a handler.
    #[must_use]
    pub fn resolve(&self, argv: &[String]) -> ResolverResult<'_, H> {
        resolve(argv, &self.endpoints, self.config.case_sensitive_literals)
    }

    /// Build a [`Binder`] for converting one match's bindings into typed
    /// handler arguments, using this router's converter registry and the
    /// matched endpoint's declared constraints.
    #[must_use]
    pub fn binder<'a>(&'a self, endpoint: &'a Endpoint<H>, bindings: &'a Bindings) -> Binder<'a> {
        Binder::new(&endpoint.compiled_route, bindings, &self.converters)
    }

    /// Register a custom converter for `target_type`. Idempotent: a
    /// second registration for the same tag replaces the first.
    pub fn add_type_converter<F>(&mut self, target_type: impl Into<String>, converter: F)
    where
        F: Fn(&str) -> Option<Value> + Send + Sync + 'static,
    {
        self.converters.add_type_converter(target_type, converter);
    }

    /// Register an [`EnumConstraint`] type, resolved by case-insensitive
    /// variant name.
    pub fn add_enum<E: EnumConstraint>(&mut self, target_type: impl Into<String>) {
        self.converters.add_enum::<E>(target_type);
    }

    /// The registered endpoints, in specificity order — for a host's
    /// `--help` rendering.
    #[must_use]
    pub fn endpoints(&self) -> &EndpointCollection<H> {
        &self.endpoints
    }
}
