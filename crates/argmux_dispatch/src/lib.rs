//! Endpoint model, specificity ordering, and the `argv` resolver.
//!
//! This crate owns everything between a compiled route and a successful
//! match: it does not parse pattern text (that's `argmux_parser`) and it
//! does not convert captured strings to typed values (that's
//! `argmux_bind`). Given an already-compiled [`CompiledRoute`] and an
//! opaque handler identity, it orders endpoints by specificity and walks
//! `argv` against them.
//!
//! [`CompiledRoute`]: argmux_route::CompiledRoute

mod collection;
mod endpoint;
mod resolver;
mod specificity;

pub use collection::EndpointCollection;
pub use endpoint::{Endpoint, HandlerIdentity};
pub use resolver::{resolve, ResolverResult};
