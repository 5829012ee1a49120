//! Compiled route representation: the matcher tree produced by the parser
//! and consumed by the resolver and binder.
//!
//! Nothing in this crate runs the matching algorithm itself — positional
//! consumption order, catch-all accumulation, and end-of-options handling
//! all live with the resolver. This crate only owns the data and the
//! per-segment predicates the resolver calls into.

mod bindings;
mod matcher;
mod route;

pub use bindings::Bindings;
pub use matcher::{LiteralMatcher, OptionMatcher, ParameterMatcher, PositionalMatcher};
pub use route::CompiledRoute;
