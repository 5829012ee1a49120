//! Errors raised while converting bindings into typed handler arguments.

use thiserror::Error;

/// Failure converting a resolver's bindings map into the positional
/// argument vector a handler expects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// A required parameter had no captured value and no default.
    #[error("missing required binding `{0}`")]
    MissingRequiredBinding(String),

    /// A captured value could not be converted to the target type.
    #[error("cannot convert `{value}` to `{target_type}`")]
    ConversionFailed { value: String, target_type: String },

    /// Internal invariant violation: a catch-all binding was routed to a
    /// scalar (non-array) handler parameter slot.
    #[error("catch-all parameter bound to a scalar argument slot")]
    CatchAllBindToScalar,
}
