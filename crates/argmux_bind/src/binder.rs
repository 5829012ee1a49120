//! Typed extraction of one match's bindings against its route.

use argmux_convert::{FromCapture, TypeConverterRegistry};
use argmux_diagnostic::BindError;
use argmux_route::{Bindings, CompiledRoute, PositionalMatcher};

/// Binds the captured strings of one successful match to typed values, in
/// the declaration order a handler asks for them.
///
/// Holds the matched route (to look up each parameter's declared
/// constraint and to detect catch-all misuse), the bindings themselves,
/// and the registry that resolves constraint tags to converters. None of
/// the three are mutated or consumed — a `Binder` can be built and
/// queried any number of times for one match.
pub struct Binder<'a> {
    route: &'a CompiledRoute,
    bindings: &'a Bindings,
    registry: &'a TypeConverterRegistry,
}

impl<'a> Binder<'a> {
    #[must_use]
    pub fn new(route: &'a CompiledRoute, bindings: &'a Bindings, registry: &'a TypeConverterRegistry) -> Self {
        Self {
            route,
            bindings,
            registry,
        }
    }

    /// A required, scalar handler argument. Fails if the binding is
    /// absent, or if its raw string can't be converted against the
    /// parameter's declared constraint (or downcast to `T`).
    ///
    /// # Errors
    ///
    /// Returns [`BindError::MissingRequiredBinding`], [`BindError::ConversionFailed`],
    /// or [`BindError::CatchAllBindToScalar`].
    pub fn required<T: FromCapture>(&self, name: &str) -> Result<T, BindError> {
        if self.is_catch_all(name) {
            return Err(BindError::CatchAllBindToScalar);
        }
        let raw = self
            .bindings
            .get(name)
            .ok_or_else(|| BindError::MissingRequiredBinding(name.to_string()))?;
        self.convert(name, raw)
    }

    /// An optional, scalar handler argument. Absent bindings yield `None`;
    /// so does a binding present but unconvertible — only [`Self::required`]
    /// turns a conversion failure into an error.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::CatchAllBindToScalar`] if `name` names this
    /// route's catch-all parameter.
    pub fn optional<T: FromCapture>(&self, name: &str) -> Result<Option<T>, BindError> {
        if self.is_catch_all(name) {
            return Err(BindError::CatchAllBindToScalar);
        }
        let Some(raw) = self.bindings.get(name) else {
            return Ok(None);
        };
        let constraint = self.constraint_for(name);
        Ok(self
            .registry
            .convert(constraint.as_deref(), raw)
            .and_then(|value| T::from_capture(&value)))
    }

    /// [`Self::optional`], falling back to `default` when the binding is
    /// absent or fails to convert.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::CatchAllBindToScalar`] if `name` names this
    /// route's catch-all parameter.
    pub fn optional_or<T: FromCapture>(&self, name: &str, default: T) -> Result<T, BindError> {
        Ok(self.optional(name)?.unwrap_or(default))
    }

    /// A catch-all or repeated-option binding, split on the single-space
    /// wire format the resolver writes, dropping empty segments. Absent
    /// bindings yield an empty vector.
    #[must_use]
    pub fn array(&self, name: &str) -> Vec<String> {
        self.bindings
            .get(name)
            .unwrap_or("")
            .split(' ')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// A boolean flag option's presence. Absent optional flags were bound
    /// to the literal string `"false"` by the resolver; this just reads
    /// that back without going through the converter registry, since flags
    /// never carry a declared constraint.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.bindings.get(name).is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    fn convert<T: FromCapture>(&self, name: &str, raw: &str) -> Result<T, BindError> {
        let constraint = self.constraint_for(name);
        tracing::trace!(parameter = name, constraint = constraint.as_deref(), "binding parameter");
        self.registry
            .convert(constraint.as_deref(), raw)
            .and_then(|value| T::from_capture(&value))
            .ok_or_else(|| BindError::ConversionFailed {
                value: raw.to_string(),
                target_type: constraint.unwrap_or_else(|| "string".to_string()),
            })
    }

    fn is_catch_all(&self, name: &str) -> bool {
        self.route.positional_matchers.iter().any(|m| {
            matches!(m, PositionalMatcher::Parameter(p) if p.catch_all && p.name.eq_ignore_ascii_case(name))
        })
    }

    /// The constraint tag declared for `name`, whether it names a
    /// positional parameter or an option's value placeholder.
    fn constraint_for(&self, name: &str) -> Option<String> {
        for m in &self.route.positional_matchers {
            if let PositionalMatcher::Parameter(p) = m {
                if p.name.eq_ignore_ascii_case(name) {
                    return p.constraint.clone();
                }
            }
        }
        self.route
            .option_matchers
            .iter()
            .find(|o| o.binding_name().eq_ignore_ascii_case(name))
            .and_then(|o| o.value_constraint.clone())
    }
}
