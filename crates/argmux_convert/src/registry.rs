//! Custom converters and enum-by-name resolution, layered on top of the
//! built-in static dispatch.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::builtin::convert_builtin;
use crate::Value;

type ConvertFn = dyn Fn(&str) -> Option<Value> + Send + Sync;

/// A Rust enum that can be resolved from a pattern's `{name:tag}`
/// constraint by case-insensitive variant name, without the host writing
/// a converter by hand for every enum type.
pub trait EnumConstraint: Sized + Send + Sync + 'static {
    /// All variant names, in declaration order, exactly as they should be
    /// matched (matching itself is case-insensitive).
    fn variant_names() -> &'static [&'static str];

    /// Resolve a case-insensitive variant name, or `None` if it names no
    /// variant.
    fn from_name(name: &str) -> Option<Self>;
}

/// Converters beyond the built-in constraint set: custom closures keyed
/// by constraint tag, and enums registered via [`EnumConstraint`].
///
/// Built once by the host at setup time (mirroring `EndpointCollection`'s
/// lifecycle), then read-only for the remainder of the process — nothing
/// here is implicitly global.
#[derive(Default, Clone)]
pub struct TypeConverterRegistry {
    custom: FxHashMap<String, Arc<ConvertFn>>,
}

impl TypeConverterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom converter for `target_type`. Idempotent: a
    /// second registration for the same tag replaces the first.
    pub fn add_type_converter<F>(&mut self, target_type: impl Into<String>, converter: F)
    where
        F: Fn(&str) -> Option<Value> + Send + Sync + 'static,
    {
        self.custom.insert(target_type.into(), Arc::new(converter));
    }

    /// Register an [`EnumConstraint`] type under `target_type`, resolved
    /// by case-insensitive variant name.
    pub fn add_enum<E: EnumConstraint>(&mut self, target_type: impl Into<String>) {
        self.add_type_converter(target_type, |raw: &str| {
            E::from_name(raw).map(|v| Value::Custom(Arc::new(v)))
        });
    }

    /// Convert `raw` against `constraint`. `None` constraint always
    /// succeeds with a verbatim string. Built-ins are tried first, then
    /// the custom/enum registry.
    #[must_use]
    pub fn convert(&self, constraint: Option<&str>, raw: &str) -> Option<Value> {
        let Some(tag) = constraint else {
            return Some(Value::Str(raw.to_string()));
        };
        convert_builtin(tag, raw).or_else(|| self.custom.get(tag).and_then(|f| f(raw)))
    }
}
