//! String-to-typed-value conversion: the built-in constraint set, custom
//! converters, and enum-by-name resolution.
//!
//! Built-in constraints (`int`, `long`, `Guid`, `DateTime`, …) resolve via
//! a compile-time switch with no allocation beyond the converted value;
//! everything else goes through the registry's custom-converter map,
//! which a host builds once at setup time and never mutates again during
//! concurrent dispatch.

mod builtin;
mod from_capture;
mod registry;
mod value;

pub use from_capture::FromCapture;
pub use registry::{EnumConstraint, TypeConverterRegistry};
pub use value::Value;
