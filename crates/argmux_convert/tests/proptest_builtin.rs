//! Property-based round-trip tests for the built-in constraint
//! conversions, run against the public `TypeConverterRegistry` surface.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use argmux_convert::{FromCapture, TypeConverterRegistry};
use proptest::prelude::*;

proptest! {
    /// Any `i32` rendered as decimal text round-trips through the `int`
    /// constraint unchanged.
    #[test]
    fn int_round_trips(n in any::<i32>()) {
        let registry = TypeConverterRegistry::new();
        let value = registry.convert(Some("int"), &n.to_string()).expect("valid i32 text always converts");
        prop_assert_eq!(i32::from_capture(&value), Some(n));
    }

    /// Any finite `f64` rendered with `to_string` round-trips through the
    /// `double` constraint unchanged.
    #[test]
    fn double_round_trips(n in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
        let registry = TypeConverterRegistry::new();
        let value = registry.convert(Some("double"), &n.to_string()).expect("valid f64 text always converts");
        prop_assert_eq!(f64::from_capture(&value), Some(n));
    }

    /// Booleans round-trip through the `bool` constraint.
    #[test]
    fn bool_round_trips(b in any::<bool>()) {
        let registry = TypeConverterRegistry::new();
        let value = registry.convert(Some("bool"), &b.to_string()).expect("valid bool text always converts");
        prop_assert_eq!(bool::from_capture(&value), Some(b));
    }

    /// An unknown constraint tag never converts, with no registered
    /// custom converter to fall back on.
    #[test]
    fn unknown_constraint_never_converts(tag in "[a-z]{3,10}", raw in "[a-zA-Z0-9]{0,10}") {
        prop_assume!(!matches!(
            tag.as_str(),
            "int" | "long" | "short" | "byte" | "sbyte" | "ushort" | "uint" | "ulong"
                | "float" | "double" | "decimal" | "bool" | "char" | "guid" | "datetime"
                | "dateonly" | "timeonly" | "timespan" | "uri" | "ipaddress" | "fileinfo"
                | "directoryinfo"
        ));
        let registry = TypeConverterRegistry::new();
        prop_assert!(registry.convert(Some(&tag), &raw).is_none());
    }
}
