//! Downcasting a converted [`Value`] into a handler's expected Rust type.

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use url::Url;
use uuid::Uuid;

use crate::registry::EnumConstraint;
use crate::Value;

/// Implemented for every concrete type a handler parameter may bind to.
pub trait FromCapture: Sized {
    fn from_capture(value: &Value) -> Option<Self>;
}

macro_rules! from_capture_variant {
    ($ty:ty, $variant:ident) => {
        impl FromCapture for $ty {
            fn from_capture(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v.clone()),
                    _ => None,
                }
            }
        }
    };
}

from_capture_variant!(String, Str);
from_capture_variant!(Vec<String>, StrArray);
from_capture_variant!(bool, Bool);
from_capture_variant!(i8, I8);
from_capture_variant!(i16, I16);
from_capture_variant!(i32, I32);
from_capture_variant!(i64, I64);
from_capture_variant!(u8, U8);
from_capture_variant!(u16, U16);
from_capture_variant!(u32, U32);
from_capture_variant!(u64, U64);
from_capture_variant!(f32, F32);
from_capture_variant!(f64, F64);
from_capture_variant!(char, Char);
from_capture_variant!(Uuid, Guid);
from_capture_variant!(NaiveDateTime, DateTime);
from_capture_variant!(NaiveDate, DateOnly);
from_capture_variant!(NaiveTime, TimeOnly);
from_capture_variant!(Duration, TimeSpan);
from_capture_variant!(Url, Uri);
from_capture_variant!(IpAddr, IpAddr);
from_capture_variant!(PathBuf, Path);

impl<E: EnumConstraint + Clone> FromCapture for E {
    fn from_capture(value: &Value) -> Option<Self> {
        match value {
            Value::Custom(boxed) => boxed.downcast_ref::<E>().cloned(),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn string_roundtrips_from_str_value() {
        let value = Value::Str("hello".to_string());
        assert_eq!(String::from_capture(&value).as_deref(), Some("hello"));
    }

    #[test]
    fn int_mismatch_returns_none() {
        let value = Value::Str("hello".to_string());
        assert_eq!(i32::from_capture(&value), None);
    }

    #[test]
    fn i32_extracts_from_matching_variant() {
        let value = Value::I32(7);
        assert_eq!(i32::from_capture(&value), Some(7));
    }
}
