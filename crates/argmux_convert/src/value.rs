//! The result of converting one captured string against a constraint.

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use url::Url;
use uuid::Uuid;

/// A converted parameter or option value.
///
/// `Custom` carries whatever a registered custom converter or enum
/// resolver produced, type-erased; [`crate::FromCapture`] implementors
/// downcast it back to their concrete type.
#[derive(Debug, Clone)]
pub enum Value {
    Str(String),
    StrArray(Vec<String>),
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Char(char),
    Guid(Uuid),
    DateTime(NaiveDateTime),
    DateOnly(NaiveDate),
    TimeOnly(NaiveTime),
    TimeSpan(Duration),
    Uri(Url),
    IpAddr(IpAddr),
    Path(PathBuf),
    Custom(Arc<dyn std::any::Any + Send + Sync>),
}
