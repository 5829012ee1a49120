//! Built-in constraint names, resolved by a compile-time switch rather
//! than a registry lookup — per the concurrency model, these allocate
//! nothing beyond the converted value itself.

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use url::Url;
use uuid::Uuid;

use crate::Value;

/// `decimal` has no dedicated arbitrary-precision crate in this stack; it
/// is treated as `double`. See the design notes for this tradeoff.
pub(crate) fn convert_builtin(tag: &str, raw: &str) -> Option<Value> {
    if tag.eq_ignore_ascii_case("int") {
        return raw.parse::<i32>().ok().map(Value::I32);
    }
    if tag.eq_ignore_ascii_case("long") {
        return raw.parse::<i64>().ok().map(Value::I64);
    }
    if tag.eq_ignore_ascii_case("short") {
        return raw.parse::<i16>().ok().map(Value::I16);
    }
    if tag.eq_ignore_ascii_case("byte") {
        return raw.parse::<u8>().ok().map(Value::U8);
    }
    if tag.eq_ignore_ascii_case("sbyte") {
        return raw.parse::<i8>().ok().map(Value::I8);
    }
    if tag.eq_ignore_ascii_case("ushort") {
        return raw.parse::<u16>().ok().map(Value::U16);
    }
    if tag.eq_ignore_ascii_case("uint") {
        return raw.parse::<u32>().ok().map(Value::U32);
    }
    if tag.eq_ignore_ascii_case("ulong") {
        return raw.parse::<u64>().ok().map(Value::U64);
    }
    if tag.eq_ignore_ascii_case("float") {
        return raw.parse::<f32>().ok().map(Value::F32);
    }
    if tag.eq_ignore_ascii_case("double") || tag.eq_ignore_ascii_case("decimal") {
        return raw.parse::<f64>().ok().map(Value::F64);
    }
    if tag.eq_ignore_ascii_case("bool") {
        return raw.parse::<bool>().ok().map(Value::Bool);
    }
    if tag.eq_ignore_ascii_case("char") {
        let mut chars = raw.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        return Some(Value::Char(first));
    }
    if tag.eq_ignore_ascii_case("guid") {
        return Uuid::parse_str(raw).ok().map(Value::Guid);
    }
    if tag.eq_ignore_ascii_case("datetime") {
        return NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .map(Value::DateTime);
    }
    if tag.eq_ignore_ascii_case("dateonly") {
        return NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().map(Value::DateOnly);
    }
    if tag.eq_ignore_ascii_case("timeonly") {
        return NaiveTime::parse_from_str(raw, "%H:%M:%S").ok().map(Value::TimeOnly);
    }
    if tag.eq_ignore_ascii_case("timespan") {
        return raw
            .parse::<f64>()
            .ok()
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map(Duration::from_secs_f64)
            .map(Value::TimeSpan);
    }
    if tag.eq_ignore_ascii_case("uri") {
        return Url::parse(raw).ok().map(Value::Uri);
    }
    if tag.eq_ignore_ascii_case("ipaddress") {
        return raw.parse::<IpAddr>().ok().map(Value::IpAddr);
    }
    if tag.eq_ignore_ascii_case("fileinfo") || tag.eq_ignore_ascii_case("directoryinfo") {
        return Some(Value::Path(PathBuf::from(raw)));
    }
    None
}
