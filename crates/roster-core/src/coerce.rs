//! Lenient deserializers used at the serialization edge.
//!
//! Clients encode the active flag as a JSON boolean, as `0`/`1`, or as free
//! text, and form-driven clients send numbers as strings. These helpers
//! canonicalize those encodings while the domain keeps plain `bool`/`i32`.

use crate::EmployeeId;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// Parses a textual active flag.
///
/// Accepts `true/false`, `1/0`, `yes/no` and `active/inactive`,
/// case-insensitively and ignoring surrounding whitespace.
#[must_use]
pub fn parse_active_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "active" => Some(true),
        "false" | "0" | "no" | "inactive" => Some(false),
        _ => None,
    }
}

/// Deserializes an active flag from a boolean, `0`/`1`, or text.
pub fn active_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ActiveFlagVisitor)
}

/// Deserializes an `i32` from a JSON number or a string holding an integer.
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientI32Visitor)
}

/// Deserializes an `i64` from a JSON number or a string holding an integer.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientI64Visitor)
}

/// Deserializes an optional employee id echo.
///
/// `null` and an absent field are `None`; `1` and `"1"` address the same
/// record.
pub fn optional_employee_id<'de, D>(deserializer: D) -> Result<Option<EmployeeId>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<LenientI64>::deserialize(deserializer)?;
    Ok(id.map(|LenientI64(value)| EmployeeId::new(value)))
}

struct LenientI64(i64);

impl<'de> Deserialize<'de> for LenientI64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient_i64(deserializer).map(Self)
    }
}

struct ActiveFlagVisitor;

impl<'de> Visitor<'de> for ActiveFlagVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, 0 or 1, or one of \"true\", \"false\", \"active\", \"inactive\"")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
        match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
        match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        parse_active_flag(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

struct LenientI32Visitor;

impl<'de> Visitor<'de> for LenientI32Visitor {
    type Value = i32;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
        i32::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
        i32::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
        if v.fract() == 0.0 && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX) {
            #[allow(clippy::cast_possible_truncation)]
            Ok(v as i32)
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
        v.trim()
            .parse::<i32>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

struct LenientI64Visitor;

impl<'de> Visitor<'de> for LenientI64Visitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            #[allow(clippy::cast_possible_truncation)]
            Ok(v as i64)
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.trim()
            .parse::<i64>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}
