//! Coercions from [`Value`] into primitive targets
//!
//! Rule predicates and builtins accept loosely typed input: a `min:$Age`
//! bound may arrive as an int, a float or a numeric string. These helpers
//! define how each variant converts and fail with
//! [`ExpressionError::Coercion`] otherwise.

use chrono::DateTime;

use crate::error::{ExpressionError, ExpressionResult};
use crate::value::Value;

/// Length of a value: characters for strings, elements for lists and maps.
pub fn as_length(value: &Value) -> ExpressionResult<usize> {
    match value {
        Value::String(s) => Ok(s.chars().count()),
        Value::List(items) => Ok(items.len()),
        Value::Map(map) => Ok(map.len()),
        other => Err(ExpressionError::UnsupportedLength(other.type_name())),
    }
}

/// Converts to a signed 64-bit integer.
///
/// - integers convert directly, unsigned values failing above `i64::MAX`
/// - strings parse as integer literals with optional `0x`, `0o`, `0b` or
///   leading-zero octal prefix and `_` separators, falling back to an
///   RFC 3339 timestamp read as Unix seconds
/// - durations become nanoseconds, timestamps Unix seconds
///
/// Floats, booleans, lists and maps are rejected.
pub fn as_int64(value: &Value) -> ExpressionResult<i64> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Uint(n) => i64::try_from(*n).map_err(|_| ExpressionError::overflow(value, "int64")),
        Value::String(s) => parse_int_literal(s)
            .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|ts| ts.timestamp()))
            .ok_or_else(|| ExpressionError::coercion(value, "int64")),
        Value::Duration(d) => {
            i64::try_from(d.as_nanos()).map_err(|_| ExpressionError::overflow(value, "int64"))
        }
        Value::Timestamp(ts) => Ok(ts.timestamp()),
        _ => Err(ExpressionError::coercion(value, "int64")),
    }
}

/// Converts to a 64-bit float.
///
/// Numbers widen and strings parse as floats. Other variants are rejected.
pub fn as_float64(value: &Value) -> ExpressionResult<f64> {
    match value {
        Value::Int(n) => Ok(*n as f64),
        Value::Uint(n) => Ok(*n as f64),
        Value::Float(x) => Ok(*x),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ExpressionError::coercion(value, "float64")),
        _ => Err(ExpressionError::coercion(value, "float64")),
    }
}

/// Converts to text.
///
/// Strings pass through, scalars use their display form. Lists, maps,
/// durations and timestamps are rejected.
pub fn as_string(value: &Value) -> ExpressionResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Int(_) | Value::Uint(_) | Value::Float(_) | Value::Bool(_) => Ok(value.to_string()),
        _ => Err(ExpressionError::coercion(value, "string")),
    }
}

/// Parses an integer literal with base prefix detection.
///
/// Accepts an optional sign, then `0x`/`0X`, `0o`/`0O`, `0b`/`0B` or a
/// leading `0` for octal. Single underscores may separate digits.
pub fn parse_int_literal(text: &str) -> Option<i64> {
    let (negative, body) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = if let Some(rest) = strip_prefix_ci(body, "0x") {
        (16, rest)
    } else if let Some(rest) = strip_prefix_ci(body, "0o") {
        (8, rest)
    } else if let Some(rest) = strip_prefix_ci(body, "0b") {
        (2, rest)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body)
    };

    if digits.is_empty()
        || digits.starts_with(['+', '-', '_'])
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    let magnitude = u64::from_str_radix(&cleaned, radix).ok()?;

    if negative {
        0_i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}
