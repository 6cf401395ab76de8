//! Dynamic value model
//!
//! Every literal, field and function result flows through [`Value`]. The
//! variants mirror the kinds of data a rule can be applied to: signed and
//! unsigned integers, floats, booleans, strings, lists, string-keyed maps,
//! durations and timestamps.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;

use crate::error::{ExpressionError, ExpressionResult};

/// Ordered string-keyed map of values.
pub type ValueMap = IndexMap<String, Value>;

/// A dynamically typed value.
///
/// Equality is structural. Maps compare as sets of entries, independent of
/// insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed 64-bit integer
    Int(i64),
    /// Unsigned 64-bit integer
    Uint(u64),
    /// 64-bit float
    Float(f64),
    /// Boolean
    Bool(bool),
    /// UTF-8 text
    String(String),
    /// Ordered sequence
    List(Vec<Value>),
    /// String-keyed map
    Map(ValueMap),
    /// Elapsed time
    Duration(Duration),
    /// Point in time
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// Short lowercase name of the variant, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Duration(_) => "duration",
            Self::Timestamp(_) => "timestamp",
        }
    }

    /// Returns true when both values are the same variant.
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Borrows the string payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean payload.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrows the list payload.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrows the map payload.
    pub const fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns true for the zero value of the variant: `0`, `0.0`, `false`,
    /// `""`, an empty list or map, or a zero duration.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(n) => *n == 0,
            Self::Uint(n) => *n == 0,
            Self::Float(f) => *f == 0.0,
            Self::Bool(b) => !b,
            Self::String(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Map(map) => map.is_empty(),
            Self::Duration(d) => d.is_zero(),
            Self::Timestamp(ts) => ts.timestamp() == 0 && ts.timestamp_subsec_nanos() == 0,
        }
    }

    /// Converts into a JSON value.
    ///
    /// Durations become whole nanoseconds, timestamps RFC 3339 strings and
    /// non-finite floats `null`.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Self::Int(n) => Json::from(*n),
            Self::Uint(n) => Json::from(*n),
            Self::Float(f) => serde_json::Number::from_f64(*f).map_or(Json::Null, Json::Number),
            Self::Bool(b) => Json::Bool(*b),
            Self::String(s) => Json::String(s.clone()),
            Self::List(items) => Json::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(map) => Json::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Self::Duration(d) => Json::from(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)),
            Self::Timestamp(ts) => Json::String(ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Duration(d) => write!(f, "{d:?}"),
            Self::Timestamp(ts) => f.write_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_signed {
    ($($ty:ty),+) => {
        $(impl From<$ty> for Value {
            fn from(n: $ty) -> Self {
                Self::Int(i64::from(n))
            }
        })+
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),+) => {
        $(impl From<$ty> for Value {
            fn from(n: $ty) -> Self {
                Self::Uint(u64::from(n))
            }
        })+
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Self::Int(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::Uint(n as u64)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::String(c.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Self::Map(map)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Self::Duration(d)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl Value {
    /// Converts JSON into a [`Value`], leaving out every `null` array item
    /// and object member. A top-level `null` yields `None`.
    pub fn from_json_lossy(json: serde_json::Value) -> Option<Self> {
        use serde_json::Value as Json;

        match json {
            Json::Null => None,
            Json::Array(items) => Some(Self::List(
                items.into_iter().filter_map(Self::from_json_lossy).collect(),
            )),
            Json::Object(object) => Some(Self::Map(
                object
                    .into_iter()
                    .filter_map(|(key, value)| Self::from_json_lossy(value).map(|v| (key, v)))
                    .collect(),
            )),
            scalar => Self::try_from(scalar).ok(),
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ExpressionError;

    /// Converts JSON into a [`Value`]. Integers that fit `i64` become
    /// [`Value::Int`], larger ones [`Value::Uint`], the rest [`Value::Float`].
    /// `null` has no counterpart and is rejected.
    fn try_from(json: serde_json::Value) -> ExpressionResult<Self> {
        use serde_json::Value as Json;

        match json {
            Json::Null => Err(ExpressionError::UnsupportedJson("null".to_owned())),
            Json::Bool(b) => Ok(Self::Bool(b)),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Self::Uint(u))
                } else {
                    n.as_f64()
                        .map(Self::Float)
                        .ok_or_else(|| ExpressionError::UnsupportedJson(n.to_string()))
                }
            }
            Json::String(s) => Ok(Self::String(s)),
            Json::Array(items) => items
                .into_iter()
                .map(Self::try_from)
                .collect::<ExpressionResult<Vec<_>>>()
                .map(Self::List),
            Json::Object(object) => object
                .into_iter()
                .map(|(key, value)| Self::try_from(value).map(|v| (key, v)))
                .collect::<ExpressionResult<ValueMap>>()
                .map(Self::Map),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        value.to_json()
    }
}
