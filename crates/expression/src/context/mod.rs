//! Context objects for field resolution
//!
//! A rule such as `min:$MinAge` reads `MinAge` from the object that owns the
//! value being validated. [`FieldLookup`] is the seam: anything that can map
//! a field name to a [`Value`] can serve as that object. Implementations are
//! provided for the common map types, for [`Value::Map`] and for
//! `serde_json` objects; structs can use [`field_lookup!`](crate::field_lookup)
//! or implement the trait by hand.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::value::{Value, ValueMap};

/// Name-based access to the members of a context object.
pub trait FieldLookup {
    /// Returns the member called `name`, or `None` if there is none.
    fn get_field(&self, name: &str) -> Option<Value>;
}

impl FieldLookup for Value {
    fn get_field(&self, name: &str) -> Option<Value> {
        self.as_map().and_then(|map| map.get(name).cloned())
    }
}

impl<S: BuildHasher> FieldLookup for IndexMap<String, Value, S> {
    fn get_field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl<S: BuildHasher> FieldLookup for HashMap<String, Value, S> {
    fn get_field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl FieldLookup for BTreeMap<String, Value> {
    fn get_field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// JSON members convert on access. A `null` member reads as missing and
/// `null` items nested inside a member are left out.
impl FieldLookup for serde_json::Map<String, serde_json::Value> {
    fn get_field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().and_then(Value::from_json_lossy)
    }
}

impl<T: FieldLookup + ?Sized> FieldLookup for Arc<T> {
    fn get_field(&self, name: &str) -> Option<Value> {
        (**self).get_field(name)
    }
}

impl<T: FieldLookup + ?Sized> FieldLookup for Box<T> {
    fn get_field(&self, name: &str) -> Option<Value> {
        (**self).get_field(name)
    }
}

/// Implements [`FieldLookup`] for a struct by listing its readable fields.
///
/// Each entry maps a context name to a struct field; the field is cloned and
/// converted with `Value::from`. A bare identifier uses the field name as the
/// context name.
///
/// ```
/// use runval_expression::{FieldLookup, Value, field_lookup};
///
/// struct User {
///     name: String,
///     age: i64,
/// }
///
/// field_lookup!(User { "Name" => name, "Age" => age });
///
/// let user = User { name: "Ann".into(), age: 30 };
/// assert_eq!(user.get_field("Age"), Some(Value::Int(30)));
/// assert_eq!(user.get_field("age"), None);
/// ```
#[macro_export]
macro_rules! field_lookup {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::FieldLookup for $ty {
            fn get_field(&self, name: &str) -> ::core::option::Option<$crate::Value> {
                $(if name == ::core::stringify!($field) {
                    return ::core::option::Option::Some($crate::Value::from(
                        ::core::clone::Clone::clone(&self.$field),
                    ));
                })+
                ::core::option::Option::None
            }
        }
    };
    ($ty:ty { $($key:literal => $field:ident),+ $(,)? }) => {
        impl $crate::FieldLookup for $ty {
            fn get_field(&self, name: &str) -> ::core::option::Option<$crate::Value> {
                match name {
                    $($key => ::core::option::Option::Some($crate::Value::from(
                        ::core::clone::Clone::clone(&self.$field),
                    )),)+
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}

// ============================================================================
// Context
// ============================================================================

/// A concrete, ordered context object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    fields: ValueMap,
}

impl Context {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for constructing contexts
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    /// Set a field, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Borrow a field
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Convert into a map value
    pub fn into_value(self) -> Value {
        Value::Map(self.fields)
    }
}

impl FieldLookup for Context {
    fn get_field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl From<ValueMap> for Context {
    fn from(fields: ValueMap) -> Self {
        Self { fields }
    }
}

/// Builder for creating contexts
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    fields: ValueMap,
}

impl ContextBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Build the context
    pub fn build(self) -> Context {
        Context {
            fields: self.fields,
        }
    }
}
