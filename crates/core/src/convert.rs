//! Conversion between [`Value`] and typed Rust values
//!
//! [`VariableValue`] is the type-indexed conversion registry: every type a
//! descriptor can carry implements it, and adapters call it on every `get`
//! and `set`. Built-in implementations cover scalars, dates, bytes,
//! `Option`, lists, sets and string-keyed maps. Any other
//! `Serialize + DeserializeOwned` type opts in with [`serde_variable!`].
//!
//! Conversions never coerce across `Value` variants: an `Int` does not read
//! as `f64`, and a `String` does not read as `i64`. Narrowing integer reads
//! (`i16`, `i32`) are range-checked.

use crate::error::ConversionError;
use crate::value::Value;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::TypeId;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

/// A type that can be stored in an engine variable
pub trait VariableValue: Sized + 'static {
    /// Name used in diagnostics and in the descriptor's type tag
    ///
    /// Defaults to the Rust type name with module paths stripped, so
    /// `Option<alloc::string::String>` reads as `Option<String>`.
    fn type_name() -> &'static str {
        short_type_name::<Self>()
    }

    /// Convert into the backend's untyped representation
    fn into_value(self) -> Result<Value, ConversionError>;

    /// Convert from the backend's untyped representation
    fn from_value(value: &Value) -> Result<Self, ConversionError>;

    /// What an absent entry reads as
    ///
    /// `None` means absence is an error for this type. Nullable types
    /// (`Option<T>`) return `Some(None)`.
    fn absent() -> Option<Self> {
        None
    }
}

static SHORT_TYPE_NAMES: Lazy<RwLock<HashMap<TypeId, &'static str>>> = Lazy::new(Default::default);

/// `std::any::type_name` without module paths, interned per type
pub fn short_type_name<T: ?Sized + 'static>() -> &'static str {
    let id = TypeId::of::<T>();
    if let Some(name) = SHORT_TYPE_NAMES.read().get(&id).copied() {
        return name;
    }
    let short: &'static str = Box::leak(strip_paths(std::any::type_name::<T>()).into_boxed_str());
    *SHORT_TYPE_NAMES.write().entry(id).or_insert(short)
}

fn strip_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    for (i, c) in full.char_indices() {
        if !(c.is_alphanumeric() || c == '_' || c == ':') {
            push_last_segment(&mut out, &full[segment_start..i]);
            out.push(c);
            segment_start = i + c.len_utf8();
        }
    }
    push_last_segment(&mut out, &full[segment_start..]);
    out
}

fn push_last_segment(out: &mut String, path: &str) {
    out.push_str(path.rsplit("::").next().unwrap_or(path));
}

fn mismatch<T: VariableValue>(value: &Value) -> ConversionError {
    ConversionError::new(T::type_name(), value.type_name())
}

impl VariableValue for Value {
    fn type_name() -> &'static str {
        "Value"
    }

    fn into_value(self) -> Result<Value, ConversionError> {
        Ok(self)
    }

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        Ok(value.clone())
    }
}

impl VariableValue for bool {
    fn into_value(self) -> Result<Value, ConversionError> {
        Ok(Value::Bool(self))
    }

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value.as_bool().ok_or_else(|| mismatch::<Self>(value))
    }
}

impl VariableValue for i64 {
    fn into_value(self) -> Result<Value, ConversionError> {
        Ok(Value::Int(self))
    }

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value.as_int().ok_or_else(|| mismatch::<Self>(value))
    }
}

macro_rules! narrow_int_variable {
    ($($ty:ty),+) => {$(
        impl VariableValue for $ty {
            fn into_value(self) -> Result<Value, ConversionError> {
                Ok(Value::Int(i64::from(self)))
            }

            fn from_value(value: &Value) -> Result<Self, ConversionError> {
                let wide = value.as_int().ok_or_else(|| mismatch::<Self>(value))?;
                <$ty>::try_from(wide).map_err(|_| {
                    ConversionError::new(Self::type_name(), format!("Int({}) out of range", wide))
                })
            }
        }
    )+};
}

narrow_int_variable!(i16, i32);

impl VariableValue for f64 {
    fn into_value(self) -> Result<Value, ConversionError> {
        Ok(Value::Float(self))
    }

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value.as_float().ok_or_else(|| mismatch::<Self>(value))
    }
}

impl VariableValue for String {
    fn type_name() -> &'static str {
        "String"
    }

    fn into_value(self) -> Result<Value, ConversionError> {
        Ok(Value::String(self))
    }

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch::<Self>(value))
    }
}

impl VariableValue for DateTime<Utc> {
    fn type_name() -> &'static str {
        "DateTime<Utc>"
    }

    fn into_value(self) -> Result<Value, ConversionError> {
        Ok(Value::Date(self))
    }

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value.as_date().ok_or_else(|| mismatch::<Self>(value))
    }
}

/// Binary payload stored as [`Value::Bytes`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bytes(pub Vec<u8>);

impl VariableValue for Bytes {
    fn type_name() -> &'static str {
        "Bytes"
    }

    fn into_value(self) -> Result<Value, ConversionError> {
        Ok(Value::Bytes(self.0))
    }

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value
            .as_bytes()
            .map(|b| Bytes(b.to_vec()))
            .ok_or_else(|| mismatch::<Self>(value))
    }
}

impl<T: VariableValue> VariableValue for Option<T> {
    fn into_value(self) -> Result<Value, ConversionError> {
        match self {
            Some(v) => v.into_value(),
            None => Ok(Value::Null),
        }
    }

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }

    fn absent() -> Option<Self> {
        Some(None)
    }
}

fn array_items<'v, T: VariableValue>(value: &'v Value) -> Result<&'v [Value], ConversionError> {
    value.as_array().ok_or_else(|| mismatch::<T>(value))
}

fn object_entries<'v, T: VariableValue>(
    value: &'v Value,
) -> Result<&'v BTreeMap<String, Value>, ConversionError> {
    value.as_object().ok_or_else(|| mismatch::<T>(value))
}

impl<T: VariableValue> VariableValue for Vec<T> {
    fn into_value(self) -> Result<Value, ConversionError> {
        self.into_iter()
            .map(T::into_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        array_items::<Self>(value)?.iter().map(T::from_value).collect()
    }
}

impl<T: VariableValue + Ord> VariableValue for BTreeSet<T> {
    fn into_value(self) -> Result<Value, ConversionError> {
        self.into_iter()
            .map(T::into_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        array_items::<Self>(value)?.iter().map(T::from_value).collect()
    }
}

impl<T: VariableValue + Eq + Hash> VariableValue for HashSet<T> {
    fn into_value(self) -> Result<Value, ConversionError> {
        self.into_iter()
            .map(T::into_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        array_items::<Self>(value)?.iter().map(T::from_value).collect()
    }
}

impl<V: VariableValue> VariableValue for BTreeMap<String, V> {
    fn into_value(self) -> Result<Value, ConversionError> {
        self.into_iter()
            .map(|(k, v)| v.into_value().map(|v| (k, v)))
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Value::Object)
    }

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        object_entries::<Self>(value)?
            .iter()
            .map(|(k, v)| V::from_value(v).map(|v| (k.clone(), v)))
            .collect()
    }
}

impl<V: VariableValue> VariableValue for HashMap<String, V> {
    fn into_value(self) -> Result<Value, ConversionError> {
        self.into_iter()
            .map(|(k, v)| v.into_value().map(|v| (k, v)))
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Value::Object)
    }

    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        object_entries::<Self>(value)?
            .iter()
            .map(|(k, v)| V::from_value(v).map(|v| (k.clone(), v)))
            .collect()
    }
}

/// Serialize any serde type into a [`Value`] through `serde_json`
///
/// Used by [`serde_variable!`]; call it directly when implementing
/// [`VariableValue`] by hand.
///
/// Fails instead of storing a lossy value: integers outside the `i64`
/// range and types serializing to a bare `null` are rejected.
pub fn to_value_via_serde<T: Serialize + VariableValue>(value: &T) -> Result<Value, ConversionError> {
    let json = serde_json::to_value(value)
        .map_err(|e| ConversionError::new(T::type_name(), format!("unserializable ({})", e)))?;
    if json.is_null() {
        return Err(ConversionError::new(T::type_name(), "null"));
    }
    check_representable(&json).map_err(|actual| ConversionError::new(T::type_name(), actual))?;
    Ok(Value::from_json(&json))
}

/// Reject numbers that would not survive the trip through [`Value`]
fn check_representable(json: &serde_json::Value) -> Result<(), String> {
    use serde_json::Value as Json;
    match json {
        Json::Number(n) if !(n.is_i64() || n.is_f64()) => {
            Err(format!("integer {} outside the Int range", n))
        }
        Json::Array(items) => items.iter().try_for_each(check_representable),
        Json::Object(fields) => fields.values().try_for_each(check_representable),
        _ => Ok(()),
    }
}

/// Deserialize any serde type from a [`Value`] through `serde_json`
pub fn from_value_via_serde<T: DeserializeOwned + VariableValue>(
    value: &Value,
) -> Result<T, ConversionError> {
    serde_json::from_value(value.to_json())
        .map_err(|e| ConversionError::new(T::type_name(), format!("{} ({})", value.type_name(), e)))
}

/// Implement [`VariableValue`] for serde types
///
/// The type is stored as a structured [`Value`] (usually an `Object`), so
/// other clients of the engine can still read its fields.
///
/// ```
/// use bpmdata_core::{serde_variable, VariableValue};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Order {
///     id: String,
/// }
///
/// serde_variable!(Order);
///
/// let value = Order { id: "1".into() }.into_value().unwrap();
/// assert_eq!(Order::from_value(&value).unwrap(), Order { id: "1".into() });
/// ```
#[macro_export]
macro_rules! serde_variable {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::VariableValue for $ty {
            fn into_value(self) -> ::std::result::Result<$crate::Value, $crate::ConversionError> {
                $crate::convert::to_value_via_serde(&self)
            }

            fn from_value(
                value: &$crate::Value,
            ) -> ::std::result::Result<Self, $crate::ConversionError> {
                $crate::convert::from_value_via_serde(value)
            }
        }
    )+};
}
