//! Serde helpers for sparse wire objects.
//!
//! Absent fields, JSON `null` and zero values all mean "unset" on the wire.

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser};

/// Returns true when an optional field is absent or holds its type's zero
/// value (`0`, `0.0`, `""`).
pub fn is_unset<T: Default + PartialEq>(value: &Option<T>) -> bool {
    value.as_ref().is_none_or(|v| *v == T::default())
}

/// Returns true for `false`.
pub fn is_false(value: &bool) -> bool {
    !*value
}

/// Deserializes a non-optional field, reading JSON `null` as the type's
/// zero value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Serializes an optional threshold, rejecting NaN and infinities which JSON
/// cannot represent.
pub fn serialize_finite<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) if !v.is_finite() => {
            Err(ser::Error::custom(format!("non-finite threshold {v} cannot be encoded")))
        }
        _ => value.serialize(serializer),
    }
}
