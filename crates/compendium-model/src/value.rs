//! Field values: plain text or a per-basis mapping.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::basis::Basis;

/// Stored value of one (category, item, field) slot.
///
/// Either a single string holding possibly-concatenated multi-basis text, or
/// a mapping from basis to string with at most one entry per basis. The
/// content resolver treats both shapes uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single string, possibly concatenating several basis-tagged spans.
    Text(String),
    /// One string per basis.
    PerBasis(BTreeMap<Basis, String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// A per-basis mapping with a single entry.
    pub fn single(basis: Basis, value: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(basis, value.into());
        FieldValue::PerBasis(entries)
    }

    /// Direct per-basis lookup. `None` for the plain-text shape.
    pub fn get(&self, basis: Basis) -> Option<&str> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::PerBasis(entries) => entries.get(&basis).map(String::as_str),
        }
    }

    /// Insert or replace the entry for one basis. A plain-text value is
    /// converted into a single-entry mapping first.
    pub fn insert(&mut self, basis: Basis, value: impl Into<String>) {
        match self {
            FieldValue::PerBasis(entries) => {
                entries.insert(basis, value.into());
            }
            FieldValue::Text(text) => {
                let mut entries = BTreeMap::new();
                entries.insert(Basis::All, std::mem::take(text));
                entries.insert(basis, value.into());
                *self = FieldValue::PerBasis(entries);
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl FromIterator<(Basis, String)> for FieldValue {
    fn from_iter<I: IntoIterator<Item = (Basis, String)>>(iter: I) -> Self {
        FieldValue::PerBasis(iter.into_iter().collect())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(text) => serializer.serialize_str(text),
            FieldValue::PerBasis(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (basis, value) in entries {
                    map.serialize_entry(basis, value)?;
                }
                map.end()
            }
        }
    }
}

/// Untagged deserialization: strings and maps keep their shape, scalars are
/// coerced to their text rendering, null becomes empty (hence invalid) text.
impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldValueVisitor;

        impl<'de> Visitor<'de> for FieldValueVisitor {
            type Value = FieldValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, scalar, or basis-to-string map")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(FieldValue::Text(value.to_string()))
            }

            fn visit_string<E: serde::de::Error>(self, value: String) -> Result<Self::Value, E> {
                Ok(FieldValue::Text(value))
            }

            fn visit_bool<E: serde::de::Error>(self, value: bool) -> Result<Self::Value, E> {
                Ok(FieldValue::Text(value.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(FieldValue::Text(value.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(FieldValue::Text(value.to_string()))
            }

            fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Ok(FieldValue::Text(value.to_string()))
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(FieldValue::Text(String::new()))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = BTreeMap::new();
                while let Some((basis, value)) = access.next_entry::<Basis, String>()? {
                    entries.insert(basis, value);
                }
                Ok(FieldValue::PerBasis(entries))
            }
        }

        deserializer.deserialize_any(FieldValueVisitor)
    }
}
