//! Snapshot of an instance's fields taken through its `Serialize` impl

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{FieldError, FieldSet};

/// A snapshot of one instance's fields, keyed by field name.
///
/// Built once per instance from the type's `Serialize` impl, which acts as
/// a compile-time-generated field-name-to-value table: private fields are
/// included, and fields of `#[serde(flatten)]`-embedded structs appear
/// alongside the directly declared ones. Lookups therefore work uniformly
/// whether a field lives on the type itself or on a flattened component.
#[derive(Debug, Clone)]
pub struct FieldMap {
    type_name: &'static str,
    fields: Map<String, Value>,
}

impl FieldMap {
    /// Snapshot the fields of `instance`.
    ///
    /// Fails with [`FieldError::Unreadable`] if the instance cannot be
    /// serialized or does not serialize to a set of named fields. A struct
    /// with zero fields yields an empty map.
    pub fn of<T: Serialize>(instance: &T) -> Result<Self, FieldError> {
        let type_name = short_type_name::<T>();
        let value = serde_json::to_value(instance).map_err(|source| FieldError::Unreadable {
            type_name: type_name.to_string(),
            source,
        })?;
        match value {
            Value::Object(fields) => Ok(Self { type_name, fields }),
            _ => Err(FieldError::Unreadable {
                type_name: type_name.to_string(),
                source: serde_json::Error::custom("instance has no named fields"),
            }),
        }
    }

    /// The short name of the snapshotted type.
    pub fn type_name(&self) -> &str {
        self.type_name
    }

    /// Every field name, in ascending lexicographic order.
    pub fn names(&self) -> FieldSet {
        FieldSet::from_names(self.fields.keys().cloned())
    }

    /// Look up a field's current value by name.
    pub fn get(&self, field: &str) -> Result<&Value, FieldError> {
        self.fields.get(field).ok_or_else(|| FieldError::NotFound {
            field: field.to_string(),
            type_name: self.type_name.to_string(),
        })
    }
}

/// Final path segment of `std::any::type_name`, e.g. `Person` for
/// `my_crate::fixtures::Person`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    match full.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
