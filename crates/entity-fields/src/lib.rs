//! Field introspection for struct instances
//!
//! This crate provides the building blocks for field-by-field entity
//! comparison: [`FieldMap`] snapshots an instance's fields by name through
//! its `Serialize` impl, and [`FieldSet`] is a deterministic, sorted list
//! of field names selecting which fields a comparison will look at.
//!
//! Fields of embedded structs marked `#[serde(flatten)]` appear alongside
//! the directly declared ones, so lookups work the same whether a field is
//! declared on the type itself or contributed by a flattened component.

mod error;
mod field_map;
mod field_set;

pub use error::FieldError;
pub use field_map::FieldMap;
pub use field_set::FieldSet;
