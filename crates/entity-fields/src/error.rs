//! Error type for field lookup and introspection failures

use thiserror::Error;

/// Error type for field introspection failures
///
/// Both variants are fatal to the comparison that triggered them; they are
/// never downgraded to an ordinary value mismatch.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The requested field name does not exist on the target type.
    #[error("field '{field}' not found in type '{type_name}'")]
    NotFound { field: String, type_name: String },

    /// The instance's fields could not be read at all.
    #[error("cannot read fields from entity '{type_name}': {source}")]
    Unreadable {
        type_name: String,
        #[source]
        source: serde_json::Error,
    },
}
