//! Aggregated field-by-field entity matching for test assertions
//!
//! Compares an "expected" and an "actual" instance of the same type and
//! reports every differing field at once instead of stopping at the first
//! difference. Three selection modes are available:
//!
//! 1. [`EntityMatcher::matching_all_fields`] checks every field of the
//!    expected instance
//! 2. [`EntityMatcher::matching_all_fields_except`] checks every field
//!    except the named ones
//! 3. [`EntityMatcher::matching_fields`] checks only the named fields
//!
//! A failed match renders a report like:
//!
//! ```text
//! Expected: an entity with specified property values
//!      but: got entity with 2 invalid values [
//!      -->age      	(expected:42, actual:7),
//!      -->last_name	(expected:Maier, actual:Mayer)]
//! ************
//!  Details:
//!      Actual properties: Person[age=7,email=<null>,first_name=Hans,last_name=Mayer]
//!      Expected properties:Person[age=42,email=<null>,first_name=Hans,last_name=Maier]
//! ```

mod matcher;
mod mismatch;

pub use entity_fields::{FieldError, FieldMap, FieldSet};
pub use matcher::{assert_matches_entity, EntityMatcher};
pub use mismatch::Mismatch;
