//! The entity matcher: construction modes, evaluation, and reporting

use serde::Serialize;
use tracing::{debug, trace};

use entity_fields::{FieldError, FieldMap, FieldSet};

use crate::mismatch::{render_mismatches, render_value, Mismatch};

/// One-line description of what any entity matcher expects.
const DESCRIPTION: &str = "an entity with specified property values";

/// Compares an expected instance against an actual one field by field,
/// collecting every mismatch instead of stopping at the first.
///
/// The expected instance is held by reference; its fields are snapshotted
/// once at construction. Mismatches accumulate across [`matches`] calls,
/// so a matcher is meant to be constructed, evaluated once inside a single
/// assertion, and discarded.
///
/// [`matches`]: EntityMatcher::matches
#[derive(Debug)]
pub struct EntityMatcher<'a, T: Serialize> {
    expected: &'a T,
    expected_fields: FieldMap,
    field_set: FieldSet,
    mismatches: Vec<Mismatch>,
}

impl<'a, T: Serialize> EntityMatcher<'a, T> {
    /// Matcher over every field of `expected`, directly declared and
    /// flattened alike.
    pub fn matching_all_fields(expected: &'a T) -> Result<Self, FieldError> {
        let expected_fields = FieldMap::of(expected)?;
        let field_set = expected_fields.names();
        Ok(Self::new(expected, expected_fields, field_set))
    }

    /// Matcher over every field of `expected` except the named ones.
    ///
    /// Excluding a name that does not exist on the type is a no-op.
    pub fn matching_all_fields_except(
        expected: &'a T,
        excluded: &[&str],
    ) -> Result<Self, FieldError> {
        let expected_fields = FieldMap::of(expected)?;
        let field_set = expected_fields.names().without(excluded.iter().copied());
        Ok(Self::new(expected, expected_fields, field_set))
    }

    /// Matcher over exactly the named fields.
    ///
    /// The names are not checked against the type at construction; a name
    /// that does not exist fails the evaluation with
    /// [`FieldError::NotFound`].
    pub fn matching_fields(expected: &'a T, names: &[&str]) -> Result<Self, FieldError> {
        let expected_fields = FieldMap::of(expected)?;
        let field_set = FieldSet::from_names(names.iter().copied());
        Ok(Self::new(expected, expected_fields, field_set))
    }

    fn new(expected: &'a T, expected_fields: FieldMap, field_set: FieldSet) -> Self {
        Self {
            expected,
            expected_fields,
            field_set,
            mismatches: Vec::new(),
        }
    }

    /// Evaluate `actual` against the expected instance.
    ///
    /// Visits the selected fields in ascending name order and records a
    /// [`Mismatch`] for every value that differs. Returns `Ok(true)` iff
    /// no mismatch has been recorded on this matcher. A missing or
    /// unreadable field aborts the whole evaluation with an error rather
    /// than being reported as one more mismatch.
    pub fn matches(&mut self, actual: &T) -> Result<bool, FieldError> {
        let actual_fields = FieldMap::of(actual)?;

        let mut found = Vec::new();
        for field in self.field_set.iter() {
            let actual_value = actual_fields.get(field)?;
            let expected_value = self.expected_fields.get(field)?;
            if actual_value != expected_value {
                trace!(field, "field value mismatch");
                found.push(Mismatch {
                    field: field.to_string(),
                    expected: expected_value.clone(),
                    actual: actual_value.clone(),
                });
            }
        }
        self.mismatches.extend(found);

        debug!(
            entity = self.expected_fields.type_name(),
            checked = self.field_set.len(),
            mismatched = self.mismatches.len(),
            "entity comparison finished"
        );
        Ok(self.mismatches.is_empty())
    }

    /// The mismatches accumulated so far, in field-name order per
    /// evaluation.
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    /// The field names this matcher compares.
    pub fn field_set(&self) -> &FieldSet {
        &self.field_set
    }

    pub fn description(&self) -> &'static str {
        DESCRIPTION
    }

    /// Render `instance` as `TypeName[field1=value1,field2=value2,...]`
    /// over the selected fields, in ascending name order. Null values
    /// render as `<null>`.
    pub fn describe_instance(&self, instance: &T) -> Result<String, FieldError> {
        let fields = FieldMap::of(instance)?;
        let mut parts = Vec::with_capacity(self.field_set.len());
        for field in self.field_set.iter() {
            parts.push(format!("{}={}", field, render_value(fields.get(field)?)));
        }
        Ok(format!("{}[{}]", fields.type_name(), parts.join(",")))
    }

    /// Render the full report for a failed match: the aggregated mismatch
    /// block (when any mismatch was recorded) followed by a details block
    /// describing both instances over the selected fields.
    pub fn describe_mismatch(&self, actual: &T) -> Result<String, FieldError> {
        let mut out = String::new();
        if !self.mismatches.is_empty() {
            out.push_str(&render_mismatches(&self.mismatches));
        }
        out.push_str("\n************\n Details:\n");
        out.push_str("\t\tActual properties: ");
        out.push_str(&self.describe_instance(actual)?);
        out.push_str("\n\t\tExpected properties:");
        out.push_str(&self.describe_instance(self.expected)?);
        Ok(out)
    }
}

/// Assert that `actual` matches, panicking with the full report otherwise.
///
/// This is the assertion-framework boundary for libtest: a failed match
/// panics with the matcher description and the aggregated mismatch report,
/// while a missing or unreadable field panics with the error itself,
/// keeping the two failure shapes distinct in test output.
pub fn assert_matches_entity<T: Serialize>(mut matcher: EntityMatcher<'_, T>, actual: &T) {
    match matcher.matches(actual) {
        Ok(true) => {}
        Ok(false) => {
            let report = matcher
                .describe_mismatch(actual)
                .unwrap_or_else(|err| err.to_string());
            panic!("\nExpected: {}\n     but: {}", matcher.description(), report);
        }
        Err(err) => panic!("entity comparison failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_field_set_resolution_per_mode() {
        let point = Point { x: 1, y: 2 };

        let all = EntityMatcher::matching_all_fields(&point).unwrap();
        assert_eq!(all.field_set().iter().collect::<Vec<_>>(), vec!["x", "y"]);

        let except = EntityMatcher::matching_all_fields_except(&point, &["y"]).unwrap();
        assert_eq!(except.field_set().iter().collect::<Vec<_>>(), vec!["x"]);

        let named = EntityMatcher::matching_fields(&point, &["y", "y", "x"]).unwrap();
        assert_eq!(named.field_set().iter().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_mismatches_accumulate_across_evaluations() {
        let expected = Point { x: 1, y: 2 };
        let actual = Point { x: 1, y: 3 };

        let mut matcher = EntityMatcher::matching_all_fields(&expected).unwrap();
        assert!(!matcher.matches(&actual).unwrap());
        assert_eq!(matcher.mismatches().len(), 1);

        // Single-use semantics: a second evaluation appends, never resets.
        assert!(!matcher.matches(&actual).unwrap());
        assert_eq!(matcher.mismatches().len(), 2);
    }

    #[test]
    fn test_mismatch_records_both_values() {
        let expected = Point { x: 1, y: 2 };
        let actual = Point { x: 5, y: 2 };

        let mut matcher = EntityMatcher::matching_all_fields(&expected).unwrap();
        assert!(!matcher.matches(&actual).unwrap());

        let mismatch = &matcher.mismatches()[0];
        assert_eq!(mismatch.field, "x");
        assert_eq!(mismatch.expected, json!(1));
        assert_eq!(mismatch.actual, json!(5));
    }

    #[test]
    fn test_describe_instance_renders_selected_fields() {
        let point = Point { x: 1, y: 2 };
        let matcher = EntityMatcher::matching_fields(&point, &["x"]).unwrap();
        assert_eq!(matcher.describe_instance(&point).unwrap(), "Point[x=1]");
    }
}
