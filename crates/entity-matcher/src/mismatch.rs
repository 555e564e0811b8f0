//! Mismatch records and report rendering

use serde_json::Value;

/// One field whose expected and actual values differ.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub field: String,
    pub expected: Value,
    pub actual: Value,
}

impl Mismatch {
    /// One report line, with the field name left-justified to `width` so
    /// the `(expected:` columns of all lines align.
    fn report_line(&self, width: usize) -> String {
        format!(
            "\n\t-->{:<width$}\t(expected:{}, actual:{})",
            self.field,
            render_value(&self.expected),
            render_value(&self.actual),
        )
    }
}

/// Render a field value for a report: strings unquoted, nulls as the
/// `<null>` placeholder, everything else in its JSON form.
pub(crate) fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "<null>".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render the aggregated mismatch block: a count header plus one aligned
/// line per mismatch.
pub(crate) fn render_mismatches(mismatches: &[Mismatch]) -> String {
    let width = mismatches
        .iter()
        .map(|m| m.field.len())
        .max()
        .unwrap_or(0);

    let mut out = format!("got entity with {} invalid values [", mismatches.len());
    for (i, mismatch) in mismatches.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&mismatch.report_line(width));
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_value_forms() {
        assert_eq!(render_value(&Value::Null), "<null>");
        assert_eq!(render_value(&json!("Duck")), "Duck");
        assert_eq!(render_value(&json!(42)), "42");
        assert_eq!(render_value(&json!(true)), "true");
    }

    #[test]
    fn test_report_pads_to_longest_field_name() {
        let mismatches = vec![
            Mismatch {
                field: "age".to_string(),
                expected: json!(42),
                actual: json!(7),
            },
            Mismatch {
                field: "last_name".to_string(),
                expected: json!("Maier"),
                actual: json!("Mayer"),
            },
        ];

        let report = render_mismatches(&mismatches);
        assert!(report.starts_with("got entity with 2 invalid values ["));
        // "age" padded to the width of "last_name" (9 characters)
        assert!(report.contains("\n\t-->age      \t(expected:42, actual:7)"));
        assert!(report.contains("\n\t-->last_name\t(expected:Maier, actual:Mayer)"));
        assert!(report.ends_with(']'));
    }

    #[test]
    fn test_single_mismatch_report() {
        let mismatches = vec![Mismatch {
            field: "email".to_string(),
            expected: json!("daisy@example.com"),
            actual: Value::Null,
        }];

        let report = render_mismatches(&mismatches);
        assert!(report.contains("got entity with 1 invalid values"));
        assert!(report.contains("(expected:daisy@example.com, actual:<null>)"));
    }
}
