//! Field-level validation result types.
//!
//! Rule checks from the `validator` derive and hand-written membership checks
//! both end up as [`FieldViolation`]s so callers see one uniform list.

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Wire name of the offending field (`projectType`, not `project_type`).
    pub field: String,
    pub rule_type: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        rule_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            rule_type: rule_type.into(),
            message: message.into(),
        }
    }
}

/// Flatten `validator` errors into violations.
///
/// Keeps only the first error reported for each field, so a field never
/// shows more than one message at a time.
pub fn violations_from(errors: &ValidationErrors) -> Vec<FieldViolation> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                FieldViolation::new(field.to_string(), err.code.to_string(), message)
            })
        })
        .collect()
}

/// Check that `value` is one of the `allowed` option values.
///
/// Returns a `one_of` violation for `field` otherwise. An empty value is
/// treated like any other non-member: the select was left on its placeholder.
pub fn check_one_of(
    field: &str,
    value: &str,
    allowed: &[SelectOption],
    message: &str,
) -> Option<FieldViolation> {
    if allowed.iter().any(|opt| opt.value == value) {
        None
    } else {
        Some(FieldViolation::new(field, "one_of", message))
    }
}

/// One entry of an enumerated select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}
