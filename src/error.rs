use serde_json::Value;
use thiserror::Error;

/// A single constraint failure found while validating a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}` must be a {expected}, got {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("payload must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}

/// Validation failure for one record, listing every violation found in the
/// payload rather than just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{record} rejected: {}", list_violations(.violations))]
pub struct ValidationError {
    pub record: &'static str,
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(record: &'static str, violations: Vec<Violation>) -> Self {
        Self { record, violations }
    }

    /// Names of the offending fields, in payload declaration order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations
            .iter()
            .filter_map(|v| match v {
                Violation::MissingField { field } => Some(*field),
                Violation::TypeMismatch { field, .. } => Some(*field),
                Violation::NotAnObject { .. } => None,
            })
            .collect()
    }
}

fn list_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
