use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{json_type_name, ValidationError, Violation};

/// Reads typed fields out of a decoded JSON object, accumulating every
/// violation instead of bailing on the first.
///
/// Each record's `parse` reads its fields one call per field, then seals the
/// result with [`FieldReader::finish`]. A getter that hits a violation
/// records it and returns a placeholder; `finish` errors before any
/// placeholder can reach a constructed record.
#[derive(Debug)]
pub(crate) struct FieldReader<'a> {
    record: &'static str,
    fields: &'a Map<String, Value>,
    violations: Vec<Violation>,
}

impl<'a> FieldReader<'a> {
    pub fn new(record: &'static str, raw: &'a Value) -> Result<Self, ValidationError> {
        match raw.as_object() {
            Some(fields) => Ok(Self {
                record,
                fields,
                violations: Vec::new(),
            }),
            None => {
                let err = ValidationError::new(
                    record,
                    vec![Violation::NotAnObject {
                        found: json_type_name(raw),
                    }],
                );
                debug!("rejected payload: {}", err);
                Err(err)
            }
        }
    }

    /// Required string field.
    pub fn required_str(&mut self, field: &'static str) -> String {
        match self.fields.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                self.mismatch(field, "string", other);
                String::new()
            }
            None => {
                self.violations.push(Violation::MissingField { field });
                String::new()
            }
        }
    }

    /// Optional string field. Absent key and explicit null both read as None.
    pub fn optional_str(&mut self, field: &'static str) -> Option<String> {
        match self.fields.get(field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => {
                self.mismatch(field, "string", other);
                None
            }
        }
    }

    /// String field with a fallback applied only when the key is absent.
    /// An explicit null is a type mismatch, not a fallback.
    pub fn str_or_else(
        &mut self,
        field: &'static str,
        fallback: impl FnOnce() -> String,
    ) -> String {
        match self.fields.get(field) {
            Some(Value::String(s)) => s.clone(),
            None => fallback(),
            Some(other) => {
                self.mismatch(field, "string", other);
                String::new()
            }
        }
    }

    /// Optional array field with opaque elements.
    pub fn optional_list(&mut self, field: &'static str) -> Option<Vec<Value>> {
        match self.fields.get(field) {
            Some(Value::Array(items)) => Some(items.clone()),
            Some(Value::Null) | None => None,
            Some(other) => {
                self.mismatch(field, "array", other);
                None
            }
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            return Ok(());
        }
        let err = ValidationError::new(self.record, self.violations);
        debug!("rejected payload: {}", err);
        Err(err)
    }

    fn mismatch(&mut self, field: &'static str, expected: &'static str, found: &Value) {
        self.violations.push(Violation::TypeMismatch {
            field,
            expected,
            found: json_type_name(found),
        });
    }
}
