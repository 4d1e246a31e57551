//! Reusable field filters
//!
//! These filters transform payload field values before validation

use serde_json::Value;

/// A filter bound to one top-level payload field
#[derive(Debug, Clone, Copy)]
pub struct FilterRule {
    pub field: &'static str,
    pub filter: fn(Value) -> Value,
}

impl FilterRule {
    pub const fn new(field: &'static str, filter: fn(Value) -> Value) -> Self {
        Self { field, filter }
    }
}

/// Filter: trim whitespace from string
pub fn trim(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        other => other,
    }
}

/// Apply every rule whose field is present in the payload
///
/// Non-object payloads and absent fields are left untouched.
pub fn apply(mut payload: Value, rules: &[FilterRule]) -> Value {
    if let Some(obj) = payload.as_object_mut() {
        for rule in rules {
            if let Some(value) = obj.remove(rule.field) {
                obj.insert(rule.field.to_string(), (rule.filter)(value));
            }
        }
    }
    payload
}
