//! Field validation against declared constraints.

use std::collections::HashMap;

use regex::Regex;

use crate::condition::{evaluate_condition, field_is_visible};
use crate::field::{ConditionalEffect, FieldDefinition, FieldType};
use crate::values::FieldValues;

/// Checks every field's value against its declared constraints.
///
/// Returns a map containing an entry only for fields that fail, keyed by
/// field key — typically rendered next to the form inputs by the caller.
/// Rules apply per field in declaration order and short-circuit at the first
/// violation: required, then numeric bounds, then pattern. Fields hidden by
/// their conditional logic are exempt entirely.
///
/// # Example
///
/// ```rust
/// use dotphrase_engine::{
///     validate_field_values, FieldDefinition, FieldType, FieldValidation,
///     FieldValue, FieldValues,
/// };
///
/// let fields = vec![FieldDefinition::new("age", "Age", FieldType::Number)
///     .with_validation(FieldValidation {
///         required: true,
///         min: Some(18.0),
///         max: Some(65.0),
///         ..Default::default()
///     })];
/// let mut values = FieldValues::new();
/// values.insert("age".to_string(), FieldValue::Number(10.0));
///
/// let errors = validate_field_values(&fields, &values);
/// assert_eq!(errors.get("age").map(String::as_str), Some("Age must be at least 18"));
/// ```
pub fn validate_field_values(
    fields: &[FieldDefinition],
    values: &FieldValues,
) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    for field in fields {
        if !field_is_visible(field, values) {
            continue;
        }
        if let Some(message) = validate_field(field, values) {
            errors.insert(field.key.clone(), message);
        }
    }
    errors
}

/// First violated constraint for one field, if any.
fn validate_field(field: &FieldDefinition, values: &FieldValues) -> Option<String> {
    let value = values.get(&field.key);
    let present = value.map(|v| !v.is_empty()).unwrap_or(false);

    if is_required(field, values) && !present {
        return Some(format!("{} is required", field.label));
    }

    let validation = field.validation.as_ref()?;
    if !present {
        // Bounds and patterns only constrain values that exist.
        return None;
    }

    if field.field_type == FieldType::Number {
        if let Some(number) = value.and_then(|v| v.as_number()) {
            if let Some(min) = validation.min {
                if number < min {
                    return Some(format!("{} must be at least {}", field.label, min));
                }
            }
            if let Some(max) = validation.max {
                if number > max {
                    return Some(format!("{} must be at most {}", field.label, max));
                }
            }
        }
    }

    if let Some(pattern) = validation.pattern.as_deref() {
        // An invalid stored pattern never blocks documentation.
        if let Ok(regex) = Regex::new(pattern) {
            let text = value.map(|v| v.as_text()).unwrap_or_default();
            if !regex.is_match(&text) {
                return Some(match validation.message.as_deref() {
                    Some(custom) => custom.to_string(),
                    None => format!("{} does not match the expected format", field.label),
                });
            }
        }
    }

    None
}

/// Static `required` flag, or a `Require` effect whose condition holds.
fn is_required(field: &FieldDefinition, values: &FieldValues) -> bool {
    if field
        .validation
        .as_ref()
        .map(|v| v.required)
        .unwrap_or(false)
    {
        return true;
    }
    match &field.conditional_logic {
        Some(logic) if logic.effect == ConditionalEffect::Require => {
            evaluate_condition(&logic.rule, values)
        }
        _ => false,
    }
}
