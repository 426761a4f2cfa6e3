//! The phrase expander: turns a template plus field values into finished
//! clinical text.

use std::collections::HashMap;

use dotphrase::{calculate_formula, extract_field_keys, replace_placeholders};

use crate::condition::{evaluate_condition, field_is_visible};
use crate::field::{ConditionalEffect, FieldDefinition, FieldType};
use crate::patient::PatientContext;
use crate::phrase::Phrase;
use crate::result::ExpansionResult;
use crate::sentence::generate_sentence_from_selections;
use crate::values::{numeric_inputs, FieldValue, FieldValues};

/// Expands a phrase template into finished clinical text.
///
/// Every placeholder resolves according to its field's type; placeholders
/// with no matching definition or value substitute empty text, so expansion
/// is total over partial input and never fails. The function is pure:
/// identical inputs always produce identical results.
///
/// # Example
///
/// ```rust
/// use dotphrase_engine::{
///     expand_phrase, FieldDefinition, FieldType, FieldValue, FieldValues,
///     PatientContext, Phrase,
/// };
///
/// let phrase = Phrase::new(
///     "Rounding Note",
///     ".round",
///     "Patient {{name}} is {{status}}. {{symptoms}}",
/// );
/// let fields = vec![
///     FieldDefinition::new("name", "Name", FieldType::PatientData),
///     FieldDefinition::new("status", "Status", FieldType::Text),
///     FieldDefinition::new("symptoms", "Symptoms", FieldType::Checkbox),
/// ];
/// let mut values = FieldValues::new();
/// values.insert("status".to_string(), FieldValue::from("stable"));
/// values.insert("symptoms".to_string(), FieldValue::from(vec!["cough", "no_fever"]));
/// let patient = PatientContext::new().with_text("name", "Alex Smith");
///
/// let result = expand_phrase(&phrase, &fields, &values, Some(&patient));
/// assert_eq!(
///     result.content,
///     "Patient Alex Smith is stable. Patient reports cough. Patient denies fever.",
/// );
/// ```
pub fn expand_phrase(
    phrase: &Phrase,
    fields: &[FieldDefinition],
    values: &FieldValues,
    patient: Option<&PatientContext>,
) -> ExpansionResult {
    let keys = extract_field_keys(&phrase.content);
    let definitions: HashMap<&str, &FieldDefinition> =
        fields.iter().map(|field| (field.key.as_str(), field)).collect();

    let mut substitutions: HashMap<String, String> = HashMap::new();
    let mut calculated_values: HashMap<String, f64> = HashMap::new();
    let mut used_fields: Vec<String> = Vec::new();

    for key in &keys {
        let substitution = match definitions.get(key.as_str()) {
            Some(field) => resolve_field(field, values, patient, &mut calculated_values),
            // No definition: fall back to the raw value so partial setups
            // still render what the user entered.
            None => values.get(key).map(FieldValue::as_text).unwrap_or_default(),
        };
        if !substitution.is_empty() {
            used_fields.push(key.clone());
        }
        substitutions.insert(key.clone(), substitution);
    }

    let content = replace_placeholders(&phrase.content, |key| substitutions.get(key).cloned());

    ExpansionResult {
        content,
        used_fields,
        calculated_values,
    }
}

/// Resolves one field's substitution text according to its type.
fn resolve_field(
    field: &FieldDefinition,
    values: &FieldValues,
    patient: Option<&PatientContext>,
    calculated_values: &mut HashMap<String, f64>,
) -> String {
    if !field_is_visible(field, values) {
        return String::new();
    }

    match field.field_type {
        FieldType::Text | FieldType::Dropdown | FieldType::Radio => resolved_text(field, values),
        FieldType::Number | FieldType::Date => values
            .get(&field.key)
            .filter(|value| !value.is_empty())
            .map(FieldValue::as_text)
            .unwrap_or_default(),
        FieldType::Checkbox => match values.get(&field.key) {
            Some(FieldValue::List(selected)) => generate_sentence_from_selections(selected),
            Some(value) if !value.is_empty() => {
                // A single scalar selection behaves as a one-element list.
                generate_sentence_from_selections(&[value.as_text()])
            }
            _ => String::new(),
        },
        FieldType::PatientData => {
            let path = field.source.as_deref().unwrap_or(&field.key);
            patient
                .and_then(|context| context.resolve_text(path))
                .unwrap_or_default()
        }
        FieldType::Calculation => match field.formula.as_deref() {
            Some(formula) => {
                let inputs = numeric_inputs(values);
                match calculate_formula(formula, &inputs) {
                    Some(result) => {
                        calculated_values.insert(field.key.clone(), result);
                        result.to_string()
                    }
                    // Missing inputs or a refused formula yield no value,
                    // not an error.
                    None => String::new(),
                }
            }
            None => String::new(),
        },
        FieldType::Conditional => resolve_conditional(field, values),
    }
}

/// Entered value, falling back to the declared default.
fn resolved_text(field: &FieldDefinition, values: &FieldValues) -> String {
    values
        .get(&field.key)
        .filter(|value| !value.is_empty())
        .map(FieldValue::as_text)
        .or_else(|| field.default_value.as_ref().map(FieldValue::as_text))
        .unwrap_or_default()
}

fn resolve_conditional(field: &FieldDefinition, values: &FieldValues) -> String {
    match &field.conditional_logic {
        Some(logic) => {
            let holds = evaluate_condition(&logic.rule, values);
            match &logic.effect {
                ConditionalEffect::Show | ConditionalEffect::Require if holds => {
                    resolved_text(field, values)
                }
                ConditionalEffect::Hide if !holds => resolved_text(field, values),
                ConditionalEffect::SetValue(value) if holds => value.clone(),
                _ => String::new(),
            }
        }
        // No rule: the field is unconditionally visible.
        None => resolved_text(field, values),
    }
}
