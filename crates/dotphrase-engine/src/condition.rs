//! Conditional rule evaluation.

use crate::field::{ConditionOperator, ConditionRule, ConditionalEffect, FieldDefinition};
use crate::values::{FieldValue, FieldValues};

/// Evaluates a single rule against the current field values.
///
/// Unknown fields behave as empty values and unknown operators evaluate to
/// `false`; no input can make this function panic.
///
/// # Example
///
/// ```rust
/// use dotphrase_engine::{evaluate_condition, ConditionRule, FieldValue, FieldValues};
///
/// let mut values = FieldValues::new();
/// values.insert("status".to_string(), FieldValue::from("ICU-1"));
///
/// let rule = ConditionRule::new("status", "contains").with_value("icu");
/// assert!(evaluate_condition(&rule, &values));
/// ```
pub fn evaluate_condition(rule: &ConditionRule, values: &FieldValues) -> bool {
    let operator = match ConditionOperator::parse(&rule.operator) {
        Some(operator) => operator,
        None => return false,
    };

    let field_value = values.get(&rule.field);
    let field_text = field_value.map(FieldValue::as_text).unwrap_or_default();
    let rule_text = rule.value.as_deref().unwrap_or("");

    match operator {
        ConditionOperator::Equals => field_text.trim() == rule_text.trim(),
        ConditionOperator::NotEquals => field_text.trim() != rule_text.trim(),
        ConditionOperator::Contains => field_text
            .to_lowercase()
            .contains(&rule_text.to_lowercase()),
        ConditionOperator::GreaterThan => match (as_number(field_value), parse_number(rule_text)) {
            (Some(lhs), Some(rhs)) => lhs > rhs,
            _ => false,
        },
        ConditionOperator::LessThan => match (as_number(field_value), parse_number(rule_text)) {
            (Some(lhs), Some(rhs)) => lhs < rhs,
            _ => false,
        },
        ConditionOperator::IsEmpty => is_empty(field_value),
        ConditionOperator::IsNotEmpty => !is_empty(field_value),
    }
}

/// Resolves whether a field is currently visible given its conditional logic.
///
/// A `Show` effect hides the field while its condition fails; a `Hide` effect
/// hides it while the condition holds. `Require` and `SetValue` never hide,
/// and a field without conditional logic is always visible. Both the
/// validator and the expander use this resolution, so a hidden field is
/// exempt from validation and contributes no text.
pub fn field_is_visible(field: &FieldDefinition, values: &FieldValues) -> bool {
    match &field.conditional_logic {
        Some(logic) => match &logic.effect {
            ConditionalEffect::Show => evaluate_condition(&logic.rule, values),
            ConditionalEffect::Hide => !evaluate_condition(&logic.rule, values),
            ConditionalEffect::Require | ConditionalEffect::SetValue(_) => true,
        },
        None => true,
    }
}

fn as_number(value: Option<&FieldValue>) -> Option<f64> {
    value.and_then(FieldValue::as_number)
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

fn is_empty(value: Option<&FieldValue>) -> bool {
    value.map(FieldValue::is_empty).unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{ConditionalLogic, FieldType};

    fn values(pairs: &[(&str, FieldValue)]) -> FieldValues {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_equals() {
        let vals = values(&[("status", FieldValue::from("ok"))]);
        assert!(evaluate_condition(
            &ConditionRule::new("status", "equals").with_value("ok"),
            &vals
        ));
        assert!(!evaluate_condition(
            &ConditionRule::new("status", "equals").with_value("OK"),
            &vals
        ));
    }

    #[test]
    fn test_equals_trims_both_sides() {
        let vals = values(&[("status", FieldValue::from("  ok "))]);
        assert!(evaluate_condition(
            &ConditionRule::new("status", "equals").with_value("ok"),
            &vals
        ));
    }

    #[test]
    fn test_not_equals() {
        let vals = values(&[("status", FieldValue::from("ok"))]);
        assert!(evaluate_condition(
            &ConditionRule::new("status", "not_equals").with_value("bad"),
            &vals
        ));
        assert!(!evaluate_condition(
            &ConditionRule::new("status", "not_equals").with_value("ok"),
            &vals
        ));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let vals = values(&[("status", FieldValue::from("ICU-1"))]);
        assert!(evaluate_condition(
            &ConditionRule::new("status", "contains").with_value("icu"),
            &vals
        ));
        assert!(!evaluate_condition(
            &ConditionRule::new("status", "contains").with_value("ward"),
            &vals
        ));
    }

    #[test]
    fn test_numeric_comparisons() {
        let vals = values(&[("age", FieldValue::Number(40.0))]);
        assert!(evaluate_condition(
            &ConditionRule::new("age", "greater_than").with_value("18"),
            &vals
        ));
        assert!(evaluate_condition(
            &ConditionRule::new("age", "less_than").with_value("65"),
            &vals
        ));
        assert!(!evaluate_condition(
            &ConditionRule::new("age", "greater_than").with_value("65"),
            &vals
        ));
    }

    #[test]
    fn test_numeric_comparison_on_numeric_text() {
        let vals = values(&[("age", FieldValue::from("40"))]);
        assert!(evaluate_condition(
            &ConditionRule::new("age", "greater_than").with_value("18"),
            &vals
        ));
    }

    #[test]
    fn test_non_numeric_operands_are_false() {
        let vals = values(&[("age", FieldValue::from("unknown"))]);
        assert!(!evaluate_condition(
            &ConditionRule::new("age", "greater_than").with_value("18"),
            &vals
        ));
        let vals = values(&[("age", FieldValue::Number(40.0))]);
        assert!(!evaluate_condition(
            &ConditionRule::new("age", "greater_than").with_value("young"),
            &vals
        ));
    }

    #[test]
    fn test_is_empty() {
        let vals = values(&[("status", FieldValue::from(""))]);
        assert!(evaluate_condition(
            &ConditionRule::new("status", "is_empty"),
            &vals
        ));
        assert!(evaluate_condition(
            &ConditionRule::new("missing", "is_empty"),
            &vals
        ));
        assert!(evaluate_condition(
            &ConditionRule::new("list", "is_empty"),
            &values(&[("list", FieldValue::List(Vec::new()))])
        ));
    }

    #[test]
    fn test_is_not_empty() {
        let vals = values(&[("status", FieldValue::from("ok"))]);
        assert!(evaluate_condition(
            &ConditionRule::new("status", "is_not_empty"),
            &vals
        ));
        assert!(!evaluate_condition(
            &ConditionRule::new("missing", "is_not_empty"),
            &vals
        ));
    }

    #[test]
    fn test_unknown_field_behaves_as_empty() {
        let vals = values(&[]);
        assert!(!evaluate_condition(
            &ConditionRule::new("missing", "equals").with_value("x"),
            &vals
        ));
        assert!(evaluate_condition(
            &ConditionRule::new("missing", "equals").with_value(""),
            &vals
        ));
    }

    #[test]
    fn test_unknown_operator_is_false() {
        let vals = values(&[("status", FieldValue::from("ok"))]);
        assert!(!evaluate_condition(
            &ConditionRule::new("status", "matches_regex").with_value("ok"),
            &vals
        ));
    }

    #[test]
    fn test_visibility_show_and_hide() {
        let shown_when_icu = FieldDefinition::new("note", "Note", FieldType::Text)
            .with_conditional_logic(ConditionalLogic::new(
                ConditionRule::new("unit", "equals").with_value("icu"),
                ConditionalEffect::Show,
            ));
        let hidden_when_icu = FieldDefinition::new("note", "Note", FieldType::Text)
            .with_conditional_logic(ConditionalLogic::new(
                ConditionRule::new("unit", "equals").with_value("icu"),
                ConditionalEffect::Hide,
            ));

        let icu = values(&[("unit", FieldValue::from("icu"))]);
        let ward = values(&[("unit", FieldValue::from("ward"))]);

        assert!(field_is_visible(&shown_when_icu, &icu));
        assert!(!field_is_visible(&shown_when_icu, &ward));
        assert!(!field_is_visible(&hidden_when_icu, &icu));
        assert!(field_is_visible(&hidden_when_icu, &ward));
    }

    #[test]
    fn test_visibility_require_and_no_logic() {
        let required_in_icu = FieldDefinition::new("note", "Note", FieldType::Text)
            .with_conditional_logic(ConditionalLogic::new(
                ConditionRule::new("unit", "equals").with_value("icu"),
                ConditionalEffect::Require,
            ));
        let plain = FieldDefinition::new("note", "Note", FieldType::Text);

        let ward = values(&[("unit", FieldValue::from("ward"))]);
        assert!(field_is_visible(&required_in_icu, &ward));
        assert!(field_is_visible(&plain, &ward));
    }
}
