//! Field definitions: the named, typed inputs that supply placeholder values.

use crate::values::FieldValue;

// =============================================================================
// Field types
// =============================================================================

/// The input type of a field, matched exhaustively during expansion.
///
/// Adding a variant is a compile-time-checked exercise: every `match` over
/// this enum must account for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FieldType {
    /// Free-text entry.
    Text,
    /// Numeric entry.
    Number,
    /// Date entry (stored as text).
    Date,
    /// Single-select dropdown.
    Dropdown,
    /// Multi-select checkboxes, rendered as clinical sentences.
    Checkbox,
    /// Single-select radio group.
    Radio,
    /// Auto-filled from the patient context via a dotted source path.
    PatientData,
    /// Computed from other numeric fields via a calculation formula.
    Calculation,
    /// Substituted according to a conditional rule.
    Conditional,
}

impl FieldType {
    /// Stable snake_case name, matching the persisted type tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Dropdown => "dropdown",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::PatientData => "patient_data",
            FieldType::Calculation => "calculation",
            FieldType::Conditional => "conditional",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Conditional rules
// =============================================================================

/// Operators available to conditional rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOperator {
    /// Trimmed string equality.
    Equals,
    /// Trimmed string inequality.
    NotEquals,
    /// Case-insensitive substring test.
    Contains,
    /// Numeric `>`; non-numeric operands fail the condition.
    GreaterThan,
    /// Numeric `<`; non-numeric operands fail the condition.
    LessThan,
    /// Absent value, empty text, or empty list.
    IsEmpty,
    /// Inverse of [`IsEmpty`](Self::IsEmpty).
    IsNotEmpty,
}

impl ConditionOperator {
    /// Parses a persisted operator name.
    ///
    /// Unknown names yield `None`, which condition evaluation treats as an
    /// always-false rule rather than an error.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "equals" => Some(ConditionOperator::Equals),
            "not_equals" => Some(ConditionOperator::NotEquals),
            "contains" => Some(ConditionOperator::Contains),
            "greater_than" => Some(ConditionOperator::GreaterThan),
            "less_than" => Some(ConditionOperator::LessThan),
            "is_empty" => Some(ConditionOperator::IsEmpty),
            "is_not_empty" => Some(ConditionOperator::IsNotEmpty),
            _ => None,
        }
    }

    /// Stable snake_case name, matching the persisted operator tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionOperator::Equals => "equals",
            ConditionOperator::NotEquals => "not_equals",
            ConditionOperator::Contains => "contains",
            ConditionOperator::GreaterThan => "greater_than",
            ConditionOperator::LessThan => "less_than",
            ConditionOperator::IsEmpty => "is_empty",
            ConditionOperator::IsNotEmpty => "is_not_empty",
        }
    }
}

impl std::fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single `(field, operator, value)` rule evaluated against field values.
///
/// The operator is kept as its persisted string and parsed at evaluation
/// time, so a rule saved with an operator this version does not know simply
/// evaluates to `false` instead of failing to load.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionRule {
    /// Key of the field the rule inspects.
    pub field: String,
    /// Persisted operator name (see [`ConditionOperator::parse`]).
    pub operator: String,
    /// Comparison operand; absent for `is_empty` / `is_not_empty`.
    pub value: Option<String>,
}

impl ConditionRule {
    /// Creates a rule with no comparison operand.
    pub fn new(field: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: None,
        }
    }

    /// Sets the comparison operand.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// What a conditional rule does to its field while the condition holds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ConditionalEffect {
    /// Field is visible only while the condition holds.
    Show,
    /// Field is hidden while the condition holds.
    Hide,
    /// Field becomes required while the condition holds.
    Require,
    /// Field substitutes the given value while the condition holds.
    SetValue(String),
}

/// A conditional rule paired with its effect.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalLogic {
    /// The rule to evaluate against the current field values.
    pub rule: ConditionRule,
    /// What happens while the rule holds.
    pub effect: ConditionalEffect,
}

impl ConditionalLogic {
    /// Pairs a rule with its effect.
    pub fn new(rule: ConditionRule, effect: ConditionalEffect) -> Self {
        Self { rule, effect }
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Declarative constraints checked by
/// [`validate_field_values`](crate::validate_field_values).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldValidation {
    /// The field must have a non-empty value.
    pub required: bool,
    /// Lower bound for numeric fields.
    pub min: Option<f64>,
    /// Upper bound for numeric fields.
    pub max: Option<f64>,
    /// Regular expression the value text must match.
    pub pattern: Option<String>,
    /// Custom message reported on pattern mismatch.
    pub message: Option<String>,
}

// =============================================================================
// Field definitions
// =============================================================================

/// Declares one named, typed input of a phrase.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDefinition {
    /// Placeholder key this field supplies.
    pub key: String,
    /// Human-readable label used in validation messages.
    pub label: String,
    /// Input type, driving substitution behavior.
    pub field_type: FieldType,
    /// Value used when no entry is present (text-like fields).
    pub default_value: Option<FieldValue>,
    /// Choices offered by dropdown/radio/checkbox fields.
    pub options: Vec<String>,
    /// Dotted patient-context path for `PatientData` fields.
    ///
    /// Defaults to the field key when absent.
    pub source: Option<String>,
    /// Calculation formula (`target = expression`) for `Calculation` fields.
    pub formula: Option<String>,
    /// Declarative constraints.
    pub validation: Option<FieldValidation>,
    /// Show/hide/require/set-value rule.
    pub conditional_logic: Option<ConditionalLogic>,
}

impl FieldDefinition {
    /// Creates a field with the given key, label, and type.
    pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type,
            default_value: None,
            options: Vec::new(),
            source: None,
            formula: None,
            validation: None,
            conditional_logic: None,
        }
    }

    /// Sets the default value.
    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets the selectable options.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the patient-context source path.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the calculation formula.
    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Sets the validation constraints.
    pub fn with_validation(mut self, validation: FieldValidation) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Sets the conditional logic.
    pub fn with_conditional_logic(mut self, logic: ConditionalLogic) -> Self {
        self.conditional_logic = Some(logic);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_parse_round_trip() {
        for name in [
            "equals",
            "not_equals",
            "contains",
            "greater_than",
            "less_than",
            "is_empty",
            "is_not_empty",
        ] {
            let op = ConditionOperator::parse(name).unwrap();
            assert_eq!(op.as_str(), name);
        }
    }

    #[test]
    fn test_operator_parse_unknown_is_none() {
        assert_eq!(ConditionOperator::parse("matches_regex"), None);
        assert_eq!(ConditionOperator::parse(""), None);
        assert_eq!(ConditionOperator::parse("EQUALS"), None);
    }

    #[test]
    fn test_field_type_names_are_stable() {
        assert_eq!(FieldType::PatientData.as_str(), "patient_data");
        assert_eq!(FieldType::Calculation.to_string(), "calculation");
    }

    #[test]
    fn test_field_definition_builder() {
        let field = FieldDefinition::new("bmi", "BMI", FieldType::Calculation)
            .with_formula("bmi = weight / (height * height)")
            .with_default("unknown");

        assert_eq!(field.key, "bmi");
        assert_eq!(field.label, "BMI");
        assert!(field.formula.is_some());
        assert_eq!(field.default_value, Some(FieldValue::from("unknown")));
        assert!(field.validation.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_field_definition_serde_round_trip() {
        let field = FieldDefinition::new("status", "Status", FieldType::Dropdown)
            .with_options(["stable", "guarded", "critical"])
            .with_validation(FieldValidation {
                required: true,
                ..Default::default()
            });

        let json = serde_json::to_string(&field).unwrap();
        assert!(json.contains("\"dropdown\""));
        let back: FieldDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }
}
