//! Field values supplied to an expansion.

use std::collections::HashMap;

/// The user's current entries for one expansion, keyed by field key.
pub type FieldValues = HashMap<String, FieldValue>;

/// A single field's value: free text, a number, a flag, or a selection list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum FieldValue {
    /// Checkbox flag.
    Bool(bool),
    /// Numeric entry.
    Number(f64),
    /// Free text (also dropdown/radio selections and date strings).
    Text(String),
    /// Multi-select checkbox selections.
    List(Vec<String>),
}

impl FieldValue {
    /// Canonical text rendering used for substitution and comparisons.
    ///
    /// Whole numbers render without a decimal point; lists join with `", "`.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Bool(flag) => flag.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(text) => text.clone(),
            FieldValue::List(items) => items.join(", "),
        }
    }

    /// Numeric interpretation: `Number` values, or text that parses cleanly
    /// as a number (form layers deliver number-field entries as strings).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// True for whitespace-only text or an empty selection list.
    ///
    /// Numbers and flags always count as present.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Bool(flag)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl<'a> From<Vec<&'a str>> for FieldValue {
    fn from(items: Vec<&'a str>) -> Self {
        FieldValue::List(items.into_iter().map(|s| s.to_string()).collect())
    }
}

/// Extracts the numeric subset of the values, as fed to calculation formulas.
///
/// Entries that are not numeric (per [`FieldValue::as_number`]) are simply
/// absent, which makes any formula referencing them yield no value.
pub fn numeric_inputs(values: &FieldValues) -> HashMap<String, f64> {
    values
        .iter()
        .filter_map(|(key, value)| value.as_number().map(|n| (key.clone(), n)))
        .collect()
}
