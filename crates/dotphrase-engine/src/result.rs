//! Expansion results and their bookkeeping.

use std::collections::HashMap;

/// The outcome of expanding one phrase.
///
/// Besides the finished text, the result records which fields actually
/// contributed text (for usage analytics) and which calculations produced
/// values (for audit and debugging).
///
/// # Example
///
/// ```ignore
/// let result = expand_phrase(&phrase, &fields, &values, Some(&patient));
///
/// println!("{}", result.content);
///
/// if result.used("symptoms") {
///     log_field_usage("symptoms");
/// }
///
/// if let Some(bmi) = result.calculated("bmi") {
///     audit_calculation("bmi", bmi);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpansionResult {
    /// The finished clinical text.
    pub content: String,
    /// Keys that produced non-empty substitutions, in first-occurrence order.
    pub used_fields: Vec<String>,
    /// Calculation results recorded under their field keys.
    pub calculated_values: HashMap<String, f64>,
}

impl ExpansionResult {
    /// True when the given key contributed text to the expansion.
    pub fn used(&self, key: &str) -> bool {
        self.used_fields.iter().any(|k| k == key)
    }

    /// The computed value of a calculation field, if it produced one.
    pub fn calculated(&self, key: &str) -> Option<f64> {
        self.calculated_values.get(key).copied()
    }
}
