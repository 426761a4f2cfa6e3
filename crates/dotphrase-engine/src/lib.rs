//! # dotphrase-engine
//!
//! Clinical phrase expansion engine for dot-phrase templates.
//!
//! This crate turns a stored phrase template containing placeholders,
//! patient-data bindings, conditional rules, and calculation formulas into
//! finished clinical documentation text, and ranks a phrase collection
//! against free-text queries for autocomplete.
//!
//! ## Key Properties
//!
//! - **Total over partial input** - missing values, unknown keys, and
//!   unresolvable patient paths substitute empty text instead of failing;
//!   documentation never breaks mid-expansion
//! - **Pure functions** - no I/O, no shared state, no cross-call cache;
//!   concurrent callers need no coordination
//! - **Closed formula grammar** - calculations go through the `dotphrase`
//!   parser, never a general-purpose evaluator
//!
//! ## Quick Start
//!
//! ```rust
//! use dotphrase_engine::{
//!     expand_phrase, FieldDefinition, FieldType, FieldValue, FieldValues,
//!     PatientContext, Phrase,
//! };
//!
//! let phrase = Phrase::new(
//!     "Rounding Note",
//!     ".round",
//!     "Patient {{name}} is {{status}}.",
//! );
//! let fields = vec![
//!     FieldDefinition::new("name", "Name", FieldType::PatientData),
//!     FieldDefinition::new("status", "Status", FieldType::Text),
//! ];
//! let mut values = FieldValues::new();
//! values.insert("status".to_string(), FieldValue::from("stable"));
//! let patient = PatientContext::new().with_text("name", "Alex Smith");
//!
//! let result = expand_phrase(&phrase, &fields, &values, Some(&patient));
//! assert_eq!(result.content, "Patient Alex Smith is stable.");
//! assert!(result.used("name") && result.used("status"));
//! ```
//!
//! ## Field Types
//!
//! | Type | Substitution |
//! |------|--------------|
//! | `text` / `dropdown` / `radio` | Entered value, else declared default |
//! | `number` / `date` | Entered value as text |
//! | `checkbox` | Selections rendered as clinical sentences |
//! | `patient_data` | Dotted-path lookup in the patient context |
//! | `calculation` | Formula result over the numeric field values |
//! | `conditional` | Value gated by a show/hide/set-value rule |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      dotphrase-engine                        │
//! │                                                              │
//! │  expand_phrase                                               │
//! │  ├── scan placeholders        (dotphrase scanner)            │
//! │  ├── resolve per field type   (conditions, calculations,     │
//! │  │                             patient paths, sentences)     │
//! │  ├── substitute placeholders  (dotphrase scanner)            │
//! │  └── return ExpansionResult with bookkeeping                 │
//! │                                                              │
//! │  validate_field_values — constraints → field/message map     │
//! │  search_phrases        — weighted ranking over a collection  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod condition;
mod expander;
mod field;
mod patient;
mod phrase;
mod result;
mod search;
mod sentence;
mod validate;
mod values;

// Public re-exports
pub use condition::{evaluate_condition, field_is_visible};
pub use expander::expand_phrase;
pub use field::{
    ConditionOperator, ConditionRule, ConditionalEffect, ConditionalLogic, FieldDefinition,
    FieldType, FieldValidation,
};
pub use patient::{PatientContext, PatientValue};
pub use phrase::Phrase;
pub use result::ExpansionResult;
pub use search::{score_phrase, search_phrases};
pub use sentence::generate_sentence_from_selections;
pub use validate::validate_field_values;
pub use values::{numeric_inputs, FieldValue, FieldValues};

// Re-export commonly used types from the syntax layer for convenience
pub use dotphrase::{calculate_formula, extract_field_keys, Formula, FormulaError};
