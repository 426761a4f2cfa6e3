//! Read-only patient attributes addressable by dotted source paths.

use std::collections::HashMap;

/// A patient attribute: scalar text, a number, or a nested section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum PatientValue {
    /// Numeric attribute (lab value, vital sign).
    Number(f64),
    /// Text attribute (name, room, narrative finding).
    Text(String),
    /// Nested section of attributes (`labs`, `vitals`, ...).
    Section(HashMap<String, PatientValue>),
}

/// Read-only patient attributes for one expansion, addressed by dotted
/// paths such as `labs.creatinine`.
///
/// The engine never fetches or caches patient data; callers build a context
/// from already-loaded data and pass it in per expansion.
///
/// # Example
///
/// ```rust
/// use dotphrase_engine::PatientContext;
///
/// let patient = PatientContext::new()
///     .with_text("name", "Alex Smith")
///     .with_number("labs.creatinine", 1.2);
///
/// assert_eq!(patient.resolve_text("name").as_deref(), Some("Alex Smith"));
/// assert_eq!(patient.resolve_text("labs.creatinine").as_deref(), Some("1.2"));
/// assert_eq!(patient.resolve_text("labs.sodium"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientContext {
    root: HashMap<String, PatientValue>,
}

impl PatientContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text attribute at a dotted path, creating sections as needed.
    pub fn with_text(self, path: &str, value: impl Into<String>) -> Self {
        self.with_value(path, PatientValue::Text(value.into()))
    }

    /// Adds a numeric attribute at a dotted path, creating sections as needed.
    pub fn with_number(self, path: &str, value: f64) -> Self {
        self.with_value(path, PatientValue::Number(value))
    }

    /// Adds an attribute at a dotted path, creating sections as needed.
    ///
    /// A non-section attribute along the path is replaced by a section; the
    /// last writer wins, matching how contexts are built from loaded records.
    pub fn with_value(mut self, path: &str, value: PatientValue) -> Self {
        let parts: Vec<&str> = path
            .split('.')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if !parts.is_empty() {
            insert_at(&mut self.root, &parts, value);
        }
        self
    }

    /// Resolves a dotted path to the attribute it names.
    pub fn resolve(&self, path: &str) -> Option<&PatientValue> {
        let mut parts = path.split('.');
        let first = parts.next()?.trim();
        if first.is_empty() {
            return None;
        }
        let mut value = self.root.get(first)?;
        for part in parts {
            let part = part.trim();
            if part.is_empty() {
                return None;
            }
            match value {
                PatientValue::Section(inner) => value = inner.get(part)?,
                _ => return None,
            }
        }
        Some(value)
    }

    /// Resolves a path and renders it as substitution text.
    ///
    /// Sections do not render; only scalar attributes produce text.
    pub fn resolve_text(&self, path: &str) -> Option<String> {
        match self.resolve(path)? {
            PatientValue::Number(n) => Some(n.to_string()),
            PatientValue::Text(text) => Some(text.clone()),
            PatientValue::Section(_) => None,
        }
    }
}

fn insert_at(section: &mut HashMap<String, PatientValue>, parts: &[&str], value: PatientValue) {
    match parts {
        [] => {}
        [last] => {
            section.insert((*last).to_string(), value);
        }
        [head, rest @ ..] => {
            let entry = section
                .entry((*head).to_string())
                .or_insert_with(|| PatientValue::Section(HashMap::new()));
            if let PatientValue::Section(inner) = entry {
                insert_at(inner, rest, value);
            } else {
                let mut inner = HashMap::new();
                insert_at(&mut inner, rest, value);
                *entry = PatientValue::Section(inner);
            }
        }
    }
}
