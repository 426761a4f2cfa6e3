//! Phrase definitions: stored templates addressable by shortcut.

/// A stored clinical phrase: a named template with a quick-insert shortcut.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phrase {
    /// Display name shown in pickers ("Shortness of Breath Note").
    pub name: String,
    /// Shortcut typed by clinicians to insert the phrase (".sob").
    pub shortcut: String,
    /// Template text containing `{{key}}` placeholders.
    pub content: String,
    /// Grouping category ("Pulmonology"), if any.
    pub category: Option<String>,
}

impl Phrase {
    /// Creates a phrase with no category.
    pub fn new(
        name: impl Into<String>,
        shortcut: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            shortcut: shortcut.into(),
            content: content.into(),
            category: None,
        }
    }

    /// Sets the grouping category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
