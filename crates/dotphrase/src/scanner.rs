//! Template placeholder scanning and substitution.
//!
//! Templates embed placeholders as `{{key}}`. There is no nesting or escaping
//! in the syntax: a `{{` always opens a placeholder, and scanning simply
//! walks the string left to right. Substitution reuses the same scan, so the
//! scanner and the expander can never disagree about placeholder boundaries.

/// A well-formed placeholder occurrence within a template.
struct PlaceholderSpan<'a> {
    /// Byte offset of the opening `{{`.
    start: usize,
    /// Byte offset just past the closing `}}`.
    end: usize,
    /// The trimmed key between the braces.
    key: &'a str,
}

/// Finds the next well-formed placeholder at or after `from`.
///
/// Empty or whitespace-only keys are skipped, a stray `{` inside the braces
/// restarts the scan at the inner position, and an unterminated `{{` ends the
/// scan (the remainder is literal text).
fn next_placeholder(template: &str, from: usize) -> Option<PlaceholderSpan<'_>> {
    let mut search = from;
    loop {
        let open = search + template[search..].find("{{")?;
        let inner_start = open + 2;
        let close = inner_start + template[inner_start..].find("}}")?;
        let inner = &template[inner_start..close];

        if inner.contains('{') || inner.contains('}') {
            // Not a clean placeholder; a later `{{` may still open one.
            search = inner_start;
            continue;
        }

        let key = inner.trim();
        if key.is_empty() {
            search = close + 2;
            continue;
        }

        return Some(PlaceholderSpan {
            start: open,
            end: close + 2,
            key,
        });
    }
}

/// Extracts the distinct placeholder keys of a template in first-occurrence
/// order.
///
/// Duplicate references are collapsed, not reordered. Keys are case
/// sensitive.
///
/// # Example
///
/// ```rust
/// use dotphrase::extract_field_keys;
///
/// let keys = extract_field_keys("Hello {{name}} and {{bed}} and {{name}}");
/// assert_eq!(keys, vec!["name", "bed"]);
/// ```
pub fn extract_field_keys(template: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    let mut position = 0;
    while let Some(found) = next_placeholder(template, position) {
        if !keys.iter().any(|k| k == found.key) {
            keys.push(found.key.to_string());
        }
        position = found.end;
    }
    keys
}

/// Rebuilds a template, replacing every well-formed placeholder with the
/// value `resolve` returns for its key.
///
/// A `None` resolution substitutes the empty string, so the output is always
/// produced; malformed placeholder syntax passes through as literal text.
///
/// # Example
///
/// ```rust
/// use dotphrase::replace_placeholders;
///
/// let text = replace_placeholders("{{greeting}}, {{name}}!", |key| match key {
///     "greeting" => Some("Hello".to_string()),
///     _ => None,
/// });
/// assert_eq!(text, "Hello, !");
/// ```
pub fn replace_placeholders<F>(template: &str, mut resolve: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut output = String::with_capacity(template.len());
    let mut position = 0;
    while let Some(found) = next_placeholder(template, position) {
        output.push_str(&template[position..found.start]);
        if let Some(value) = resolve(found.key) {
            output.push_str(&value);
        }
        position = found.end;
    }
    output.push_str(&template[position..]);
    output
}

// ============================================================================
// Tests
// ============================================================================
