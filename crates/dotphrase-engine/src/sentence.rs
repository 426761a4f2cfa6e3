//! Checkbox selections rendered as review-of-systems style sentences.

/// Fixed lexicon mapping selection keys to symptom phrases.
///
/// The third column flags inherently negative findings, which render as
/// denials even without a `no_` prefix. Extend this table to teach the
/// generator new vocabulary; unknown keys fall back to their literal text.
const LEXICON: &[(&str, &str, bool)] = &[
    ("chest_pain", "chest pain", false),
    ("sob", "shortness of breath", false),
    ("dyspnea", "dyspnea", false),
    ("orthopnea", "orthopnea", false),
    ("cough", "cough", false),
    ("fever", "fever", false),
    ("chills", "chills", false),
    ("night_sweats", "night sweats", false),
    ("nausea", "nausea", false),
    ("vomiting", "vomiting", false),
    ("diarrhea", "diarrhea", false),
    ("constipation", "constipation", false),
    ("abd_pain", "abdominal pain", false),
    ("headache", "headache", false),
    ("dizziness", "dizziness", false),
    ("syncope", "syncope", false),
    ("fatigue", "fatigue", false),
    ("weight_loss", "unintentional weight loss", false),
    ("palpitations", "palpitations", false),
    ("edema", "swelling in the extremities", false),
    ("dysuria", "pain with urination", false),
    ("rash", "rash", false),
    ("afebrile", "fever", true),
];

fn lookup(key: &str) -> Option<(&'static str, bool)> {
    LEXICON
        .iter()
        .find(|(entry, _, _)| *entry == key)
        .map(|(_, phrase, negative)| (*phrase, *negative))
}

/// Converts multi-select checkbox selections into clinical sentences,
/// preserving selection order.
///
/// Keys following the `no_<symptom>` convention, and lexicon entries flagged
/// negative, render as denials ("Patient denies fever."); everything else
/// renders as an affirmation ("Patient reports cough."). Unknown keys use
/// their literal text (underscores become spaces) so no selection is
/// silently dropped. Each fragment carries its own terminal period and
/// fragments join with single spaces.
///
/// # Example
///
/// ```rust
/// use dotphrase_engine::generate_sentence_from_selections;
///
/// let text = generate_sentence_from_selections(&["cough", "no_fever"]);
/// assert_eq!(text, "Patient reports cough. Patient denies fever.");
/// ```
pub fn generate_sentence_from_selections<S: AsRef<str>>(selected: &[S]) -> String {
    let mut sentences = Vec::with_capacity(selected.len());
    for key in selected {
        let key = key.as_ref().trim();
        if key.is_empty() {
            continue;
        }
        let (symptom_key, denied_by_prefix) = match key.strip_prefix("no_") {
            Some(rest) if !rest.is_empty() => (rest, true),
            _ => (key, false),
        };
        let (phrase, negative_entry) = match lookup(symptom_key) {
            Some((phrase, negative)) => (phrase.to_string(), negative),
            None => (humanize(symptom_key), false),
        };
        if denied_by_prefix || negative_entry {
            sentences.push(format!("Patient denies {}.", phrase));
        } else {
            sentences.push(format!("Patient reports {}.", phrase));
        }
    }
    sentences.join(" ")
}

/// Renders an unknown selection key as readable symptom text.
fn humanize(key: &str) -> String {
    key.replace('_', " ")
}
