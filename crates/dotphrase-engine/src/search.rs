//! Phrase search and relevance ranking.

use crate::phrase::Phrase;

/// Score contribution of a shortcut substring match.
const SHORTCUT_WEIGHT: u32 = 100;
/// Score contribution of a name substring match.
const NAME_WEIGHT: u32 = 50;
/// Score contribution of a content substring match.
const CONTENT_WEIGHT: u32 = 10;
/// Score contribution of a category substring match.
const CATEGORY_WEIGHT: u32 = 5;

/// Scores one phrase against a free-text query.
///
/// Pure and side-effect free: matches are case-insensitive substring tests
/// against the shortcut, name, content, and category, summed with weights
/// that keep the shape shortcut > name > content > category — a shortcut hit
/// always outranks any combination of weaker matches.
///
/// A blank query scores zero: a zero-length needle would otherwise match
/// every phrase at full weight.
pub fn score_phrase(phrase: &Phrase, query: &str) -> u32 {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return 0;
    }

    let mut score = 0;
    if phrase.shortcut.to_lowercase().contains(&query) {
        score += SHORTCUT_WEIGHT;
    }
    if phrase.name.to_lowercase().contains(&query) {
        score += NAME_WEIGHT;
    }
    if phrase.content.to_lowercase().contains(&query) {
        score += CONTENT_WEIGHT;
    }
    if let Some(category) = &phrase.category {
        if category.to_lowercase().contains(&query) {
            score += CATEGORY_WEIGHT;
        }
    }
    score
}

/// Ranks a phrase collection against a free-text query.
///
/// Returns matches in descending relevance; phrases that do not match at all
/// are excluded, and equal scores keep their input order (stable sort).
///
/// # Example
///
/// ```rust
/// use dotphrase_engine::{search_phrases, Phrase};
///
/// let phrases = vec![Phrase::new(
///     "Shortness of Breath",
///     ".sob",
///     "Patient reports dyspnea on exertion.",
/// )];
///
/// assert_eq!(search_phrases(&phrases, "sob").len(), 1);
/// assert_eq!(search_phrases(&phrases, "dyspnea").len(), 1);
/// assert!(search_phrases(&phrases, "cardiology").is_empty());
/// ```
pub fn search_phrases<'a>(phrases: &'a [Phrase], query: &str) -> Vec<&'a Phrase> {
    let mut scored: Vec<(u32, &Phrase)> = phrases
        .iter()
        .map(|phrase| (score_phrase(phrase, query), phrase))
        .filter(|(score, _)| *score > 0)
        .collect();
    // sort_by is stable, so equal scores keep collection order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, phrase)| phrase).collect()
}
