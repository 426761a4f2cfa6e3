//! Integration tests for phrase search and ranking.

use dotphrase_engine::{score_phrase, search_phrases, Phrase};

fn library() -> Vec<Phrase> {
    vec![
        Phrase::new(
            "Shortness of Breath",
            ".sob",
            "Patient reports dyspnea on exertion, denies orthopnea.",
        )
        .with_category("Pulmonology"),
        Phrase::new(
            "Chest Pain Workup",
            ".cpw",
            "Substernal chest pain, troponin pending.",
        )
        .with_category("Cardiology"),
        Phrase::new(
            "Dyspnea Clinic Follow-up",
            ".dfu",
            "Interval history since last visit.",
        )
        .with_category("Pulmonology"),
        Phrase::new("Discharge Summary", ".dc", "Hospital course and instructions."),
    ]
}

#[test]
fn shortcut_and_content_both_find_the_same_phrase() {
    let single = vec![Phrase::new(
        "Shortness of Breath",
        ".sob",
        "Patient reports dyspnea on exertion.",
    )];

    let by_shortcut = search_phrases(&single, ".sob");
    assert_eq!(by_shortcut.len(), 1);
    assert_eq!(by_shortcut[0].name, "Shortness of Breath");

    let by_content = search_phrases(&single, "dyspnea");
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].name, "Shortness of Breath");
}

#[test]
fn results_are_ordered_by_descending_relevance() {
    let phrases = library();

    // "dyspnea": name match on the clinic phrase, content match on .sob
    let results = search_phrases(&phrases, "dyspnea");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, "Dyspnea Clinic Follow-up");
    assert_eq!(results[1].name, "Shortness of Breath");
}

#[test]
fn shortcut_weight_dominates_combined_weaker_matches() {
    let phrases = vec![
        // name + content + category matches for "pain"
        Phrase::new("Pain Plan", ".pp", "Pain controlled on current regimen.")
            .with_category("Pain Service"),
        // shortcut-only match for "pain"
        Phrase::new("Analgesia Review", ".pain", "Reviewed medication list."),
    ];

    let results = search_phrases(&phrases, "pain");
    assert_eq!(results[0].name, "Analgesia Review");
    assert!(score_phrase(&phrases[1], "pain") > score_phrase(&phrases[0], "pain"));
}

#[test]
fn non_matching_phrases_are_excluded_entirely() {
    let phrases = library();
    let results = search_phrases(&phrases, "troponin");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].shortcut, ".cpw");
}

#[test]
fn query_matching_is_case_insensitive() {
    let phrases = library();
    assert_eq!(search_phrases(&phrases, "DYSPNEA").len(), 2);
    assert_eq!(search_phrases(&phrases, "pulmonology").len(), 2);
}

#[test]
fn ties_preserve_library_order() {
    let phrases = library();
    // Both pulmonology phrases match only on category: equal scores
    let results = search_phrases(&phrases, "pulmonology");
    assert_eq!(results[0].shortcut, ".sob");
    assert_eq!(results[1].shortcut, ".dfu");
}

#[test]
fn scoring_is_pure_and_repeatable() {
    let phrases = library();
    let first: Vec<String> = search_phrases(&phrases, "dyspnea")
        .iter()
        .map(|p| p.shortcut.clone())
        .collect();
    let second: Vec<String> = search_phrases(&phrases, "dyspnea")
        .iter()
        .map(|p| p.shortcut.clone())
        .collect();
    assert_eq!(first, second);
}
