//! Rapid Automatic Keyword Extraction over article text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

use super::language::Language;
use super::stopwords::stopwords;

/// Maximum number of ranked phrases retained for downstream search.
pub const MAX_KEYWORDS: usize = 10;

// Punctuation that ends a candidate phrase regardless of stopwords.
static PHRASE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?,;:()\[\]{}"\u{2013}\u{2014}\u{2026}]|\r\n|[\n\r\t]"#).unwrap());

/// Extract ranked keyword phrases from article text.
///
/// Returns at most [`MAX_KEYWORDS`] phrases, most relevant first, with no
/// duplicates. An empty result means the text had no extractable content
/// words for the language; callers treat that as an input-quality problem,
/// not a failure of this function.
pub fn extract_keywords(text: &str, language: Language) -> Vec<String> {
    let phrases = candidate_phrases(text, language);
    if phrases.is_empty() {
        return Vec::new();
    }

    let scores = word_scores(&phrases);

    let mut seen = HashSet::new();
    let mut ranked: Vec<(String, f64)> = Vec::new();
    for phrase in &phrases {
        let joined = phrase.join(" ");
        if !seen.insert(joined.clone()) {
            continue;
        }
        let score = phrase
            .iter()
            .map(|word| scores.get(word.as_str()).copied().unwrap_or(0.0))
            .sum();
        ranked.push((joined, score));
    }

    // Stable sort keeps first-seen order among equally scored phrases, so
    // output is deterministic for a given input.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(MAX_KEYWORDS);
    ranked.into_iter().map(|(phrase, _)| phrase).collect()
}

/// Split text into candidate phrases: maximal runs of content words between
/// stopwords and phrase-boundary punctuation.
fn candidate_phrases(text: &str, language: Language) -> Vec<Vec<String>> {
    let stop = stopwords(language);
    let mut phrases = Vec::new();

    for fragment in PHRASE_BOUNDARY.split(text) {
        let mut current: Vec<String> = Vec::new();
        for word in fragment.unicode_words() {
            let word = word.to_lowercase();
            if stop.contains(word.as_str()) || !word.chars().any(|c| c.is_alphabetic()) {
                if !current.is_empty() {
                    phrases.push(std::mem::take(&mut current));
                }
            } else {
                current.push(word);
            }
        }
        if !current.is_empty() {
            phrases.push(current);
        }
    }

    phrases
}

/// Classic RAKE word scoring: degree(w) / frequency(w), where degree counts
/// co-occurring words across all phrases containing w (itself included).
fn word_scores(phrases: &[Vec<String>]) -> HashMap<&str, f64> {
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    let mut degree: HashMap<&str, usize> = HashMap::new();

    for phrase in phrases {
        for word in phrase {
            *frequency.entry(word.as_str()).or_insert(0) += 1;
            *degree.entry(word.as_str()).or_insert(0) += phrase.len() - 1;
        }
    }

    frequency
        .into_iter()
        .map(|(word, freq)| {
            let deg = degree.get(word).copied().unwrap_or(0) + freq;
            (word, deg as f64 / freq as f64)
        })
        .collect()
}
