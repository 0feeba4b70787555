//! Toy predictive-text queries against saved model reports.

use crate::report::{BigramModelReport, LexicalModelReport};

#[derive(Debug, Clone, PartialEq)]
pub struct WordSuggestion {
    pub word: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NextWord {
    pub word: String,
    pub count: u64,
    pub probability: f64,
}

/// The `top_n` most frequent words starting with `prefix` (case-folded).
pub fn complete_prefix(model: &LexicalModelReport, prefix: &str, top_n: usize) -> Vec<WordSuggestion> {
    let prefix = prefix.to_lowercase();
    let mut matches: Vec<WordSuggestion> = model
        .words
        .iter()
        .filter(|(w, _)| w.starts_with(&prefix))
        .map(|(w, e)| WordSuggestion {
            word: w.to_string(),
            count: e.count,
        })
        .collect();
    matches.sort_by(|a, b| b.count.cmp(&a.count));
    matches.truncate(top_n);
    matches
}

/// The `top_n` likeliest successors of `previous` by conditional
/// probability. Empty when `previous` never starts a bigram.
pub fn next_words(model: &BigramModelReport, previous: &str, top_n: usize) -> Vec<NextWord> {
    let Some(following) = model.bigrams.get(&previous.to_lowercase()) else {
        return Vec::new();
    };
    let mut ranked: Vec<NextWord> = following
        .iter()
        .map(|(w, e)| NextWord {
            word: w.to_string(),
            count: e.count,
            probability: e.conditional_probability,
        })
        .collect();
    ranked.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    ranked.truncate(top_n);
    ranked
}
