use crate::ngram::UnigramTable;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ranks summed for the fixed top-K coverage fields.
pub const COVERAGE_RANKS: [usize; 3] = [10, 100, 1000];

/// Immutable quality snapshot of one unigram table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub type_token_ratio: f64,
    pub hapax_legomena: usize,
    pub hapax_percentage: f64,
    pub dis_legomena: usize,
    pub dis_percentage: f64,
    pub avg_word_length: f64,
    pub top_10_coverage: f64,
    pub top_100_coverage: f64,
    pub top_1000_coverage: f64,
    /// Approximate new-words-per-thousand estimate; a heuristic, not a
    /// formal measure.
    pub vocab_growth_rate: f64,
}

fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 {
        num / den
    } else {
        0.0
    }
}

/// Percentage of all occurrences covered by the `k` most frequent words.
/// A vocabulary smaller than `k` sums over every word.
pub fn top_k_coverage(unigrams: &UnigramTable, k: usize) -> f64 {
    let covered: u64 = unigrams.ranked().iter().take(k).map(|(_, c)| c).sum();
    ratio(covered as f64, unigrams.total() as f64) * 100.0
}

impl QualityMetrics {
    pub fn compute<S: AsRef<str>>(tokens: &[S], unigrams: &UnigramTable) -> Self {
        let total = tokens.len();
        let vocab = unigrams.vocabulary_size();
        let ttr = ratio(vocab as f64, total as f64);

        let hapax = unigrams.iter().filter(|(_, c)| *c == 1).count();
        let dis = unigrams.iter().filter(|(_, c)| *c == 2).count();

        let chars: usize = tokens.iter().map(|t| t.as_ref().chars().count()).sum();

        let vocab_growth_rate = if total >= 1000 {
            let sample = (total / 10).min(1000);
            let unique: HashSet<&str> = tokens[..sample].iter().map(|t| t.as_ref()).collect();
            unique.len() as f64 / sample as f64 * 1000.0
        } else {
            ttr * 1000.0
        };

        Self {
            type_token_ratio: ttr,
            hapax_legomena: hapax,
            hapax_percentage: ratio(hapax as f64, vocab as f64) * 100.0,
            dis_legomena: dis,
            dis_percentage: ratio(dis as f64, vocab as f64) * 100.0,
            avg_word_length: ratio(chars as f64, total as f64),
            top_10_coverage: top_k_coverage(unigrams, COVERAGE_RANKS[0]),
            top_100_coverage: top_k_coverage(unigrams, COVERAGE_RANKS[1]),
            top_1000_coverage: top_k_coverage(unigrams, COVERAGE_RANKS[2]),
            vocab_growth_rate,
        }
    }
}
