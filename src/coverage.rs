use crate::ngram::NgramModel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoveragePoint {
    pub vocab_size: usize,
    pub words_covered: u64,
    pub coverage_percentage: f64,
    pub vocab_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageAnalysis {
    pub coverage_by_size: Vec<CoveragePoint>,
    /// Target percentage (as written, e.g. "90") to vocabulary size needed.
    pub vocab_for_coverage: BTreeMap<String, usize>,
    pub total_vocabulary: usize,
    pub total_words: u64,
}

impl CoverageAnalysis {
    /// Coverage curve at `points` (sizes above the vocabulary are skipped)
    /// and the smallest vocabulary reaching each of `targets` percent.
    pub fn compute(model: &NgramModel, points: &[usize], targets: &[f64]) -> Self {
        let ranked = model.top_unigrams(None);
        let total = model.total_words();
        let vocab = ranked.len();

        let mut cumulative = Vec::with_capacity(vocab);
        let mut running = 0u64;
        for (_, c) in &ranked {
            running += c;
            cumulative.push(running);
        }
        let pct = |covered: u64| {
            if total > 0 {
                covered as f64 / total as f64 * 100.0
            } else {
                0.0
            }
        };

        let coverage_by_size = points
            .iter()
            .filter(|&&size| size > 0 && size <= vocab)
            .map(|&size| {
                let covered = cumulative[size - 1];
                CoveragePoint {
                    vocab_size: size,
                    words_covered: covered,
                    coverage_percentage: pct(covered),
                    vocab_percentage: size as f64 / vocab as f64 * 100.0,
                }
            })
            .collect();

        let vocab_for_coverage = targets
            .iter()
            .filter_map(|&target| {
                cumulative
                    .iter()
                    .position(|&c| pct(c) >= target)
                    .map(|i| (format!("{}", target), i + 1))
            })
            .collect();

        Self {
            coverage_by_size,
            vocab_for_coverage,
            total_vocabulary: vocab,
            total_words: total,
        }
    }
}
