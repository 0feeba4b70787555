//! Stateless smoothing utilities over finished frequency tables.

use crate::ngram::NgramModel;
use std::collections::BTreeMap;

/// Add-one smoothed P(w2 | w1), computed for the queried pair only.
///
/// `(count(w1, w2) + 1) / (count(w1) + |V|)`, or 0 when `w1` is unseen. The
/// full |V|×|V| matrix is never built.
pub fn laplace_smoothed(model: &NgramModel, w1: &str, w2: &str) -> f64 {
    let w1_count = model.unigram_count(w1);
    if w1_count == 0 {
        return 0.0;
    }
    let pair = model.bigram_count(w1, w2);
    (pair + 1) as f64 / (w1_count as f64 + model.vocabulary_size() as f64)
}

/// Maps each observed frequency to the number of words with that frequency.
pub fn frequency_of_frequencies(model: &NgramModel) -> BTreeMap<u64, u64> {
    let mut fof = BTreeMap::new();
    for (_, count) in model.unigrams.iter() {
        *fof.entry(count).or_default() += 1;
    }
    fof
}

/// Simple Good-Turing re-estimate.
///
/// `adjusted[f] = (f + 1) * N[f + 1] / N[f]` when `f + 1` was observed,
/// otherwise `f` unchanged. There is no extrapolation past the observed
/// frequency range.
pub fn good_turing_adjust(freq_of_freqs: &BTreeMap<u64, u64>) -> BTreeMap<u64, f64> {
    freq_of_freqs
        .iter()
        .map(|(&f, &n)| {
            let adjusted = match freq_of_freqs.get(&(f + 1)) {
                Some(&next) if n > 0 => (f + 1) as f64 * next as f64 / n as f64,
                _ => f as f64,
            };
            (f, adjusted)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laplace_reference_pair() {
        // count(to)=2, count(je)=1, count(to, je)=1, |V|=2
        let model = NgramModel::build(&["to", "je", "to"], false);
        assert_eq!(laplace_smoothed(&model, "to", "je"), 0.5);
    }

    #[test]
    fn test_laplace_unseen_pair_is_nonzero() {
        let model = NgramModel::build(&["to", "je", "to"], false);
        assert_eq!(laplace_smoothed(&model, "to", "to"), 0.25);
    }

    #[test]
    fn test_laplace_unseen_prefix_is_zero() {
        let model = NgramModel::build(&["to", "je"], false);
        assert_eq!(laplace_smoothed(&model, "òn", "je"), 0.0);
    }

    #[test]
    fn test_good_turing_reference() {
        let fof = BTreeMap::from([(1, 100), (2, 40)]);
        let adjusted = good_turing_adjust(&fof);
        assert!((adjusted[&1] - 0.8).abs() < 1e-12);
        assert_eq!(adjusted[&2], 2.0);
    }

    #[test]
    fn test_good_turing_gap_is_unchanged() {
        let fof = BTreeMap::from([(1, 10), (3, 2)]);
        let adjusted = good_turing_adjust(&fof);
        assert_eq!(adjusted[&1], 1.0);
        assert_eq!(adjusted[&3], 3.0);
    }

    #[test]
    fn test_frequency_of_frequencies() {
        let model = NgramModel::build(&["a", "b", "a", "c", "d", "d"], false);
        let fof = frequency_of_frequencies(&model);
        assert_eq!(fof, BTreeMap::from([(1, 2), (2, 2)]));
    }
}
