use csbcorpus::classifier::{Category, Classifier};
use csbcorpus::cleaner::clean;
use csbcorpus::coverage::CoverageAnalysis;
use csbcorpus::metrics::QualityMetrics;
use csbcorpus::ngram::NgramModel;
use csbcorpus::smoothing;
use csbcorpus::wordlists::WordLists;
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

// --- STRATEGIES ---

// Small alphabet so tokens repeat and collide with the word lists.
const POOL: &[&str] = &[
    "w", "to", "je", "html", "the", "und", "piotr", "km", "xiv", "en", "q", "l", "x",
    "kaszëbë", "gdańsk", "mòwa", "pòmòrsczi", "a", "z",
];

prop_compose! {
    fn arb_tokens(max: usize)(
        idx in proptest::collection::vec(0..POOL.len(), 0..max)
    ) -> Vec<String> {
        idx.into_iter().map(|i| POOL[i].to_string()).collect()
    }
}

// Wide vocabulary so the 10/100/1000 coverage ranks differ.
prop_compose! {
    fn arb_wide_tokens()(
        ids in proptest::collection::vec((0u32..40, 0u32..1500), 0..3000)
    ) -> Vec<String> {
        ids.into_iter()
            .map(|(head, tail)| if head < 30 { format!("h{}", head) } else { format!("t{}", tail) })
            .collect()
    }
}

prop_compose! {
    fn arb_lists()(
        blacklisted in proptest::collection::vec((0usize..8, 0..POOL.len()), 0..20),
        whitelisted in proptest::collection::vec(0..POOL.len(), 0..6)
    ) -> WordLists {
        let categories: Vec<Category> = Category::blacklist_order().collect();
        let mut blacklist: BTreeMap<Category, Vec<String>> = BTreeMap::new();
        for (c, w) in blacklisted {
            blacklist.entry(categories[c]).or_default().push(POOL[w].to_string());
        }
        let whitelist = whitelisted.into_iter().map(|w| POOL[w].to_string()).collect();
        WordLists::from_sets(blacklist, whitelist).unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_cleaning_accounts_for_every_token(tokens in arb_tokens(200), lists in arb_lists()) {
        let classifier = Classifier::new(Arc::new(lists));
        let (kept, stats) = clean(&tokens, &classifier);
        let removed: usize = stats.removed_by_category.values().sum();
        prop_assert_eq!(kept.len() + removed, tokens.len());
        prop_assert_eq!(stats.removed_words, removed);
    }

    #[test]
    fn test_whitelist_always_wins(lists in arb_lists(), i in 0..POOL.len()) {
        let word = POOL[i];
        let whitelisted = lists.is_whitelisted(word);
        let classifier = Classifier::new(Arc::new(lists));
        if whitelisted {
            prop_assert_eq!(classifier.classify(word), Category::Whitelisted);
        }
        prop_assert!(classifier.classify(word) != Category::Whitelisted || whitelisted);
    }

    #[test]
    fn test_unigrams_sum_to_length(tokens in arb_tokens(300)) {
        let model = NgramModel::build(&tokens, false);
        let summed: u64 = model.unigrams.iter().map(|(_, c)| c).sum();
        prop_assert_eq!(summed, tokens.len() as u64);
        prop_assert_eq!(model.bigrams.total(), tokens.len().saturating_sub(1) as u64);
        prop_assert_eq!(model.trigrams.total(), tokens.len().saturating_sub(2) as u64);
    }

    #[test]
    fn test_bigram_prefix_bounded_by_unigram(tokens in arb_tokens(300)) {
        let model = NgramModel::build(&tokens, false);
        for (id, count) in model.unigrams.iter() {
            let following: u64 = model.bigrams.continuations(id).iter().map(|(_, c)| c).sum();
            let is_last = tokens.last().map(String::as_str) == Some(model.vocab.word(id));
            if is_last {
                prop_assert_eq!(following + 1, count);
            } else {
                prop_assert_eq!(following, count);
            }
        }
    }

    #[test]
    fn test_conditionals_sum_to_one(tokens in arb_tokens(300)) {
        let model = NgramModel::build(&tokens, false);
        let last = tokens.last().cloned();
        for (id, _) in model.unigrams.iter() {
            let word = model.vocab.word(id);
            if Some(word) == last.as_deref() {
                continue;
            }
            let total: f64 = model.next_words(word, usize::MAX).iter().map(|(_, _, p)| p).sum();
            prop_assert!((total - 1.0).abs() < 1e-9, "{} sums to {}", word, total);
        }
    }

    #[test]
    fn test_coverage_is_monotonic(tokens in arb_tokens(300)) {
        let model = NgramModel::build(&tokens, false);
        let points: Vec<usize> = (1..=POOL.len()).collect();
        let cov = CoverageAnalysis::compute(&model, &points, &[]);
        for pair in cov.coverage_by_size.windows(2) {
            prop_assert!(pair[0].coverage_percentage <= pair[1].coverage_percentage);
        }
        if let Some(last) = cov.coverage_by_size.last() {
            if last.vocab_size == model.vocabulary_size() {
                prop_assert!((last.coverage_percentage - 100.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_metrics_never_nan(tokens in arb_tokens(50)) {
        let model = NgramModel::build(&tokens, false);
        let m = QualityMetrics::compute(&tokens, &model.unigrams);
        let fields = [
            m.type_token_ratio, m.hapax_percentage, m.dis_percentage, m.avg_word_length,
            m.top_10_coverage, m.top_100_coverage, m.top_1000_coverage, m.vocab_growth_rate,
        ];
        prop_assert!(fields.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_top_k_coverage_is_ordered(tokens in arb_wide_tokens()) {
        let model = NgramModel::build(&tokens, false);
        let m = QualityMetrics::compute(&tokens, &model.unigrams);
        prop_assert!(m.top_10_coverage <= m.top_100_coverage);
        prop_assert!(m.top_100_coverage <= m.top_1000_coverage);
        prop_assert!(m.top_1000_coverage <= 100.0 + 1e-9);
        if model.vocabulary_size() <= 1000 && !tokens.is_empty() {
            prop_assert!((m.top_1000_coverage - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_laplace_is_a_probability(tokens in arb_tokens(100), a in 0..POOL.len(), b in 0..POOL.len()) {
        let model = NgramModel::build(&tokens, false);
        let p = smoothing::laplace_smoothed(&model, POOL[a], POOL[b]);
        prop_assert!((0.0..=1.0).contains(&p));
        if model.unigram_count(POOL[a]) > 0 {
            prop_assert!(p > 0.0);
        }
    }
}
