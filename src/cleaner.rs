use crate::classifier::{Category, Classifier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningStats {
    pub original_words: usize,
    pub cleaned_words: usize,
    pub removed_words: usize,
    pub percentage_removed: f64,
    /// Every blacklist category, zero when nothing was removed under it.
    pub removed_by_category: BTreeMap<Category, usize>,
    /// Kept tokens found in the whitelist. Not a removal.
    pub protected_by_whitelist: usize,
    pub blacklist_size: usize,
    pub whitelist_size: usize,
}

impl CleaningStats {
    pub fn removed_in(&self, category: Category) -> usize {
        self.removed_by_category.get(&category).copied().unwrap_or(0)
    }
}

/// Splits `tokens` into the kept sequence and removal statistics.
///
/// Kept tokens retain their original order and surface form.
pub fn clean<S: AsRef<str>>(tokens: &[S], classifier: &Classifier) -> (Vec<String>, CleaningStats) {
    let mut removed_by_category: BTreeMap<Category, usize> =
        Category::blacklist_order().map(|c| (c, 0)).collect();
    let mut kept = Vec::with_capacity(tokens.len());
    let mut protected = 0;

    for token in tokens {
        let token = token.as_ref();
        match classifier.classify(token) {
            Category::Kept => kept.push(token.to_string()),
            Category::Whitelisted => {
                protected += 1;
                kept.push(token.to_string());
            }
            removal => *removed_by_category.entry(removal).or_default() += 1,
        }
    }

    let original = tokens.len();
    let removed = original - kept.len();
    let stats = CleaningStats {
        original_words: original,
        cleaned_words: kept.len(),
        removed_words: removed,
        percentage_removed: if original > 0 {
            removed as f64 / original as f64 * 100.0
        } else {
            0.0
        },
        removed_by_category,
        protected_by_whitelist: protected,
        blacklist_size: classifier.lists().blacklist_size(),
        whitelist_size: classifier.lists().whitelist_size(),
    };

    info!(
        "🧹 Cleaned corpus: kept {} of {} words ({:.2}% removed)",
        stats.cleaned_words, stats.original_words, stats.percentage_removed
    );

    (kept, stats)
}
