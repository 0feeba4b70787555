use crate::wordlists::WordLists;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::{debug, warn};

/// Outcome of classifying a single token.
///
/// Variant order is the resolution priority: blacklist categories are tested
/// top to bottom and the first hit wins. The order is an implementation
/// choice, not a linguistic one; a token listed in two categories is simply
/// reported under the earlier of them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    WebMarkup,
    English,
    Foreign,
    ProperNoun,
    Abbreviation,
    Number,
    LanguageCode,
    SingleChar,
    Whitelisted,
    Kept,
}

impl Category {
    /// Blacklist categories in resolution order.
    pub fn blacklist_order() -> impl Iterator<Item = Category> {
        Category::iter().filter(|c| c.is_removal())
    }

    pub fn is_removal(self) -> bool {
        !matches!(self, Category::Whitelisted | Category::Kept)
    }
}

/// A word present in the whitelist and in at least one blacklist category, or
/// in more than one blacklist category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    pub word: String,
    pub categories: Vec<Category>,
    pub whitelisted: bool,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    lists: Arc<WordLists>,
}

impl Classifier {
    pub fn new(lists: Arc<WordLists>) -> Self {
        let classifier = Self { lists };
        let overlaps = classifier.overlaps();
        let protected = overlaps.iter().filter(|o| o.whitelisted).count();
        if protected > 0 {
            warn!(
                "⚠️  {} words are both blacklisted and whitelisted (whitelist takes precedence)",
                protected
            );
        }
        for o in &overlaps {
            debug!("Overlap '{}': {:?} (whitelisted: {})", o.word, o.categories, o.whitelisted);
        }
        classifier
    }

    pub fn lists(&self) -> &WordLists {
        &self.lists
    }

    pub fn classify(&self, token: &str) -> Category {
        let lowered = token.to_lowercase();
        if self.lists.is_whitelisted(&lowered) {
            return Category::Whitelisted;
        }
        Category::blacklist_order()
            .find(|c| {
                self.lists
                    .category(*c)
                    .is_some_and(|set| set.contains(&lowered))
            })
            .unwrap_or(Category::Kept)
    }

    pub fn should_keep(&self, token: &str) -> bool {
        !self.classify(token).is_removal()
    }

    /// Lists every word whose resolution depends on priority, sorted by word.
    pub fn overlaps(&self) -> Vec<Overlap> {
        let mut words: Vec<&String> = Category::blacklist_order()
            .filter_map(|c| self.lists.category(c))
            .flatten()
            .collect();
        words.sort();
        words.dedup();

        words
            .into_iter()
            .filter_map(|w| {
                let categories: Vec<Category> = Category::blacklist_order()
                    .filter(|c| self.lists.category(*c).is_some_and(|s| s.contains(w)))
                    .collect();
                let whitelisted = self.lists.is_whitelisted(w);
                if whitelisted || categories.len() > 1 {
                    Some(Overlap {
                        word: w.clone(),
                        categories,
                        whitelisted,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Arc::new(WordLists::builtin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lists(black: &[(Category, &[&str])], white: &[&str]) -> Arc<WordLists> {
        let blacklist: BTreeMap<Category, Vec<String>> = black
            .iter()
            .map(|(c, ws)| (*c, ws.iter().map(|w| w.to_string()).collect()))
            .collect();
        let whitelist = white.iter().map(|w| w.to_string()).collect();
        Arc::new(WordLists::from_sets(blacklist, whitelist).unwrap())
    }

    #[test]
    fn test_whitelist_beats_blacklist() {
        let c = Classifier::new(lists(&[(Category::English, &["to"])], &["to"]));
        assert_eq!(c.classify("to"), Category::Whitelisted);
        assert_eq!(c.classify("TO"), Category::Whitelisted);
    }

    #[test]
    fn test_priority_order_resolves_multi_category() {
        let c = Classifier::new(lists(
            &[
                (Category::Number, &["l"]),
                (Category::Abbreviation, &["l"]),
                (Category::SingleChar, &["l"]),
            ],
            &[],
        ));
        assert_eq!(c.classify("l"), Category::Abbreviation);
    }

    #[test]
    fn test_unlisted_is_kept() {
        let c = Classifier::default();
        assert_eq!(c.classify("kaszëbsczi"), Category::Kept);
        assert!(c.should_keep("gmina"));
    }

    #[test]
    fn test_overlaps_report_whitelist_conflicts() {
        let c = Classifier::new(lists(
            &[(Category::English, &["we", "the"]), (Category::Foreign, &["the"])],
            &["we"],
        ));
        let overlaps = c.overlaps();
        assert_eq!(overlaps.len(), 2);
        assert_eq!(overlaps[0].word, "the");
        assert_eq!(overlaps[0].categories, vec![Category::English, Category::Foreign]);
        assert!(!overlaps[0].whitelisted);
        assert_eq!(overlaps[1].word, "we");
        assert!(overlaps[1].whitelisted);
    }

    #[test]
    fn test_category_names_are_snake_case() {
        assert_eq!(Category::ProperNoun.to_string(), "proper_noun");
        assert_eq!(Category::LanguageCode.as_ref(), "language_code");
        assert_eq!(
            serde_json::to_string(&Category::WebMarkup).unwrap(),
            "\"web_markup\""
        );
    }
}
