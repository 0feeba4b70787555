pub mod bigram;
pub mod counter;
pub mod trigram;
pub mod unigram;

pub use self::bigram::BigramTable;
pub use self::counter::OrderedCounter;
pub use self::trigram::TrigramTable;
pub use self::unigram::{UnigramEntry, UnigramTable, Vocabulary};

use tracing::{debug, info};

/// Unigram, bigram and trigram tables built in one pass over a cleaned
/// token sequence. Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct NgramModel {
    pub vocab: Vocabulary,
    pub unigrams: UnigramTable,
    pub bigrams: BigramTable,
    pub trigrams: TrigramTable,
}

impl NgramModel {
    pub fn build<S: AsRef<str>>(tokens: &[S], parallel: bool) -> Self {
        let mut vocab = Vocabulary::default();
        let ids: Vec<u32> = tokens.iter().map(|t| vocab.intern(t.as_ref())).collect();

        let unigrams = UnigramTable::from_ids(&ids, vocab.len());
        let bigrams = BigramTable::from_ids(&ids, parallel);
        let trigrams = TrigramTable::from_ids(&ids, parallel);

        info!(
            "📊 N-gram tables: {} words, {} bigrams, {} trigrams",
            vocab.len(),
            bigrams.len(),
            trigrams.len()
        );
        debug!(
            "Occurrences: {} unigrams, {} bigrams, {} trigrams (parallel: {})",
            unigrams.total(),
            bigrams.total(),
            trigrams.total(),
            parallel
        );

        Self {
            vocab,
            unigrams,
            bigrams,
            trigrams,
        }
    }

    pub fn total_words(&self) -> u64 {
        self.unigrams.total()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.unigrams.vocabulary_size()
    }

    pub fn unigram(&self, word: &str) -> Option<UnigramEntry> {
        self.vocab.id(word).and_then(|id| self.unigrams.entry_id(id))
    }

    pub fn unigram_count(&self, word: &str) -> u64 {
        self.vocab.id(word).map_or(0, |id| self.unigrams.count_id(id))
    }

    pub fn bigram_count(&self, w1: &str, w2: &str) -> u64 {
        match (self.vocab.id(w1), self.vocab.id(w2)) {
            (Some(a), Some(b)) => self.bigrams.count(a, b),
            _ => 0,
        }
    }

    pub fn trigram_count(&self, w1: &str, w2: &str, w3: &str) -> u64 {
        match (self.vocab.id(w1), self.vocab.id(w2), self.vocab.id(w3)) {
            (Some(a), Some(b), Some(c)) => self.trigrams.count(a, b, c),
            _ => 0,
        }
    }

    pub fn bigram_probability(&self, w1: &str, w2: &str) -> f64 {
        match (self.vocab.id(w1), self.vocab.id(w2)) {
            (Some(a), Some(b)) => self.bigrams.conditional_probability(&self.unigrams, a, b),
            _ => 0.0,
        }
    }

    pub fn trigram_probability(&self, w1: &str, w2: &str, w3: &str) -> f64 {
        match (self.vocab.id(w1), self.vocab.id(w2), self.vocab.id(w3)) {
            (Some(a), Some(b), Some(c)) => {
                self.trigrams
                    .conditional_probability(&self.bigrams, a, b, c)
            }
            _ => 0.0,
        }
    }

    /// Words by descending count, ties in first-seen order.
    pub fn top_unigrams(&self, limit: Option<usize>) -> Vec<(&str, u64)> {
        let ranked = self.unigrams.ranked();
        let n = limit.unwrap_or(ranked.len());
        ranked
            .into_iter()
            .take(n)
            .map(|(id, c)| (self.vocab.word(id), c))
            .collect()
    }

    pub fn top_bigrams(&self, limit: Option<usize>) -> Vec<([&str; 2], u64)> {
        self.bigrams
            .most_common(limit)
            .into_iter()
            .map(|(k, c)| (k.map(|id| self.vocab.word(id)), c))
            .collect()
    }

    pub fn top_trigrams(&self, limit: Option<usize>) -> Vec<([&str; 3], u64)> {
        self.trigrams
            .most_common(limit)
            .into_iter()
            .map(|(k, c)| (k.map(|id| self.vocab.word(id)), c))
            .collect()
    }

    /// Likely successors of `word` as (word, count, P(next | word)).
    pub fn next_words(&self, word: &str, limit: usize) -> Vec<(&str, u64, f64)> {
        let Some(w1) = self.vocab.id(word) else {
            return Vec::new();
        };
        let prefix = self.unigrams.count_id(w1) as f64;
        self.bigrams
            .continuations(w1)
            .into_iter()
            .take(limit)
            .map(|(w2, c)| (self.vocab.word(w2), c, c as f64 / prefix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_example_tables() {
        let model = NgramModel::build(&["w", "to", "to", "je"], false);

        let to = model.unigram("to").unwrap();
        assert_eq!(to.count, 2);
        assert_eq!(to.probability, 0.5);
        assert_eq!(to.percentage, 50.0);

        assert_eq!(model.bigram_count("w", "to"), 1);
        assert_eq!(model.bigram_count("to", "to"), 1);
        assert_eq!(model.bigram_count("to", "je"), 1);
        assert_eq!(model.bigrams.len(), 3);
        assert_eq!(model.trigrams.total(), 2);
    }

    #[test]
    fn test_corpus_final_prefix_has_no_continuation() {
        let model = NgramModel::build(&["a", "b", "a"], false);
        // 'a' occurs twice but only once with a successor
        assert_eq!(model.bigram_probability("a", "b"), 0.5);
        assert_eq!(model.next_words("a", 5), vec![("b", 1, 0.5)]);
    }

    #[test]
    fn test_trigram_conditional_uses_bigram_prefix() {
        let model = NgramModel::build(&["x", "y", "z", "x", "y", "w"], false);
        assert_eq!(model.trigram_probability("x", "y", "z"), 0.5);
        assert_eq!(model.trigram_probability("x", "y", "w"), 0.5);
        assert_eq!(model.trigram_probability("y", "y", "w"), 0.0);
    }

    #[test]
    fn test_unknown_words() {
        let model = NgramModel::build(&["a"], false);
        assert!(model.unigram("zz").is_none());
        assert!(model.bigrams.is_empty());
        assert!(model.next_words("zz", 3).is_empty());
    }
}
