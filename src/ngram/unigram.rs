use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Interns tokens to dense ids in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    ids: HashMap<String, u32>,
    words: Vec<String>,
}

impl Vocabulary {
    pub fn intern(&mut self, word: &str) -> u32 {
        if let Some(&id) = self.ids.get(word) {
            return id;
        }
        let id = self.words.len() as u32;
        self.ids.insert(word.to_string(), id);
        self.words.push(word.to_string());
        id
    }

    pub fn id(&self, word: &str) -> Option<u32> {
        self.ids.get(word).copied()
    }

    pub fn word(&self, id: u32) -> &str {
        &self.words[id as usize]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnigramEntry {
    pub count: u64,
    pub probability: f64,
    pub percentage: f64,
}

/// Word counts indexed by vocabulary id.
#[derive(Debug, Clone, Default)]
pub struct UnigramTable {
    counts: Vec<u64>,
    total: u64,
}

impl UnigramTable {
    pub fn from_ids(ids: &[u32], vocab_size: usize) -> Self {
        let mut counts = vec![0u64; vocab_size];
        for &id in ids {
            counts[id as usize] += 1;
        }
        Self {
            counts,
            total: ids.len() as u64,
        }
    }

    /// Rebuilds a table from (word, count) pairs, e.g. a reloaded report.
    pub fn from_counts<I, S>(pairs: I, vocab: &mut Vocabulary) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for (word, count) in pairs {
            let id = vocab.intern(word.as_ref()) as usize;
            if table.counts.len() <= id {
                table.counts.resize(id + 1, 0);
            }
            table.counts[id] += count;
            table.total += count;
        }
        table
    }

    pub fn count_id(&self, id: u32) -> u64 {
        self.counts.get(id as usize).copied().unwrap_or(0)
    }

    /// Total token occurrences, not distinct words.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Distinct words with a non-zero count.
    pub fn vocabulary_size(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn entry_id(&self, id: u32) -> Option<UnigramEntry> {
        let count = self.count_id(id);
        if count == 0 {
            return None;
        }
        let probability = count as f64 / self.total as f64;
        Some(UnigramEntry {
            count,
            probability,
            percentage: probability * 100.0,
        })
    }

    /// `(id, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (i as u32, c))
    }

    /// Ids by descending count, ties in first-seen order.
    pub fn ranked(&self) -> Vec<(u32, u64)> {
        let mut ranked: Vec<(u32, u64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts_accumulates_duplicates() {
        let mut vocab = Vocabulary::default();
        let table = UnigramTable::from_counts([("to", 2), ("je", 1), ("to", 3)], &mut vocab);
        assert_eq!(vocab.len(), 2);
        assert_eq!(table.count_id(vocab.id("to").unwrap()), 5);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_ranked_tie_break() {
        let mut vocab = Vocabulary::default();
        let ids: Vec<u32> = ["a", "b", "b", "c", "a"].iter().map(|w| vocab.intern(w)).collect();
        let table = UnigramTable::from_ids(&ids, vocab.len());
        let ranked: Vec<&str> = table.ranked().iter().map(|(id, _)| vocab.word(*id)).collect();
        assert_eq!(ranked, vec!["a", "b", "c"]);
    }
}
