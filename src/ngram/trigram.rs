use super::bigram::BigramTable;
use super::counter::{count_windows, OrderedCounter};

#[derive(Debug, Clone, Default)]
pub struct TrigramTable {
    counts: OrderedCounter<[u32; 3]>,
}

impl TrigramTable {
    pub fn from_ids(ids: &[u32], parallel: bool) -> Self {
        Self {
            counts: count_windows::<3>(ids, parallel),
        }
    }

    pub fn count(&self, w1: u32, w2: u32, w3: u32) -> u64 {
        self.counts.get(&[w1, w2, w3])
    }

    pub fn total(&self) -> u64 {
        self.counts.total()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// P(w3 | w1, w2) = count(w1, w2, w3) / count(w1, w2).
    pub fn conditional_probability(&self, bigrams: &BigramTable, w1: u32, w2: u32, w3: u32) -> f64 {
        let prefix = bigrams.count(w1, w2);
        if prefix == 0 {
            return 0.0;
        }
        self.count(w1, w2, w3) as f64 / prefix as f64
    }

    pub fn joint_probability(&self, w1: u32, w2: u32, w3: u32) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.count(w1, w2, w3) as f64 / self.total() as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = ([u32; 3], u64)> + '_ {
        self.counts.iter().map(|(k, c)| (*k, c))
    }

    pub fn most_common(&self, limit: Option<usize>) -> Vec<([u32; 3], u64)> {
        self.counts
            .most_common(limit)
            .into_iter()
            .map(|(k, c)| (*k, c))
            .collect()
    }
}
