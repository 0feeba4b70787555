use super::counter::{count_windows, OrderedCounter};
use super::unigram::UnigramTable;

/// Adjacent-pair counts over vocabulary ids.
#[derive(Debug, Clone, Default)]
pub struct BigramTable {
    counts: OrderedCounter<[u32; 2]>,
}

impl BigramTable {
    pub fn from_ids(ids: &[u32], parallel: bool) -> Self {
        Self {
            counts: count_windows::<2>(ids, parallel),
        }
    }

    pub fn count(&self, w1: u32, w2: u32) -> u64 {
        self.counts.get(&[w1, w2])
    }

    /// Total pair occurrences.
    pub fn total(&self) -> u64 {
        self.counts.total()
    }

    /// Distinct pairs.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// P(w2 | w1) = count(w1, w2) / count(w1).
    ///
    /// The denominator is the unigram count, not the sum over observed
    /// continuations: a corpus-final `w1` has one occurrence with no successor.
    pub fn conditional_probability(&self, unigrams: &UnigramTable, w1: u32, w2: u32) -> f64 {
        let prefix = unigrams.count_id(w1);
        if prefix == 0 {
            return 0.0;
        }
        self.count(w1, w2) as f64 / prefix as f64
    }

    /// P(w1, w2) = count(w1, w2) / total pairs.
    pub fn joint_probability(&self, w1: u32, w2: u32) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.count(w1, w2) as f64 / self.total() as f64
    }

    /// Observed successors of `w1` with counts, most frequent first.
    pub fn continuations(&self, w1: u32) -> Vec<(u32, u64)> {
        let mut next: Vec<(u32, u64)> = self
            .counts
            .iter()
            .filter(|(k, _)| k[0] == w1)
            .map(|(k, c)| (k[1], c))
            .collect();
        next.sort_by(|a, b| b.1.cmp(&a.1));
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = ([u32; 2], u64)> + '_ {
        self.counts.iter().map(|(k, c)| (*k, c))
    }

    pub fn most_common(&self, limit: Option<usize>) -> Vec<([u32; 2], u64)> {
        self.counts
            .most_common(limit)
            .into_iter()
            .map(|(k, c)| (*k, c))
            .collect()
    }
}
