use rayon::prelude::*;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

/// Window starts below which the parallel path is not worth the merge.
const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Counter that remembers the order in which keys were first seen.
///
/// `most_common` sorts stably, so equal counts keep first-seen order.
#[derive(Debug, Clone)]
pub struct OrderedCounter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, u64)>,
    total: u64,
}

impl<K> Default for OrderedCounter<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
            total: 0,
        }
    }
}

impl<K: Hash + Eq + Clone> OrderedCounter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        self.add_n(key, 1);
    }

    pub fn add_n(&mut self, key: K, n: u64) {
        self.total += n;
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += n,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, n));
            }
        }
    }

    pub fn get(&self, key: &K) -> u64 {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    pub fn most_common(&self, limit: Option<usize>) -> Vec<(&K, u64)> {
        let mut ranked: Vec<(&K, u64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(n) = limit {
            ranked.truncate(n);
        }
        ranked
    }

    /// Folds `other` in. Keys new to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: OrderedCounter<K>) {
        for (key, n) in other.entries {
            self.add_n(key, n);
        }
    }
}

fn count_range<const N: usize>(ids: &[u32], starts: Range<usize>) -> OrderedCounter<[u32; N]> {
    let mut counter = OrderedCounter::new();
    for s in starts {
        let mut key = [0u32; N];
        key.copy_from_slice(&ids[s..s + N]);
        counter.add(key);
    }
    counter
}

/// Counts every window of `N` consecutive ids.
///
/// The parallel path splits window *start* positions into contiguous ranges,
/// so a window straddling a chunk boundary belongs to exactly one chunk.
/// Chunks are merged in order, which reproduces the sequential first-seen
/// order exactly.
pub fn count_windows<const N: usize>(ids: &[u32], parallel: bool) -> OrderedCounter<[u32; N]> {
    if N == 0 || ids.len() < N {
        return OrderedCounter::new();
    }
    let starts = ids.len() - N + 1;
    if !parallel || starts < PARALLEL_THRESHOLD {
        return count_range::<N>(ids, 0..starts);
    }

    let chunk = starts
        .div_ceil(rayon::current_num_threads())
        .max(PARALLEL_THRESHOLD / 4);
    let bounds: Vec<usize> = (0..starts).step_by(chunk).collect();
    let parts: Vec<OrderedCounter<[u32; N]>> = bounds
        .into_par_iter()
        .map(|lo| count_range::<N>(ids, lo..(lo + chunk).min(starts)))
        .collect();

    let mut merged = OrderedCounter::new();
    for part in parts {
        merged.merge(part);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_common_ties_keep_first_seen_order() {
        let mut c = OrderedCounter::new();
        for k in ["b", "a", "c", "a", "b", "d"] {
            c.add(k);
        }
        let ranked: Vec<_> = c.most_common(None).into_iter().map(|(k, n)| (*k, n)).collect();
        assert_eq!(ranked, vec![("b", 2), ("a", 2), ("c", 1), ("d", 1)]);
        assert_eq!(c.total(), 6);
    }

    #[test]
    fn test_count_windows_short_input_is_empty() {
        let c = count_windows::<3>(&[1, 2], false);
        assert!(c.is_empty());
        assert_eq!(c.total(), 0);
    }

    #[test]
    fn test_count_windows_overlapping() {
        let c = count_windows::<2>(&[0, 1, 1, 1], false);
        assert_eq!(c.get(&[0, 1]), 1);
        assert_eq!(c.get(&[1, 1]), 2);
        assert_eq!(c.total(), 3);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let ids: Vec<u32> = (0..200_000u32).map(|i| (i * 7 + i / 13) % 97).collect();
        let seq = count_windows::<3>(&ids, false);
        let par = count_windows::<3>(&ids, true);
        assert_eq!(seq.total(), par.total());
        let a: Vec<_> = seq.iter().collect();
        let b: Vec<_> = par.iter().collect();
        assert_eq!(a, b);
    }
}
