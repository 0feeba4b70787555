//! Letter-level statistics over the preprocessed character stream
//! (lowercase letters and spaces).

use crate::ngram::OrderedCounter;
use serde::{Deserialize, Serialize};

/// Diacritics that distinguish Kashubian orthography.
pub const KASHUBIAN_DIACRITICS: [(char, &str); 11] = [
    ('ą', "a with ogonek"),
    ('ã', "a with tilde"),
    ('é', "e with acute"),
    ('ë', "e with diaeresis"),
    ('ń', "n with acute"),
    ('ò', "o with grave"),
    ('ó', "o with acute"),
    ('ô', "o with circumflex"),
    ('ù', "u with grave"),
    ('ł', "l with stroke"),
    ('ż', "z with dot above"),
];

/// Two-letter spellings of single phonemes.
pub const PHONEMIC_DIGRAPHS: [&str; 6] = ["ch", "cz", "dz", "dż", "rz", "sz"];

fn percent(count: u64, total: u64) -> f64 {
    if total > 0 {
        count as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}

pub fn is_diacritic(c: char) -> bool {
    KASHUBIAN_DIACRITICS.iter().any(|(d, _)| *d == c)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharEntry {
    pub rank: usize,
    pub char: char,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiacriticEntry {
    pub char: char,
    pub description: String,
    pub count: u64,
    pub percentage: f64,
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterFrequency {
    pub total_characters: u64,
    #[serde(rename = "top_20_characters")]
    pub top_characters: Vec<CharEntry>,
    pub kashubian_diacritics: Vec<DiacriticEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDigraph {
    pub rank: usize,
    pub digraph: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTrigraph {
    pub rank: usize,
    pub trigraph: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigraphEntry {
    pub digraph: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigraphFrequency {
    pub total_digraphs: u64,
    pub important_kashubian_digraphs: Vec<DigraphEntry>,
    #[serde(rename = "top_20_digraphs")]
    pub top_digraphs: Vec<RankedDigraph>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrigraphFrequency {
    pub total_trigraphs: u64,
    #[serde(rename = "top_20_trigraphs")]
    pub top_trigraphs: Vec<RankedTrigraph>,
}

/// Counts letter windows of length `N`, skipping any window with a space.
fn count_sequences<const N: usize>(chars: &[char]) -> OrderedCounter<[char; N]> {
    let mut counter = OrderedCounter::new();
    for w in chars.windows(N) {
        if w.contains(&' ') {
            continue;
        }
        let mut key = [' '; N];
        key.copy_from_slice(w);
        counter.add(key);
    }
    counter
}

/// `(rank, sequence, count, percentage)` for the `top_n` most frequent windows.
fn ranked_sequences<const N: usize>(
    counter: &OrderedCounter<[char; N]>,
    top_n: usize,
) -> impl Iterator<Item = (usize, String, u64, f64)> + '_ {
    counter
        .most_common(Some(top_n))
        .into_iter()
        .enumerate()
        .map(|(i, (k, count))| (i + 1, k.iter().collect(), count, percent(count, counter.total())))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterAnalysis {
    pub characters: CharacterFrequency,
    pub digraphs: DigraphFrequency,
    pub trigraphs: TrigraphFrequency,
}

impl CharacterAnalysis {
    pub fn compute(text: &str, top_n: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();

        let mut singles = OrderedCounter::new();
        for &c in &chars {
            singles.add(c);
        }
        let total = singles.total();
        let ranked = singles.most_common(None);

        let top_characters = ranked
            .iter()
            .take(top_n)
            .enumerate()
            .map(|(i, (c, count))| CharEntry {
                rank: i + 1,
                char: **c,
                count: *count,
                percentage: percent(*count, total),
            })
            .collect();

        let mut kashubian_diacritics: Vec<DiacriticEntry> = KASHUBIAN_DIACRITICS
            .iter()
            .filter_map(|(d, description)| {
                let pos = ranked.iter().position(|(c, _)| **c == *d)?;
                let count = ranked[pos].1;
                Some(DiacriticEntry {
                    char: *d,
                    description: description.to_string(),
                    count,
                    percentage: percent(count, total),
                    rank: pos + 1,
                })
            })
            .collect();
        kashubian_diacritics.sort_by(|a, b| b.count.cmp(&a.count));

        let pairs = count_sequences::<2>(&chars);
        let important_kashubian_digraphs = PHONEMIC_DIGRAPHS
            .iter()
            .map(|d| {
                let mut key = [' '; 2];
                for (slot, c) in key.iter_mut().zip(d.chars()) {
                    *slot = c;
                }
                let count = pairs.get(&key);
                DigraphEntry {
                    digraph: d.to_string(),
                    count,
                    percentage: percent(count, pairs.total()),
                }
            })
            .collect();

        let triples = count_sequences::<3>(&chars);

        Self {
            characters: CharacterFrequency {
                total_characters: total,
                top_characters,
                kashubian_diacritics,
            },
            digraphs: DigraphFrequency {
                total_digraphs: pairs.total(),
                important_kashubian_digraphs,
                top_digraphs: ranked_sequences(&pairs, top_n)
                    .map(|(rank, digraph, count, percentage)| RankedDigraph {
                        rank,
                        digraph,
                        count,
                        percentage,
                    })
                    .collect(),
            },
            trigraphs: TrigraphFrequency {
                total_trigraphs: triples.total(),
                top_trigraphs: ranked_sequences(&triples, top_n)
                    .map(|(rank, trigraph, count, percentage)| RankedTrigraph {
                        rank,
                        trigraph,
                        count,
                        percentage,
                    })
                    .collect(),
            },
        }
    }
}
