use crate::cleaner::CleaningStats;
use crate::error::{CorpusError, CorpusResult};
use crate::metrics::QualityMetrics;
use crate::ngram::{NgramModel, UnigramEntry, UnigramTable, Vocabulary};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::Path;

pub const LEXICAL_MODEL_TYPE: &str = "lexical_model_unigram";
pub const BIGRAM_MODEL_TYPE: &str = "language_model_bigram";

/// JSON object that keeps its keys in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((k, v)) = access.next_entry::<String, V>()? {
            entries.push((k, v));
        }
        Ok(OrderedMap(entries))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// RFC 3339 local time.
    pub created: String,
    pub source: String,
    pub model_type: String,
    pub cleaning: CleaningStats,
}

impl ModelMetadata {
    pub fn new(source: &Path, model_type: &str, cleaning: &CleaningStats) -> Self {
        Self {
            created: chrono::Local::now().to_rfc3339(),
            source: source.display().to_string(),
            model_type: model_type.to_string(),
            cleaning: cleaning.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalStatistics {
    pub total_words: u64,
    pub unique_words: usize,
}

/// The unigram model document (`lexical_model.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalModelReport {
    pub metadata: ModelMetadata,
    pub statistics: LexicalStatistics,
    pub quality_metrics: QualityMetrics,
    pub words: OrderedMap<UnigramEntry>,
}

impl LexicalModelReport {
    pub fn new(model: &NgramModel, metadata: ModelMetadata, quality_metrics: QualityMetrics) -> Self {
        let words = model
            .unigrams
            .iter()
            .filter_map(|(id, _)| {
                let entry = model.unigrams.entry_id(id)?;
                Some((model.vocab.word(id).to_string(), entry))
            })
            .collect();
        Self {
            metadata,
            statistics: LexicalStatistics {
                total_words: model.total_words(),
                unique_words: model.vocabulary_size(),
            },
            quality_metrics,
            words: OrderedMap(words),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> CorpusResult<Self> {
        load_json(path.as_ref())
    }

    /// Rebuilds the unigram table from the stored counts.
    pub fn to_unigrams(&self) -> (Vocabulary, UnigramTable) {
        let mut vocab = Vocabulary::default();
        let table = UnigramTable::from_counts(
            self.words.iter().map(|(w, e)| (w, e.count)),
            &mut vocab,
        );
        (vocab, table)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BigramEntry {
    pub count: u64,
    pub conditional_probability: f64,
    pub joint_probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigramStatistics {
    pub total_bigrams: u64,
    pub unique_bigrams: usize,
}

/// The bigram model document (`bigram_model.json`), nested `w1 -> w2 -> entry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigramModelReport {
    pub metadata: ModelMetadata,
    pub statistics: BigramStatistics,
    pub bigrams: OrderedMap<OrderedMap<BigramEntry>>,
}

impl BigramModelReport {
    pub fn new(model: &NgramModel, metadata: ModelMetadata) -> Self {
        let mut groups: Vec<(String, OrderedMap<BigramEntry>)> = Vec::new();
        let mut slot = std::collections::HashMap::new();

        for ([w1, w2], count) in model.bigrams.iter() {
            let entry = BigramEntry {
                count,
                conditional_probability: model
                    .bigrams
                    .conditional_probability(&model.unigrams, w1, w2),
                joint_probability: model.bigrams.joint_probability(w1, w2),
            };
            let i = *slot.entry(w1).or_insert_with(|| {
                groups.push((model.vocab.word(w1).to_string(), OrderedMap::default()));
                groups.len() - 1
            });
            groups[i].1 .0.push((model.vocab.word(w2).to_string(), entry));
        }

        Self {
            metadata,
            statistics: BigramStatistics {
                total_bigrams: model.bigrams.total(),
                unique_bigrams: model.bigrams.len(),
            },
            bigrams: OrderedMap(groups),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> CorpusResult<Self> {
        load_json(path.as_ref())
    }
}

fn load_json<T: for<'de> Deserialize<'de>>(path: &Path) -> CorpusResult<T> {
    if !path.exists() {
        return Err(CorpusError::MissingInput(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Pretty-printed UTF-8 JSON.
pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> CorpusResult<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}
