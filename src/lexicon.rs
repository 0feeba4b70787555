use crate::config::LexiconParams;
use crate::ngram::NgramModel;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconMetadata {
    pub min_frequency: u64,
    pub max_words: usize,
    pub vocabulary_size: usize,
    pub coverage_percentage: f64,
    pub total_corpus_words: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconWord {
    pub word: String,
    pub frequency: u64,
    pub rank: usize,
}

/// Frequency-filtered word list for a predictive-text lexical model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    pub metadata: LexiconMetadata,
    pub words: Vec<LexiconWord>,
}

impl Lexicon {
    /// Drops words below `min_frequency` (hapax legomena at the default of
    /// 2) and keeps at most `max_words` of the rest, most frequent first.
    pub fn build(model: &NgramModel, params: &LexiconParams) -> Self {
        let ranked = model.top_unigrams(None);
        let before = ranked.len();
        let words: Vec<LexiconWord> = ranked
            .into_iter()
            .filter(|(_, f)| *f >= params.min_frequency)
            .take(params.max_words)
            .enumerate()
            .map(|(i, (w, f))| LexiconWord {
                word: w.to_string(),
                frequency: f,
                rank: i + 1,
            })
            .collect();

        let covered: u64 = words.iter().map(|w| w.frequency).sum();
        let total = model.total_words();
        let coverage = if total > 0 {
            covered as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        info!(
            "📖 Lexicon: {} of {} words kept (min freq {}, cap {}), {:.2}% coverage",
            words.len(),
            before,
            params.min_frequency,
            params.max_words,
            coverage
        );

        Self {
            metadata: LexiconMetadata {
                min_frequency: params.min_frequency,
                max_words: params.max_words,
                vocabulary_size: words.len(),
                coverage_percentage: coverage,
                total_corpus_words: total,
            },
            words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_filters_and_caps() {
        let tokens = ["a", "a", "a", "b", "b", "c", "d", "d"];
        let model = NgramModel::build(&tokens, false);
        let params = LexiconParams {
            min_frequency: 2,
            max_words: 2,
            ..Default::default()
        };
        let lex = Lexicon::build(&model, &params);

        let words: Vec<&str> = lex.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["a", "b"]);
        assert_eq!(lex.words[1].rank, 2);
        assert_eq!(lex.metadata.coverage_percentage, 62.5);
    }
}
