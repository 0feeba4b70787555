pub mod listing;
pub mod model;

pub use self::listing::{
    read_frequency_tsv, write_bigram_listing, write_frequency_tsv, write_trigram_listing,
    write_unigram_listing,
};
pub use self::model::{
    write_json, BigramEntry, BigramModelReport, LexicalModelReport, ModelMetadata, OrderedMap,
    BIGRAM_MODEL_TYPE, LEXICAL_MODEL_TYPE,
};

use crate::error::CorpusResult;
use std::fs;
use std::path::{Path, PathBuf};

pub const LEXICAL_MODEL_JSON: &str = "lexical_model.json";
pub const LEXICAL_MODEL_TXT: &str = "lexical_model.txt";
pub const WORD_FREQUENCIES_TSV: &str = "word_frequencies.txt";
pub const BIGRAM_MODEL_JSON: &str = "bigram_model.json";
pub const BIGRAM_MODEL_TXT: &str = "bigram_model.txt";
pub const TRIGRAM_MODEL_TXT: &str = "trigram_model.txt";
pub const ZIPF_JSON: &str = "zipf_analysis.json";
pub const COVERAGE_JSON: &str = "coverage_analysis.json";
pub const LEXICON_JSON: &str = "lexicon.json";
pub const LEXICON_TSV: &str = "lexicon_wordlist.tsv";
pub const CHARACTER_JSON: &str = "character_frequency.json";
pub const DIGRAPH_JSON: &str = "digraph_frequency.json";
pub const TRIGRAPH_JSON: &str = "trigraph_frequency.json";

/// Output directory, created on first use.
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    pub fn create<P: AsRef<Path>>(root: P) -> CorpusResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
