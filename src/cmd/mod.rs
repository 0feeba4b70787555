pub mod analyze;
pub mod chars;
pub mod predict;
pub mod wordlists;
pub mod words;

use csbcorpus::classifier::Classifier;
use csbcorpus::cleaner::{self, CleaningStats};
use csbcorpus::error::CorpusResult;
use csbcorpus::tokenize;
use csbcorpus::wordlists::WordLists;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

pub const DEFAULT_TOKENS: &str = "results/tokens_preprocessed.txt";
pub const DEFAULT_CHARS: &str = "results/characters_preprocessed.txt";

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub out_dir: PathBuf,
    pub wordlists: Option<PathBuf>,
    pub parallel: bool,
}

impl Context {
    pub fn word_lists(&self) -> CorpusResult<WordLists> {
        match &self.wordlists {
            Some(path) => WordLists::load_from_file(path),
            None => Ok(WordLists::builtin()),
        }
    }

    pub fn classifier(&self) -> CorpusResult<Classifier> {
        Ok(Classifier::new(Arc::new(self.word_lists()?)))
    }
}

/// Loads the token file and runs it through the blacklist/whitelist filter.
pub fn load_clean_tokens(ctx: &Context, path: &Path) -> CorpusResult<(Vec<String>, CleaningStats)> {
    let tokens = tokenize::load_tokens(path)?;
    let classifier = ctx.classifier()?;
    info!("🧹 Cleaning {} tokens", tokens.len());
    Ok(cleaner::clean(&tokens, &classifier))
}
