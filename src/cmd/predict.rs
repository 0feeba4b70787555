use super::Context;
use crate::tables;
use clap::Args;
use csbcorpus::error::CorpusResult;
use csbcorpus::predict;
use csbcorpus::report::{self, BigramModelReport, LexicalModelReport};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct PredictWordArgs {
    pub prefix: String,

    /// Lexical model report (defaults to the one in --out-dir)
    #[arg(long)]
    pub model: Option<PathBuf>,

    #[arg(short = 'n', long, default_value_t = 5)]
    pub top: usize,
}

#[derive(Args, Debug, Clone)]
pub struct PredictNextArgs {
    pub word: String,

    /// Bigram model report (defaults to the one in --out-dir)
    #[arg(long)]
    pub model: Option<PathBuf>,

    #[arg(short = 'n', long, default_value_t = 5)]
    pub top: usize,
}

pub fn run_word(args: PredictWordArgs, ctx: &Context) -> CorpusResult<()> {
    let path = args
        .model
        .unwrap_or_else(|| ctx.out_dir.join(report::LEXICAL_MODEL_JSON));
    info!("📂 Loading lexical model: {}", path.display());
    let model = LexicalModelReport::load(&path)?;

    let suggestions = predict::complete_prefix(&model, &args.prefix, args.top);
    if suggestions.is_empty() {
        warn!("No words start with '{}'", args.prefix);
    } else {
        tables::print_word_suggestions(&args.prefix, &suggestions);
    }
    Ok(())
}

pub fn run_next(args: PredictNextArgs, ctx: &Context) -> CorpusResult<()> {
    let path = args
        .model
        .unwrap_or_else(|| ctx.out_dir.join(report::BIGRAM_MODEL_JSON));
    info!("📂 Loading bigram model: {}", path.display());
    let model = BigramModelReport::load(&path)?;

    let next = predict::next_words(&model, &args.word, args.top);
    if next.is_empty() {
        warn!("Word '{}' not found in bigram model", args.word);
    } else {
        tables::print_next_words(&args.word, &next);
    }
    Ok(())
}
