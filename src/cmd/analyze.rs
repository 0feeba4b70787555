use super::{load_clean_tokens, Context, DEFAULT_TOKENS};
use crate::tables;
use clap::Args;
use csbcorpus::config::ReportLimits;
use csbcorpus::error::CorpusResult;
use csbcorpus::metrics::QualityMetrics;
use csbcorpus::ngram::NgramModel;
use csbcorpus::report::{self, OutputDir};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Preprocessed token file
    #[arg(default_value = DEFAULT_TOKENS)]
    pub tokens: PathBuf,

    #[command(flatten)]
    pub limits: ReportLimits,
}

pub fn run(args: AnalyzeArgs, ctx: &Context) -> CorpusResult<()> {
    info!("\n📚 === LEXICAL & LANGUAGE MODELS === 📚");
    let (kept, stats) = load_clean_tokens(ctx, &args.tokens)?;
    tables::print_cleaning_report(&stats);

    let model = NgramModel::build(&kept, ctx.parallel);
    let metrics = QualityMetrics::compute(&kept, &model.unigrams);

    let out = OutputDir::create(&ctx.out_dir)?;

    let meta = report::ModelMetadata::new(&args.tokens, report::LEXICAL_MODEL_TYPE, &stats);
    let lexical = report::LexicalModelReport::new(&model, meta, metrics.clone());
    report::write_json(out.file(report::LEXICAL_MODEL_JSON), &lexical)?;
    report::write_unigram_listing(
        out.file(report::LEXICAL_MODEL_TXT),
        &model,
        &stats,
        args.limits.top_unigrams,
    )?;
    report::write_frequency_tsv(out.file(report::WORD_FREQUENCIES_TSV), model.top_unigrams(None))?;

    let meta = report::ModelMetadata::new(&args.tokens, report::BIGRAM_MODEL_TYPE, &stats);
    let bigram = report::BigramModelReport::new(&model, meta);
    report::write_json(out.file(report::BIGRAM_MODEL_JSON), &bigram)?;
    report::write_bigram_listing(
        out.file(report::BIGRAM_MODEL_TXT),
        &model,
        &stats,
        args.limits.top_bigrams,
    )?;
    report::write_trigram_listing(
        out.file(report::TRIGRAM_MODEL_TXT),
        &model,
        &stats,
        args.limits.top_trigrams,
    )?;

    let rows = args.limits.console_rows;
    tables::print_quality_report(&metrics);
    tables::print_top_words(&model, rows);
    tables::print_top_bigrams(&model, rows);
    tables::print_top_trigrams(&model, rows);
    tables::print_good_turing(&model, rows);

    info!("💾 Models written to {}", out.root().display());
    Ok(())
}
