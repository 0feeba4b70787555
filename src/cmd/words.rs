use super::{load_clean_tokens, Context, DEFAULT_TOKENS};
use crate::tables;
use clap::Args;
use csbcorpus::config::LexiconParams;
use csbcorpus::coverage::CoverageAnalysis;
use csbcorpus::error::{CorpusError, CorpusResult};
use csbcorpus::lexicon::Lexicon;
use csbcorpus::ngram::NgramModel;
use csbcorpus::report::{self, OutputDir};
use csbcorpus::tokenize;
use csbcorpus::zipf::ZipfAnalysis;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct WordsArgs {
    /// Preprocessed token file
    #[arg(default_value = DEFAULT_TOKENS)]
    pub tokens: PathBuf,

    /// Skip the blacklist/whitelist filter
    #[arg(long, default_value_t = false)]
    pub raw: bool,

    #[command(flatten)]
    pub lexicon: LexiconParams,
}

pub fn run(args: WordsArgs, ctx: &Context) -> CorpusResult<()> {
    info!("\n📈 === WORD FREQUENCY, ZIPF & COVERAGE === 📈");
    let points = args.lexicon.get_coverage_points().map_err(CorpusError::Config)?;
    let targets = args.lexicon.get_coverage_targets().map_err(CorpusError::Config)?;

    let tokens = if args.raw {
        tokenize::load_tokens(&args.tokens)?
    } else {
        let (kept, stats) = load_clean_tokens(ctx, &args.tokens)?;
        tables::print_cleaning_report(&stats);
        kept
    };

    let model = NgramModel::build(&tokens, ctx.parallel);
    let zipf = ZipfAnalysis::compute(&model);
    let coverage = CoverageAnalysis::compute(&model, &points, &targets);
    let lexicon = Lexicon::build(&model, &args.lexicon);

    let out = OutputDir::create(&ctx.out_dir)?;
    report::write_json(out.file(report::ZIPF_JSON), &zipf)?;
    report::write_json(out.file(report::COVERAGE_JSON), &coverage)?;
    report::write_json(out.file(report::LEXICON_JSON), &lexicon)?;
    report::write_frequency_tsv(
        out.file(report::LEXICON_TSV),
        lexicon.words.iter().map(|w| (w.word.as_str(), w.frequency)),
    )?;

    tables::print_zipf_report(&zipf);
    tables::print_coverage_report(&coverage);

    info!("💾 Word statistics written to {}", out.root().display());
    Ok(())
}
