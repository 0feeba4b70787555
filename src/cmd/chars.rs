use super::{Context, DEFAULT_CHARS};
use crate::tables;
use clap::Args;
use csbcorpus::chars::CharacterAnalysis;
use csbcorpus::error::CorpusResult;
use csbcorpus::report::{self, OutputDir};
use csbcorpus::tokenize;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CharsArgs {
    /// Preprocessed character stream
    #[arg(default_value = DEFAULT_CHARS)]
    pub chars: PathBuf,

    /// Entries kept in each ranked list
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}

pub fn run(args: CharsArgs, ctx: &Context) -> CorpusResult<()> {
    info!("\n🔤 === CHARACTER FREQUENCY === 🔤");
    let raw = tokenize::read_lossy(&args.chars)?;
    let stream = tokenize::extract_characters(&raw);
    info!("📂 Character stream: {} characters", stream.chars().count());

    let analysis = CharacterAnalysis::compute(&stream, args.top);

    let out = OutputDir::create(&ctx.out_dir)?;
    report::write_json(out.file(report::CHARACTER_JSON), &analysis.characters)?;
    report::write_json(out.file(report::DIGRAPH_JSON), &analysis.digraphs)?;
    report::write_json(out.file(report::TRIGRAPH_JSON), &analysis.trigraphs)?;

    tables::print_character_report(&analysis, args.top);
    info!("💾 Character statistics written to {}", out.root().display());
    Ok(())
}
