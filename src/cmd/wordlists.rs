use super::Context;
use crate::tables;
use clap::Args;
use csbcorpus::error::CorpusResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct WordlistsArgs {
    /// Classify these words instead of printing the overlap table
    pub words: Vec<String>,
}

pub fn run(args: WordlistsArgs, ctx: &Context) -> CorpusResult<()> {
    info!("\n📋 === WORD LISTS === 📋");
    let classifier = ctx.classifier()?;

    if args.words.is_empty() {
        tables::print_wordlist_report(classifier.lists(), &classifier.overlaps());
    } else {
        for word in &args.words {
            info!("{:<20} -> {}", word, classifier.classify(word));
        }
    }
    Ok(())
}
