use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cmd;
mod tables;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory for every generated report
    #[arg(global = true, short, long, default_value = "results")]
    out_dir: PathBuf,

    /// JSON file overriding built-in blacklist categories and whitelist
    #[arg(global = true, short, long)]
    wordlists: Option<PathBuf>,

    /// Count n-grams on the rayon pool
    #[arg(global = true, long, default_value_t = false)]
    parallel: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clean the corpus and build unigram, bigram and trigram models
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Zipf validation, coverage curve and lexicon export
    Words(cmd::words::WordsArgs),
    /// Character, digraph and trigraph frequencies
    Chars(cmd::chars::CharsArgs),
    /// Inspect the blacklist/whitelist sets
    Wordlists(cmd::wordlists::WordlistsArgs),
    /// Complete a prefix from the lexical model
    PredictWord(cmd::predict::PredictWordArgs),
    /// Suggest next words from the bigram model
    PredictNext(cmd::predict::PredictNextArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("🚀 Kashubian corpus statistics");

    let ctx = cmd::Context {
        out_dir: cli.out_dir,
        wordlists: cli.wordlists,
        parallel: cli.parallel,
    };

    let result = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, &ctx),
        Commands::Words(args) => cmd::words::run(args, &ctx),
        Commands::Chars(args) => cmd::chars::run(args, &ctx),
        Commands::Wordlists(args) => cmd::wordlists::run(args, &ctx),
        Commands::PredictWord(args) => cmd::predict::run_word(args, &ctx),
        Commands::PredictNext(args) => cmd::predict::run_next(args, &ctx),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
