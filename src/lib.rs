pub mod chars;
pub mod classifier;
pub mod cleaner;
pub mod config;
pub mod coverage;
pub mod error;
pub mod lexicon;
pub mod metrics;
pub mod ngram;
pub mod predict;
pub mod report;
pub mod smoothing;
pub mod tokenize;
pub mod wordlists;
pub mod zipf;
// cmd and tables belong to the binary (main.rs).
