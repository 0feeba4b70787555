use csbcorpus::classifier::Classifier;
use csbcorpus::cleaner::clean;
use csbcorpus::config::LexiconParams;
use csbcorpus::lexicon::Lexicon;
use csbcorpus::metrics::QualityMetrics;
use csbcorpus::ngram::NgramModel;
use csbcorpus::predict;
use csbcorpus::report::{self, BigramModelReport, LexicalModelReport, ModelMetadata, OutputDir};
use csbcorpus::tokenize;
use std::fs;
use std::path::Path;

const TEXT: &str = "Kaszëbë to je kraj. Kaszëbë to je môłi kraj, a html to nie je \
                    kaszëbsczi. The kraj je pòmòrsczi-kraj.";

struct Pipeline {
    model: NgramModel,
    lexical: LexicalModelReport,
    bigram: BigramModelReport,
}

fn run_pipeline() -> Pipeline {
    let tokens = tokenize::tokenize(TEXT);
    let (kept, stats) = clean(&tokens, &Classifier::default());
    let model = NgramModel::build(&kept, false);
    let metrics = QualityMetrics::compute(&kept, &model.unigrams);

    let meta = ModelMetadata::new(Path::new("tokens.txt"), report::LEXICAL_MODEL_TYPE, &stats);
    let lexical = LexicalModelReport::new(&model, meta, metrics);
    let meta = ModelMetadata::new(Path::new("tokens.txt"), report::BIGRAM_MODEL_TYPE, &stats);
    let bigram = BigramModelReport::new(&model, meta);
    Pipeline {
        model,
        lexical,
        bigram,
    }
}

#[test]
fn test_lexical_model_round_trip() {
    let p = run_pipeline();
    let dir = tempfile::tempdir().unwrap();
    let out = OutputDir::create(dir.path().join("results")).unwrap();
    let path = out.file(report::LEXICAL_MODEL_JSON);

    report::write_json(&path, &p.lexical).unwrap();
    let reloaded = LexicalModelReport::load(&path).unwrap();
    assert_eq!(reloaded.statistics, p.lexical.statistics);
    assert_eq!(reloaded.metadata.created, p.lexical.metadata.created);

    let (vocab, table) = reloaded.to_unigrams();
    assert_eq!(table.total(), p.model.total_words());
    for (id, count) in p.model.unigrams.iter() {
        let word = p.model.vocab.word(id);
        let reloaded_id = vocab.id(word).unwrap();
        assert_eq!(table.count_id(reloaded_id), count, "count of '{}'", word);
    }
    assert_eq!(vocab.len(), p.model.vocabulary_size());
}

#[test]
fn test_json_keeps_utf8_and_cleaning_stats() {
    let p = run_pipeline();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(report::LEXICAL_MODEL_JSON);
    report::write_json(&path, &p.lexical).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"kaszëbë\""));
    assert!(text.contains("\"model_type\": \"lexical_model_unigram\""));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["metadata"]["cleaning"]["removed_by_category"]["web_markup"], 1);
    assert_eq!(value["metadata"]["cleaning"]["removed_by_category"]["english"], 1);
    assert_eq!(value["statistics"]["total_words"], p.model.total_words());
}

#[test]
fn test_predictions_from_saved_reports() {
    let p = run_pipeline();
    let dir = tempfile::tempdir().unwrap();
    let lex_path = dir.path().join(report::LEXICAL_MODEL_JSON);
    let bi_path = dir.path().join(report::BIGRAM_MODEL_JSON);
    report::write_json(&lex_path, &p.lexical).unwrap();
    report::write_json(&bi_path, &p.bigram).unwrap();

    let lexical = LexicalModelReport::load(&lex_path).unwrap();
    let words: Vec<String> = predict::complete_prefix(&lexical, "kr", 5)
        .into_iter()
        .map(|s| s.word)
        .collect();
    assert_eq!(words, vec!["kraj"]);

    let bigram = BigramModelReport::load(&bi_path).unwrap();
    let next = predict::next_words(&bigram, "to", 5);
    assert_eq!(next[0].word, "je");
    assert!((next[0].probability - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_lexicon_tsv_matches_json() {
    let p = run_pipeline();
    let lexicon = Lexicon::build(&p.model, &LexiconParams::default());
    let dir = tempfile::tempdir().unwrap();
    let tsv = dir.path().join(report::LEXICON_TSV);
    report::write_frequency_tsv(&tsv, lexicon.words.iter().map(|w| (w.word.as_str(), w.frequency)))
        .unwrap();

    let rows = report::read_frequency_tsv(&tsv).unwrap();
    assert_eq!(rows.len(), lexicon.words.len());
    assert!(rows.iter().all(|(_, f)| *f >= 2));
    assert_eq!(rows[0].0, lexicon.words[0].word);
}
