use criterion::{criterion_group, criterion_main, Criterion};
use csbcorpus::classifier::Classifier;
use csbcorpus::cleaner::clean;
use csbcorpus::ngram::NgramModel;
use std::hint::black_box;

fn synthetic_corpus(len: usize) -> Vec<String> {
    // Roughly Zipfian draw over a small vocabulary.
    let words = [
        "w", "to", "je", "na", "z", "a", "kaszëbë", "kraj", "mòwa", "html", "the", "pòmòrsczi",
        "gdańsk", "môłi", "nie", "czësto", "rzeczë", "dlô", "òd", "bëc",
    ];
    let mut rng = fastrand::Rng::with_seed(42);
    (0..len)
        .map(|_| {
            let r = rng.f64();
            let idx = ((words.len() as f64) * r * r) as usize;
            words[idx.min(words.len() - 1)].to_string()
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let tokens = synthetic_corpus(200_000);
    let classifier = Classifier::default();
    let (kept, _) = clean(&tokens, &classifier);

    c.bench_function("clean (200k tokens)", |b| {
        b.iter(|| clean(black_box(&tokens), &classifier))
    });
    c.bench_function("ngram build sequential", |b| {
        b.iter(|| NgramModel::build(black_box(&kept), false))
    });
    c.bench_function("ngram build parallel", |b| {
        b.iter(|| NgramModel::build(black_box(&kept), true))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
