use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use csbcorpus::chars::CharacterAnalysis;
use csbcorpus::classifier::{Category, Overlap};
use csbcorpus::cleaner::CleaningStats;
use csbcorpus::coverage::CoverageAnalysis;
use csbcorpus::metrics::QualityMetrics;
use csbcorpus::ngram::NgramModel;
use csbcorpus::predict::{NextWord, WordSuggestion};
use csbcorpus::smoothing;
use csbcorpus::wordlists::WordLists;
use csbcorpus::zipf::{ZipfAnalysis, ZipfStrength};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_cleaning_report(stats: &CleaningStats) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Removed"),
        Cell::new("% of corpus"),
    ]);
    align_right(&mut table, 1..=2);

    let pct = |n: usize| {
        if stats.original_words > 0 {
            n as f64 / stats.original_words as f64 * 100.0
        } else {
            0.0
        }
    };

    for (category, n) in &stats.removed_by_category {
        table.add_row(vec![
            Cell::new(category.to_string()),
            Cell::new(n),
            Cell::new(format!("{:.2}%", pct(*n))),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total removed").add_attribute(Attribute::Bold),
        Cell::new(stats.removed_words).fg(Color::Red),
        Cell::new(format!("{:.2}%", stats.percentage_removed)).fg(Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Protected by whitelist"),
        Cell::new(stats.protected_by_whitelist).fg(Color::Green),
        Cell::new(format!("{:.2}%", pct(stats.protected_by_whitelist))),
    ]);
    table.add_row(vec![
        Cell::new("Kept").add_attribute(Attribute::Bold),
        Cell::new(stats.cleaned_words).fg(Color::Cyan),
        Cell::new(format!("{:.2}%", 100.0 - stats.percentage_removed)),
    ]);
    println!("\n{}", table);
}

pub fn print_quality_report(m: &QualityMetrics) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Corpus Quality").add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);
    align_right(&mut table, 1..=1);

    let rows = [
        ("Type-token ratio", format!("{:.4}", m.type_token_ratio)),
        (
            "Hapax legomena",
            format!("{} ({:.2}%)", m.hapax_legomena, m.hapax_percentage),
        ),
        (
            "Dis legomena",
            format!("{} ({:.2}%)", m.dis_legomena, m.dis_percentage),
        ),
        ("Avg word length", format!("{:.2}", m.avg_word_length)),
        ("Top 10 coverage", format!("{:.2}%", m.top_10_coverage)),
        ("Top 100 coverage", format!("{:.2}%", m.top_100_coverage)),
        ("Top 1000 coverage", format!("{:.2}%", m.top_1000_coverage)),
        ("Vocab growth rate", format!("{:.2}", m.vocab_growth_rate)),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    println!("\n{}", table);
}

pub fn print_top_words(model: &NgramModel, rows: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Word"),
        Cell::new("Count"),
        Cell::new("%").fg(Color::Cyan),
    ]);
    align_right(&mut table, 2..=3);

    for (i, (word, count)) in model.top_unigrams(Some(rows)).into_iter().enumerate() {
        let pct = model.unigram(word).map_or(0.0, |e| e.percentage);
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(word).add_attribute(Attribute::Bold),
            Cell::new(count),
            Cell::new(format!("{:.2}", pct)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

/// Top bigrams with their conditional and add-one smoothed probabilities.
pub fn print_top_bigrams(model: &NgramModel, rows: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Bigram"),
        Cell::new("Count"),
        Cell::new("P(w2|w1)").fg(Color::Cyan),
        Cell::new("Laplace"),
    ]);
    align_right(&mut table, 2..=4);

    for (i, ([w1, w2], count)) in model.top_bigrams(Some(rows)).into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{} {}", w1, w2)).add_attribute(Attribute::Bold),
            Cell::new(count),
            Cell::new(format!("{:.3}", model.bigram_probability(w1, w2))).fg(Color::Cyan),
            Cell::new(format!("{:.6}", smoothing::laplace_smoothed(model, w1, w2))),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_top_trigrams(model: &NgramModel, rows: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Trigram"),
        Cell::new("Count"),
        Cell::new("P(w3|w1 w2)").fg(Color::Cyan),
    ]);
    align_right(&mut table, 2..=3);

    for (i, ([w1, w2, w3], count)) in model.top_trigrams(Some(rows)).into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{} {} {}", w1, w2, w3)).add_attribute(Attribute::Bold),
            Cell::new(count),
            Cell::new(format!("{:.3}", model.trigram_probability(w1, w2, w3))).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

/// Frequency-of-frequencies with the Good-Turing re-estimate, lowest `rows`
/// frequencies only.
pub fn print_good_turing(model: &NgramModel, rows: usize) {
    let fof = smoothing::frequency_of_frequencies(model);
    let adjusted = smoothing::good_turing_adjust(&fof);

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Freq").add_attribute(Attribute::Bold),
        Cell::new("Words"),
        Cell::new("Adjusted").fg(Color::Cyan),
    ]);
    align_right(&mut table, 0..=2);

    for (f, n) in fof.iter().take(rows) {
        let adj = adjusted.get(f).copied().unwrap_or(*f as f64);
        table.add_row(vec![
            Cell::new(f),
            Cell::new(n),
            Cell::new(format!("{:.3}", adj)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_zipf_report(z: &ZipfAnalysis) {
    let verdict = match z.strength {
        ZipfStrength::Strong => Cell::new("Strong Zipf distribution").fg(Color::Green),
        ZipfStrength::Present => Cell::new("Zipf distribution present").fg(Color::Yellow),
        ZipfStrength::Weak => Cell::new("Weak Zipf fit").fg(Color::Red),
    };

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Zipf's Law").add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);
    align_right(&mut table, 1..=1);
    table.add_row(vec![Cell::new("Correlation (log-log)"), Cell::new(format!("{:.4}", z.correlation))]);
    table.add_row(vec![Cell::new("Slope"), Cell::new(format!("{:.4}", z.slope))]);
    table.add_row(vec![Cell::new("Intercept"), Cell::new(format!("{:.4}", z.intercept))]);
    table.add_row(vec![
        Cell::new("Zipf constant (mean ± std)"),
        Cell::new(format!("{:.1} ± {:.1}", z.zipf_constant_mean, z.zipf_constant_std)),
    ]);
    table.add_row(vec![
        Cell::new("Coefficient of variation"),
        Cell::new(format!("{:.2}%", z.coefficient_of_variation)),
    ]);
    table.add_row(vec![Cell::new("Verdict"), verdict]);
    println!("\n{}", table);

    if z.examples.is_empty() {
        return;
    }
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Word"),
        Cell::new("Freq"),
        Cell::new("Rank×Freq"),
        Cell::new("Expected"),
    ]);
    align_right(&mut table, 2..=4);
    for e in &z.examples {
        table.add_row(vec![
            Cell::new(e.rank),
            Cell::new(&e.word).add_attribute(Attribute::Bold),
            Cell::new(e.frequency),
            Cell::new(e.product),
            Cell::new(format!("{:.0}", e.expected_frequency)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_coverage_report(c: &CoverageAnalysis) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Vocab Size").add_attribute(Attribute::Bold),
        Cell::new("Words Covered"),
        Cell::new("Coverage").fg(Color::Cyan),
        Cell::new("% of Vocab"),
    ]);
    align_right(&mut table, 0..=3);
    for p in &c.coverage_by_size {
        table.add_row(vec![
            Cell::new(p.vocab_size),
            Cell::new(p.words_covered),
            Cell::new(format!("{:.2}%", p.coverage_percentage)).fg(Color::Cyan),
            Cell::new(format!("{:.2}%", p.vocab_percentage)),
        ]);
    }
    println!("\n{}", table);

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Target").add_attribute(Attribute::Bold),
        Cell::new("Words Needed"),
    ]);
    align_right(&mut table, 0..=1);
    for (target, needed) in &c.vocab_for_coverage {
        table.add_row(vec![Cell::new(format!("{}%", target)), Cell::new(needed)]);
    }
    println!("\n{}", table);
}

pub fn print_character_report(a: &CharacterAnalysis, rows: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Char"),
        Cell::new("Count"),
        Cell::new("%").fg(Color::Cyan),
    ]);
    align_right(&mut table, 2..=3);
    for e in a.characters.top_characters.iter().take(rows) {
        let shown = if e.char == ' ' { "␣".to_string() } else { e.char.to_string() };
        table.add_row(vec![
            Cell::new(e.rank),
            Cell::new(shown).set_alignment(CellAlignment::Center),
            Cell::new(e.count),
            Cell::new(format!("{:.2}", e.percentage)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Diacritic").add_attribute(Attribute::Bold),
        Cell::new("Description"),
        Cell::new("Count"),
        Cell::new("%"),
        Cell::new("Rank"),
    ]);
    align_right(&mut table, 2..=4);
    for d in &a.characters.kashubian_diacritics {
        table.add_row(vec![
            Cell::new(d.char).set_alignment(CellAlignment::Center),
            Cell::new(&d.description),
            Cell::new(d.count),
            Cell::new(format!("{:.2}", d.percentage)),
            Cell::new(d.rank),
        ]);
    }
    println!("\n{}", table);

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Digraph").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("%").fg(Color::Cyan),
    ]);
    align_right(&mut table, 1..=2);
    for d in &a.digraphs.important_kashubian_digraphs {
        table.add_row(vec![
            Cell::new(&d.digraph).add_attribute(Attribute::Bold),
            Cell::new(d.count),
            Cell::new(format!("{:.2}", d.percentage)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_wordlist_report(lists: &WordLists, overlaps: &[Overlap]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Words"),
    ]);
    align_right(&mut table, 1..=1);
    for (category, size) in lists.category_sizes() {
        table.add_row(vec![Cell::new(category.to_string()), Cell::new(size)]);
    }
    table.add_row(vec![
        Cell::new("Blacklist (union)").add_attribute(Attribute::Bold),
        Cell::new(lists.blacklist_size()).fg(Color::Red),
    ]);
    table.add_row(vec![
        Cell::new(Category::Whitelisted.to_string()).add_attribute(Attribute::Bold),
        Cell::new(lists.whitelist_size()).fg(Color::Green),
    ]);
    println!("\n{}", table);

    if overlaps.is_empty() {
        return;
    }
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Overlapping Word").add_attribute(Attribute::Bold),
        Cell::new("Categories"),
        Cell::new("Resolves To"),
    ]);
    for o in overlaps {
        let names: Vec<String> = o.categories.iter().map(|c| c.to_string()).collect();
        let resolved = if o.whitelisted {
            Cell::new(Category::Whitelisted.to_string()).fg(Color::Green)
        } else {
            let first = o.categories.first().map_or(Category::Kept, |c| *c);
            Cell::new(first.to_string()).fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&o.word).add_attribute(Attribute::Bold),
            Cell::new(names.join(", ")),
            resolved,
        ]);
    }
    println!("\n{}", table);
}

pub fn print_word_suggestions(prefix: &str, suggestions: &[WordSuggestion]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("Words starting with '{}'", prefix)).add_attribute(Attribute::Bold),
        Cell::new("Count"),
    ]);
    align_right(&mut table, 1..=1);
    for s in suggestions {
        table.add_row(vec![Cell::new(&s.word), Cell::new(s.count)]);
    }
    println!("\n{}", table);
}

pub fn print_next_words(previous: &str, next: &[NextWord]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("After '{}'", previous)).add_attribute(Attribute::Bold),
        Cell::new("P").fg(Color::Cyan),
        Cell::new("Count"),
    ]);
    align_right(&mut table, 1..=2);
    for n in next {
        table.add_row(vec![
            Cell::new(&n.word),
            Cell::new(format!("{:.3}", n.probability)).fg(Color::Cyan),
            Cell::new(n.count),
        ]);
    }
    println!("\n{}", table);
}
