//! Human-readable ranked listings and tab-separated word lists.

use crate::cleaner::CleaningStats;
use crate::error::{CorpusError, CorpusResult};
use crate::ngram::NgramModel;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const RULE_WIDTH: usize = 70;

fn write_header<W: Write>(
    out: &mut W,
    title: &str,
    totals: [(&str, String); 2],
    cleaning: &CleaningStats,
) -> std::io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    for (label, value) in totals {
        writeln!(out, "{}: {}", label, value)?;
    }
    writeln!(
        out,
        "Cleaned with blacklist: removed {} words ({:.2}%)",
        cleaning.removed_words, cleaning.percentage_removed
    )?;
    writeln!(
        out,
        "Created: {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

fn ratio(count: u64, total: u64) -> f64 {
    if total > 0 {
        count as f64 / total as f64
    } else {
        0.0
    }
}

/// Top `limit` words with count, probability and percentage.
pub fn write_unigram_listing<P: AsRef<Path>>(
    path: P,
    model: &NgramModel,
    cleaning: &CleaningStats,
    limit: usize,
) -> CorpusResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_header(
        &mut out,
        &format!("KASHUBIAN LEXICAL MODEL (TOP {} WORDS)", limit),
        [
            ("Total words", model.total_words().to_string()),
            ("Unique words", model.vocabulary_size().to_string()),
        ],
        cleaning,
    )?;
    writeln!(out, "{:<6} {:<20} {:<10} {:<15} Percentage", "Rank", "Word", "Count", "Probability")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    let total = model.total_words();
    for (i, (word, count)) in model.top_unigrams(Some(limit)).into_iter().enumerate() {
        let p = ratio(count, total);
        writeln!(out, "{:<6} {:<20} {:<10} {:<15.8} {:.4}%", i + 1, word, count, p, p * 100.0)?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_bigram_listing<P: AsRef<Path>>(
    path: P,
    model: &NgramModel,
    cleaning: &CleaningStats,
    limit: usize,
) -> CorpusResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_header(
        &mut out,
        &format!("KASHUBIAN BIGRAM LANGUAGE MODEL (TOP {})", limit),
        [
            ("Total bigrams", model.bigrams.total().to_string()),
            ("Unique bigrams", model.bigrams.len().to_string()),
        ],
        cleaning,
    )?;
    writeln!(out, "{:<6} {:<35} {:<10} Probability", "Rank", "Bigram", "Count")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    let total = model.bigrams.total();
    for (i, (words, count)) in model.top_bigrams(Some(limit)).into_iter().enumerate() {
        let pair = words.join(" ");
        writeln!(out, "{:<6} {:<35} {:<10} {:.6}", i + 1, pair, count, ratio(count, total))?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_trigram_listing<P: AsRef<Path>>(
    path: P,
    model: &NgramModel,
    cleaning: &CleaningStats,
    limit: usize,
) -> CorpusResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_header(
        &mut out,
        &format!("KASHUBIAN TRIGRAM LANGUAGE MODEL (TOP {})", limit),
        [
            ("Total trigrams", model.trigrams.total().to_string()),
            ("Unique trigrams", model.trigrams.len().to_string()),
        ],
        cleaning,
    )?;
    writeln!(out, "{:<6} {:<45} {:<10} Probability", "Rank", "Trigram", "Count")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    let total = model.trigrams.total();
    for (i, (words, count)) in model.top_trigrams(Some(limit)).into_iter().enumerate() {
        let seq = words.join(" ");
        writeln!(out, "{:<6} {:<45} {:<10} {:.6}", i + 1, seq, count, ratio(count, total))?;
    }
    out.flush()?;
    Ok(())
}

/// `word<TAB>count` rows, no header.
pub fn write_frequency_tsv<'a, P, I>(path: P, rows: I) -> CorpusResult<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_path(path)?;
    for (word, count) in rows {
        wtr.write_record([word, count.to_string().as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reads rows written by [`write_frequency_tsv`]. Malformed rows are errors.
pub fn read_frequency_tsv<P: AsRef<Path>>(path: P) -> CorpusResult<Vec<(String, u64)>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CorpusError::MissingInput(path.to_path_buf()));
    }
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.len() != 2 {
            return Err(CorpusError::Validation(format!(
                "expected 2 columns, found {} in {:?}",
                record.len(),
                record
            )));
        }
        let count = record[1]
            .parse::<u64>()
            .map_err(|e| CorpusError::Validation(format!("bad count '{}': {}", &record[1], e)))?;
        rows.push((record[0].to_string(), count));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classifier;
    use crate::cleaner::clean;
    use std::fs;
    use tempfile::NamedTempFile;

    fn model() -> (NgramModel, CleaningStats) {
        let (kept, stats) = clean(&["w", "html", "to", "to", "je"], &Classifier::default());
        (NgramModel::build(&kept, false), stats)
    }

    #[test]
    fn test_unigram_listing_ranks() {
        let (model, stats) = model();
        let file = NamedTempFile::new().unwrap();
        write_unigram_listing(file.path(), &model, &stats, 1000).unwrap();

        let text = fs::read_to_string(file.path()).unwrap();
        assert!(text.starts_with("KASHUBIAN LEXICAL MODEL (TOP 1000 WORDS)"));
        assert!(text.contains("removed 1 words (20.00%)"));
        let first_row = text.lines().find(|l| l.starts_with("1 ")).unwrap();
        assert!(first_row.contains("to"));
        assert!(first_row.ends_with("50.0000%"));
    }

    #[test]
    fn test_ngram_listings_cap_rows() {
        let (model, stats) = model();
        let file = NamedTempFile::new().unwrap();
        write_bigram_listing(file.path(), &model, &stats, 2).unwrap();
        let text = fs::read_to_string(file.path()).unwrap();
        assert!(text.contains("w to"));
        assert!(!text.contains("to je"));

        write_trigram_listing(file.path(), &model, &stats, 100).unwrap();
        let text = fs::read_to_string(file.path()).unwrap();
        assert!(text.contains("w to to"));
        assert!(text.contains("to to je"));
    }

    #[test]
    fn test_frequency_tsv_round_trip() {
        let (model, _) = model();
        let file = NamedTempFile::new().unwrap();
        write_frequency_tsv(file.path(), model.top_unigrams(None)).unwrap();

        let rows = read_frequency_tsv(file.path()).unwrap();
        assert_eq!(rows[0], ("to".to_string(), 2));
        assert_eq!(rows.len(), 3);
        assert_eq!(fs::read_to_string(file.path()).unwrap().lines().next(), Some("to\t2"));
    }

    #[test]
    fn test_bad_tsv_row() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "to\tmany\n").unwrap();
        assert!(matches!(
            read_frequency_tsv(file.path()),
            Err(CorpusError::Validation(_))
        ));
    }
}
