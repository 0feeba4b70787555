use crate::ngram::NgramModel;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Ranks kept in the rank/frequency and log-log series.
pub const SERIES_LIMIT: usize = 1000;
/// Ranks shown as worked examples of `freq ≈ f1 / rank`.
pub const EXAMPLE_RANKS: [usize; 8] = [1, 2, 3, 5, 10, 20, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZipfStrength {
    /// correlation < -0.85
    Strong,
    /// correlation < -0.70
    Present,
    Weak,
}

impl ZipfStrength {
    pub fn from_correlation(r: f64) -> Self {
        if r < -0.85 {
            Self::Strong
        } else if r < -0.70 {
            Self::Present
        } else {
            Self::Weak
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankFrequency {
    pub rank: usize,
    pub word: String,
    pub frequency: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogLogPoint {
    pub log_rank: f64,
    pub log_frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZipfExample {
    pub rank: usize,
    pub word: String,
    pub frequency: u64,
    pub product: u64,
    pub expected_frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZipfAnalysis {
    pub correlation: f64,
    pub slope: f64,
    pub intercept: f64,
    pub strength: ZipfStrength,
    pub validates_zipf: bool,
    pub zipf_constant_mean: f64,
    pub zipf_constant_std: f64,
    pub coefficient_of_variation: f64,
    pub examples: Vec<ZipfExample>,
    pub rank_frequency_data: Vec<RankFrequency>,
    pub log_log_data: Vec<LogLogPoint>,
}

/// Pearson correlation and least-squares line `y = slope * x + intercept`.
/// Degenerate input (fewer than two points, or no spread) gives zeros.
fn fit(xs: &[f64], ys: &[f64]) -> (f64, f64, f64) {
    let n = xs.len() as f64;
    if xs.len() < 2 {
        return (0.0, 0.0, ys.first().copied().unwrap_or(0.0));
    }
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
    let r = if sxx > 0.0 && syy > 0.0 {
        sxy / (sxx * syy).sqrt()
    } else {
        0.0
    };
    (r, slope, mean_y - slope * mean_x)
}

impl ZipfAnalysis {
    pub fn compute(model: &NgramModel) -> Self {
        let ranked = model.top_unigrams(None);

        let (log_ranks, log_freqs): (Vec<f64>, Vec<f64>) = ranked
            .iter()
            .enumerate()
            .map(|(i, (_, f))| (((i + 1) as f64).log10(), (*f as f64).log10()))
            .unzip();
        let (correlation, slope, intercept) = fit(&log_ranks, &log_freqs);

        let constants: Vec<f64> = ranked
            .iter()
            .take(SERIES_LIMIT)
            .enumerate()
            .map(|(i, (_, f))| (*f * (i as u64 + 1)) as f64)
            .collect();
        let (mean, std) = if constants.is_empty() {
            (0.0, 0.0)
        } else {
            let n = constants.len() as f64;
            let mean = constants.iter().sum::<f64>() / n;
            let var = constants.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / n;
            (mean, var.sqrt())
        };

        let top = ranked.first().map_or(0, |(_, f)| *f);
        let examples = EXAMPLE_RANKS
            .iter()
            .filter(|&&r| r <= ranked.len())
            .map(|&rank| {
                let (word, freq) = ranked[rank - 1];
                ZipfExample {
                    rank,
                    word: word.to_string(),
                    frequency: freq,
                    product: freq * rank as u64,
                    expected_frequency: top as f64 / rank as f64,
                }
            })
            .collect();

        Self {
            correlation,
            slope,
            intercept,
            strength: ZipfStrength::from_correlation(correlation),
            validates_zipf: correlation < -0.85,
            zipf_constant_mean: mean,
            zipf_constant_std: std,
            coefficient_of_variation: if mean > 0.0 { std / mean * 100.0 } else { 0.0 },
            examples,
            rank_frequency_data: ranked
                .iter()
                .take(SERIES_LIMIT)
                .enumerate()
                .map(|(i, (w, f))| RankFrequency {
                    rank: i + 1,
                    word: w.to_string(),
                    frequency: *f,
                })
                .collect(),
            log_log_data: log_ranks
                .iter()
                .zip(&log_freqs)
                .take(SERIES_LIMIT)
                .map(|(&log_rank, &log_frequency)| LogLogPoint {
                    log_rank,
                    log_frequency,
                })
                .collect(),
        }
    }
}
