use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ReportLimits {
    /// Unigrams written to the ranked lexical listing
    #[arg(long, default_value_t = 1000)]
    pub top_unigrams: usize,
    #[arg(long, default_value_t = 100)]
    pub top_bigrams: usize,
    #[arg(long, default_value_t = 100)]
    pub top_trigrams: usize,
    /// Rows echoed to the console summary tables
    #[arg(long, default_value_t = 10)]
    pub console_rows: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            top_unigrams: 1000,
            top_bigrams: 100,
            top_trigrams: 100,
            console_rows: 10,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct LexiconParams {
    #[arg(long, default_value_t = 2)]
    pub min_frequency: u64,
    #[arg(long, default_value_t = 50_000)]
    pub max_words: usize,
    /// Vocabulary sizes sampled for the coverage curve
    #[arg(long, default_value = "100,500,1000,2000,5000,10000,20000,50000")]
    pub coverage_points: String,
    /// Corpus coverage targets (percent)
    #[arg(long, default_value = "80,90,95,99")]
    pub coverage_targets: String,
}

impl Default for LexiconParams {
    fn default() -> Self {
        Self {
            min_frequency: 2,
            max_words: 50_000,
            coverage_points: "100,500,1000,2000,5000,10000,20000,50000".to_string(),
            coverage_targets: "80,90,95,99".to_string(),
        }
    }
}

impl LexiconParams {
    pub fn get_coverage_points(&self) -> Result<Vec<usize>, String> {
        parse_list(&self.coverage_points, "coverage_points")
    }

    pub fn get_coverage_targets(&self) -> Result<Vec<f64>, String> {
        let targets: Vec<f64> = parse_list(&self.coverage_targets, "coverage_targets")?;
        if let Some(bad) = targets.iter().find(|t| !(0.0..=100.0).contains(*t)) {
            return Err(format!("--coverage-targets value {} is not a percentage", bad));
        }
        Ok(targets)
    }
}

fn parse_list<T: std::str::FromStr>(s: &str, name: &str) -> Result<Vec<T>, String> {
    s.split(',')
        .filter(|p| !p.trim().is_empty())
        .map(|p| {
            p.trim()
                .parse()
                .map_err(|_| format!("Invalid value '{}' in --{}", p.trim(), name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_coverage_points_parse() {
        let params = LexiconParams::default();
        assert_eq!(
            params.get_coverage_points().unwrap(),
            vec![100, 500, 1000, 2000, 5000, 10000, 20000, 50000]
        );
    }

    #[test]
    fn test_bad_coverage_target_rejected() {
        let params = LexiconParams {
            coverage_targets: "80,140".to_string(),
            ..Default::default()
        };
        assert!(params.get_coverage_targets().is_err());
    }

    #[test]
    fn test_garbage_point_rejected() {
        let params = LexiconParams {
            coverage_points: "100,lots".to_string(),
            ..Default::default()
        };
        let err = params.get_coverage_points().unwrap_err();
        assert!(err.contains("lots"));
    }
}
