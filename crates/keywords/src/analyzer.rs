use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::stat::KeywordStat;

#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("min_length must be at least 1, got {0}")]
    InvalidInput(usize),
}

pub struct AnalyzerConfig {
    /// Shortest token (in characters) that still counts as a keyword.
    pub min_length: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { min_length: 4 }
    }
}

pub struct DensityAnalyzer {
    config: AnalyzerConfig,
}

impl DensityAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Rank the tokens of `text` by relative frequency, descending.
    ///
    /// The text is lower-cased and split on whitespace; tokens shorter than
    /// `min_length` characters are discarded before counting. Density is the
    /// token's share of the *counted* tokens, so the reported percentages sum
    /// to 100. Ties are broken by first appearance in the text.
    pub fn analyze(&self, text: &str) -> Result<Vec<KeywordStat>, KeywordError> {
        if self.config.min_length < 1 {
            return Err(KeywordError::InvalidInput(self.config.min_length));
        }

        let lowered = text.to_lowercase();

        // Count per token, remembering the order tokens were first seen in
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for token in lowered.split_whitespace() {
            if token.chars().count() < self.config.min_length {
                continue;
            }
            let count = counts.entry(token).or_insert(0);
            if *count == 0 {
                first_seen.push(token);
            }
            *count += 1;
        }

        let total_counted: usize = counts.values().sum();
        if total_counted == 0 {
            return Ok(Vec::new());
        }

        let mut stats: Vec<KeywordStat> = first_seen
            .iter()
            .map(|token| KeywordStat::new(token.to_string(), counts[token], total_counted))
            .collect();

        // first_seen order is the tie-break, so the sort must be stable
        stats.sort_by(|a, b| b.density_pct.partial_cmp(&a.density_pct).unwrap());

        debug!(
            tokens_counted = total_counted,
            distinct = stats.len(),
            "keyword density computed"
        );

        Ok(stats)
    }
}
