pub mod analyzer;
pub mod stat;

pub use analyzer::{AnalyzerConfig, DensityAnalyzer, KeywordError};
pub use stat::KeywordStat;

/// Analyze with the default configuration (tokens of 4+ characters).
pub fn analyze_text(text: &str) -> Result<Vec<KeywordStat>, KeywordError> {
    let analyzer = DensityAnalyzer::new(AnalyzerConfig::default());
    analyzer.analyze(text)
}

/// Analyze with an explicit minimum token length.
pub fn analyze_with_min_length(
    text: &str,
    min_length: usize,
) -> Result<Vec<KeywordStat>, KeywordError> {
    let analyzer = DensityAnalyzer::new(AnalyzerConfig { min_length });
    analyzer.analyze(text)
}
