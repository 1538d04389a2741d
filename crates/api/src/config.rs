use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub bind_addr: String,
    pub analyzer: AnalyzerDefaults,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerDefaults {
    /// Shortest token counted as a keyword when the request does not say.
    pub min_length: usize,
    /// How many ranked keywords a response carries by default.
    pub top_n: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_text_bytes: usize,
    pub max_dataset_rows: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            analyzer: AnalyzerDefaults {
                min_length: 4,
                top_n: 10,
            },
            limits: LimitsConfig {
                max_text_bytes: 1_000_000,
                max_dataset_rows: 50_000,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.analyzer.min_length, 4);
        assert_eq!(config.analyzer.top_n, 10);
        assert!(config.limits.max_dataset_rows > 0);
    }
}
