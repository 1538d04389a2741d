use serde::{Deserialize, Serialize};

/// One ranked keyword: how often it appeared and its share of the counted
/// tokens, as a percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordStat {
    pub token: String,
    pub count: usize,
    pub density_pct: f64,
}

impl KeywordStat {
    pub fn new(token: String, count: usize, total_counted: usize) -> Self {
        let density_pct = count as f64 / total_counted as f64 * 100.0;

        Self {
            token,
            count,
            density_pct,
        }
    }
}
