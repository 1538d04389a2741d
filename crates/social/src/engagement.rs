use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum EngagementError {
    #[error("record '{0}' has zero views; engagement rate is undefined")]
    DivisionByZero(String),
    #[error("no engagement records supplied")]
    InsufficientData,
}

/// One post's engagement counts, as supplied by the caller. Where the
/// numbers come from (export, API, spreadsheet) is not this crate's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementRecord {
    pub label: String,
    pub views: f64,
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
}

impl EngagementRecord {
    pub fn interactions(&self) -> f64 {
        self.likes + self.comments + self.shares
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementSummary {
    pub total_views: f64,
    pub total_interactions: f64,
    /// Mean of the per-record rates, not the pooled ratio.
    pub avg_rate_pct: f64,
}

/// Engagement rate per record, positionally aligned:
/// (likes + comments + shares) / views × 100.
pub fn engagement_rates(records: &[EngagementRecord]) -> Result<Vec<f64>, EngagementError> {
    records
        .iter()
        .map(|r| {
            if r.views == 0.0 {
                Err(EngagementError::DivisionByZero(r.label.clone()))
            } else {
                Ok(r.interactions() / r.views * 100.0)
            }
        })
        .collect()
}

pub fn summarize(records: &[EngagementRecord]) -> Result<EngagementSummary, EngagementError> {
    if records.is_empty() {
        return Err(EngagementError::InsufficientData);
    }

    let rates = engagement_rates(records)?;

    debug!(records = records.len(), "engagement summary computed");

    Ok(EngagementSummary {
        total_views: records.iter().map(|r| r.views).sum(),
        total_interactions: records.iter().map(|r| r.interactions()).sum(),
        avg_rate_pct: rates.iter().sum::<f64>() / rates.len() as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str, views: f64, likes: f64, comments: f64, shares: f64) -> EngagementRecord {
        EngagementRecord {
            label: label.to_string(),
            views,
            likes,
            comments,
            shares,
        }
    }

    #[test]
    fn test_rate_per_record() {
        let records = vec![
            record("post-1", 1000.0, 80.0, 15.0, 5.0),
            record("post-2", 500.0, 20.0, 5.0, 0.0),
        ];

        let rates = engagement_rates(&records).unwrap();

        assert_eq!(rates.len(), 2);
        assert!((rates[0] - 10.0).abs() < 1e-9);
        assert!((rates[1] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_views_is_an_error() {
        let records = vec![record("dead-post", 0.0, 1.0, 0.0, 0.0)];

        match engagement_rates(&records) {
            Err(EngagementError::DivisionByZero(label)) => assert_eq!(label, "dead-post"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_summary_averages_record_rates() {
        let records = vec![
            record("a", 1000.0, 100.0, 0.0, 0.0), // 10%
            record("b", 100.0, 20.0, 0.0, 0.0),   // 20%
        ];

        let summary = summarize(&records).unwrap();

        assert_eq!(summary.total_views, 1100.0);
        assert_eq!(summary.total_interactions, 120.0);
        // Mean of 10 and 20, not pooled 120/1100
        assert!((summary.avg_rate_pct - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_slice_rejected() {
        assert!(matches!(
            summarize(&[]),
            Err(EngagementError::InsufficientData)
        ));
    }
}
