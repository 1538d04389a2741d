use dataset::CampaignDataset;
use serde::{Deserialize, Serialize};

use crate::AdSpendError;

/// The three headline numbers of the ad performance view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendSummary {
    pub total_spend: f64,
    pub total_revenue: f64,
    pub roi_pct: f64,
}

/// Return on investment over the whole dataset, as a percentage.
pub fn roi(dataset: &CampaignDataset) -> Result<f64, AdSpendError> {
    let total_spend: f64 = dataset.records.iter().map(|r| r.spend).sum();

    if total_spend == 0.0 {
        return Err(AdSpendError::DivisionByZero);
    }

    let total_revenue: f64 = dataset.records.iter().map(|r| r.revenue).sum();

    Ok((total_revenue - total_spend) / total_spend * 100.0)
}

pub fn spend_summary(dataset: &CampaignDataset) -> Result<SpendSummary, AdSpendError> {
    let roi_pct = roi(dataset)?;

    Ok(SpendSummary {
        total_spend: dataset.records.iter().map(|r| r.spend).sum(),
        total_revenue: dataset.records.iter().map(|r| r.revenue).sum(),
        roi_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::CampaignRecord;

    fn ds(rows: &[(f64, f64)]) -> CampaignDataset {
        let records = rows
            .iter()
            .enumerate()
            .map(|(i, &(spend, revenue))| CampaignRecord {
                campaign_id: format!("c{i}"),
                spend,
                revenue,
                conversions: 0.0,
            })
            .collect();

        CampaignDataset::new("test".to_string(), "test.csv".to_string(), records)
    }

    #[test]
    fn test_break_even_roi_is_zero() {
        // 200 spent, 200 back
        let roi_pct = roi(&ds(&[(100.0, 150.0), (100.0, 50.0)])).unwrap();
        assert!((roi_pct - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_profitable_roi() {
        let roi_pct = roi(&ds(&[(100.0, 250.0)])).unwrap();
        assert!((roi_pct - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_spend_is_an_error_not_a_nan() {
        let err = roi(&ds(&[(0.0, 10.0), (0.0, 20.0)])).unwrap_err();
        assert!(matches!(err, AdSpendError::DivisionByZero));
    }

    #[test]
    fn test_empty_dataset_is_zero_spend() {
        let err = roi(&ds(&[])).unwrap_err();
        assert!(matches!(err, AdSpendError::DivisionByZero));
    }

    #[test]
    fn test_summary_matches_roi() {
        let summary = spend_summary(&ds(&[(100.0, 150.0), (100.0, 50.0)])).unwrap();

        assert_eq!(summary.total_spend, 200.0);
        assert_eq!(summary.total_revenue, 200.0);
        assert!((summary.roi_pct - 0.0).abs() < 1e-9);
    }
}
