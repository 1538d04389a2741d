use dataset::CampaignDataset;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::AdSpendError;
use crate::regression::{LinearModel, fit, predict, recommend_spend};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub model: LinearModel,
    pub target_conversions: f64,
    pub recommended_spend: f64,
    /// Fitted value per input row, positionally aligned with the dataset.
    pub predicted_conversions: Vec<f64>,
}

/// One-shot optimization: aim for the best conversion count the dataset has
/// already seen.
pub fn optimize(dataset: &CampaignDataset) -> Result<OptimizationReport, AdSpendError> {
    let target = dataset
        .records
        .iter()
        .map(|r| r.conversions)
        .fold(f64::NEG_INFINITY, f64::max);

    optimize_toward(dataset, target)
}

/// Fit, invert for `target_conversions`, and attach per-row fitted values.
pub fn optimize_toward(
    dataset: &CampaignDataset,
    target_conversions: f64,
) -> Result<OptimizationReport, AdSpendError> {
    let model = fit(dataset)?;
    let recommended_spend = recommend_spend(&model, target_conversions)?;
    let predicted_conversions = predict(&model, dataset);

    info!(
        dataset_id = %dataset.dataset_id,
        target_conversions,
        recommended_spend,
        "spend optimization complete"
    );

    Ok(OptimizationReport {
        model,
        target_conversions,
        recommended_spend,
        predicted_conversions,
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
            .map(|(i, &(spend, conversions))| CampaignRecord {
                campaign_id: format!("c{i}"),
                spend,
                revenue: 0.0,
                conversions,
            })
            .collect();

        CampaignDataset::new("test".to_string(), "test.csv".to_string(), records)
    }

    #[test]
    fn test_optimize_targets_best_observed_conversions() {
        let data = ds(&[(10.0, 1.0), (20.0, 2.0), (30.0, 3.0)]);

        let report = optimize(&data).unwrap();

        assert_eq!(report.target_conversions, 3.0);
        // slope 0.1, intercept 0: hitting 3 conversions takes a spend of 30
        assert!((report.recommended_spend - 30.0).abs() < 1e-9);
        assert_eq!(report.predicted_conversions.len(), 3);
    }

    #[test]
    fn test_explicit_target_overrides_default() {
        let data = ds(&[(10.0, 1.0), (20.0, 2.0), (30.0, 3.0)]);

        let report = optimize_toward(&data, 5.0).unwrap();

        assert!((report.recommended_spend - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_optimize_empty_dataset_fails_in_fit() {
        let err = optimize(&ds(&[])).unwrap_err();
        assert!(matches!(err, AdSpendError::InsufficientData(_)));
    }

    #[test]
    fn test_flat_conversions_are_degenerate() {
        // Spend varies, conversions do not: slope is exactly zero
        let data = ds(&[(10.0, 2.0), (20.0, 2.0), (30.0, 2.0)]);

        let err = optimize(&data).unwrap_err();
        assert!(matches!(err, AdSpendError::DegenerateModel));
    }
}
