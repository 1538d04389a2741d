use dataset::CampaignDataset;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::AdSpendError;

/// Least-squares line relating spend to conversions. Fitted fresh on every
/// call; never cached across requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    pub fn predict_one(&self, spend: f64) -> f64 {
        self.slope * spend + self.intercept
    }
}

/// Fit conversions against spend with ordinary least squares.
pub fn fit(dataset: &CampaignDataset) -> Result<LinearModel, AdSpendError> {
    if dataset.len() < 2 {
        return Err(AdSpendError::InsufficientData("need at least 2 rows"));
    }

    let spends: Vec<f64> = dataset.records.iter().map(|r| r.spend).collect();
    let conversions: Vec<f64> = dataset.records.iter().map(|r| r.conversions).collect();

    let spend_mean = statistical::mean(&spends);
    let conversion_mean = statistical::mean(&conversions);

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in spends.iter().zip(&conversions) {
        let dx = x - spend_mean;
        sxx += dx * dx;
        sxy += dx * (y - conversion_mean);
    }

    // Constant spend: the vertical line has no defined slope
    if sxx == 0.0 {
        return Err(AdSpendError::InsufficientData("spend has zero variance"));
    }

    let slope = sxy / sxx;
    let intercept = conversion_mean - slope * spend_mean;

    debug!(slope, intercept, rows = dataset.len(), "fitted spend model");

    Ok(LinearModel { slope, intercept })
}

/// Solve the fitted line for the spend that hits `target_conversions`.
pub fn recommend_spend(
    model: &LinearModel,
    target_conversions: f64,
) -> Result<f64, AdSpendError> {
    if model.slope == 0.0 {
        return Err(AdSpendError::DegenerateModel);
    }

    Ok((target_conversions - model.intercept) / model.slope)
}

/// Predicted conversions per row, positionally aligned with the dataset.
pub fn predict(model: &LinearModel, dataset: &CampaignDataset) -> Vec<f64> {
    dataset
        .records
        .iter()
        .map(|r| model.predict_one(r.spend))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::CampaignRecord;

    fn ds(rows: &[(f64, f64, f64)]) -> CampaignDataset {
        let records = rows
            .iter()
            .enumerate()
            .map(|(i, &(spend, revenue, conversions))| CampaignRecord {
                campaign_id: format!("c{i}"),
                spend,
                revenue,
                conversions,
            })
            .collect();

        CampaignDataset::new("test".to_string(), "test.csv".to_string(), records)
    }

    #[test]
    fn test_fit_exact_line() {
        let model = fit(&ds(&[(10.0, 0.0, 1.0), (20.0, 0.0, 2.0), (30.0, 0.0, 3.0)])).unwrap();

        assert!((model.slope - 0.1).abs() < 1e-9);
        assert!(model.intercept.abs() < 1e-9);
    }

    #[test]
    fn test_fit_rejects_single_row() {
        let err = fit(&ds(&[(10.0, 0.0, 1.0)])).unwrap_err();
        assert!(matches!(err, AdSpendError::InsufficientData(_)));
    }

    #[test]
    fn test_fit_rejects_constant_spend() {
        let err = fit(&ds(&[(5.0, 0.0, 1.0), (5.0, 0.0, 2.0), (5.0, 0.0, 3.0)])).unwrap_err();
        assert!(matches!(err, AdSpendError::InsufficientData(_)));
    }

    #[test]
    fn test_recommend_spend_inverts_the_line() {
        let data = ds(&[(10.0, 0.0, 3.0), (25.0, 0.0, 7.0), (40.0, 0.0, 9.0)]);
        let model = fit(&data).unwrap();

        let target = 8.0;
        let spend = recommend_spend(&model, target).unwrap();

        assert!((model.predict_one(spend) - target).abs() < 1e-9);
    }

    #[test]
    fn test_recommend_spend_zero_slope() {
        let model = LinearModel {
            slope: 0.0,
            intercept: 2.0,
        };

        assert!(matches!(
            recommend_spend(&model, 5.0),
            Err(AdSpendError::DegenerateModel)
        ));
    }

    #[test]
    fn test_predict_is_positionally_aligned() {
        let data = ds(&[(10.0, 0.0, 1.0), (20.0, 0.0, 2.0), (30.0, 0.0, 3.0)]);
        let model = fit(&data).unwrap();

        let predicted = predict(&model, &data);

        assert_eq!(predicted.len(), 3);
        for (p, r) in predicted.iter().zip(&data.records) {
            assert!((p - model.predict_one(r.spend)).abs() < 1e-12);
        }
        assert!((predicted[1] - 2.0).abs() < 1e-9);
    }
}
