pub mod optimizer;
pub mod regression;
pub mod roi;

pub use optimizer::{OptimizationReport, optimize, optimize_toward};
pub use regression::{LinearModel, fit, predict, recommend_spend};
pub use roi::{SpendSummary, roi, spend_summary};

use thiserror::Error;

/// Failure modes of the spend analytics. Every call is a single deterministic
/// computation; errors surface immediately and nothing is retried.
#[derive(Debug, Error)]
pub enum AdSpendError {
    #[error("insufficient data for regression: {0}")]
    InsufficientData(&'static str),
    #[error("fitted slope is zero; no spend level reaches the target")]
    DegenerateModel,
    #[error("total spend is zero; ROI is undefined")]
    DivisionByZero,
}
