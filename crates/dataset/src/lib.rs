pub mod csv;
pub mod reader;
pub mod record;

pub use csv::{DatasetError, parse_campaign_csv};
pub use reader::read_csv_file;
pub use record::{CampaignDataset, CampaignRecord};

use std::path::Path;

use anyhow::Result;
use sha2::{Digest, Sha256};
use tracing::info;

/// Generate a stable dataset ID from the source path
pub fn generate_dataset_id(path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..16])
}

/// Load a campaign CSV from disk into an in-memory dataset.
pub async fn load_campaign_csv(path: &Path) -> Result<CampaignDataset> {
    let content = read_csv_file(path).await?;
    let records = parse_campaign_csv(&content)?;

    let source = path.to_string_lossy().to_string();
    let dataset_id = generate_dataset_id(&source);

    info!(
        dataset_id,
        rows = records.len(),
        source,
        "campaign dataset loaded"
    );

    Ok(CampaignDataset::new(dataset_id, source, records))
}
