use serde::{Deserialize, Serialize};

/// One row of an advertising dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub campaign_id: String,
    pub spend: f64,
    pub revenue: f64,
    pub conversions: f64,
}

/// An ordered set of campaign rows loaded from one source file.
///
/// Rows are independent observations; duplicate campaign ids are allowed and
/// never merged. The dataset is read-only once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignDataset {
    pub dataset_id: String,
    pub source: String,
    pub records: Vec<CampaignRecord>,
}

impl CampaignDataset {
    pub fn new(dataset_id: String, source: String, records: Vec<CampaignRecord>) -> Self {
        Self {
            dataset_id,
            source,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
