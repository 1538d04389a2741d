pub mod engagement;

pub use engagement::{
    EngagementError, EngagementRecord, EngagementSummary, engagement_rates, summarize,
};
