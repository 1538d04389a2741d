use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

pub struct Metrics {
    // Counters
    total_requests: AtomicUsize,
    successful_requests: AtomicUsize,
    failed_requests: AtomicUsize,

    // Timing (in microseconds)
    total_keyword_time_us: AtomicU64,
    total_campaign_time_us: AtomicU64,
    total_engagement_time_us: AtomicU64,

    // Counts
    keyword_analyses: AtomicUsize,
    campaign_analyses: AtomicUsize,
    engagement_analyses: AtomicUsize,
    total_rows_analyzed: AtomicUsize,
}

impl Metrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            total_requests: AtomicUsize::new(0),
            successful_requests: AtomicUsize::new(0),
            failed_requests: AtomicUsize::new(0),
            total_keyword_time_us: AtomicU64::new(0),
            total_campaign_time_us: AtomicU64::new(0),
            total_engagement_time_us: AtomicU64::new(0),
            keyword_analyses: AtomicUsize::new(0),
            campaign_analyses: AtomicUsize::new(0),
            engagement_analyses: AtomicUsize::new(0),
            total_rows_analyzed: AtomicUsize::new(0),
        })
    }

    pub fn record_request(&self, success: bool) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        if success {
            self.successful_requests.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed_requests.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_keywords(&self, duration: std::time::Duration) {
        self.total_keyword_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        self.keyword_analyses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_campaign(&self, duration: std::time::Duration, rows: usize) {
        self.total_campaign_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        self.campaign_analyses.fetch_add(1, Ordering::Relaxed);
        self.total_rows_analyzed.fetch_add(rows, Ordering::Relaxed);
    }

    pub fn record_engagement(&self, duration: std::time::Duration) {
        self.total_engagement_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        self.engagement_analyses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            successful_requests: self.successful_requests.load(Ordering::Relaxed),
            failed_requests: self.failed_requests.load(Ordering::Relaxed),
            avg_keyword_time_ms: self.avg_time_ms(&self.total_keyword_time_us, &self.keyword_analyses),
            avg_campaign_time_ms: self.avg_time_ms(&self.total_campaign_time_us, &self.campaign_analyses),
            avg_engagement_time_ms: self
                .avg_time_ms(&self.total_engagement_time_us, &self.engagement_analyses),
            total_rows_analyzed: self.total_rows_analyzed.load(Ordering::Relaxed),
        }
    }

    fn avg_time_ms(&self, total_us: &AtomicU64, count: &AtomicUsize) -> f64 {
        let total = total_us.load(Ordering::Relaxed) as f64;
        let cnt = count.load(Ordering::Relaxed) as f64;
        if cnt > 0.0 {
            total / cnt / 1000.0 // Convert to ms
        } else {
            0.0
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub total_requests: usize,
    pub successful_requests: usize,
    pub failed_requests: usize,
    pub avg_keyword_time_ms: f64,
    pub avg_campaign_time_ms: f64,
    pub avg_engagement_time_ms: f64,
    pub total_rows_analyzed: usize,
}

pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}
