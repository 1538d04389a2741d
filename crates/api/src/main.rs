mod config;
mod metrics;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use adspend::{OptimizationReport, SpendSummary};
use keywords::KeywordStat;
use social::{EngagementRecord, EngagementSummary};

use crate::config::AppConfig;
use crate::metrics::{Metrics, TimedOperation};

struct AppState {
    config: AppConfig,
    metrics: Arc<Metrics>,
}

type ApiError = (StatusCode, String);

#[derive(Serialize)]
struct HealthResponse {
    service: &'static str,
    version: &'static str,
}

#[derive(Deserialize)]
struct KeywordRequest {
    text: String,
    min_length: Option<usize>,
    top_n: Option<usize>,
}

#[derive(Serialize)]
struct KeywordResponse {
    request_id: String,
    tokens_counted: usize,
    distinct_tokens: usize,
    keywords: Vec<KeywordStat>,
}

#[derive(Deserialize)]
struct SummaryRequest {
    /// Path of an uploaded campaign CSV on local disk
    path: String,
}

#[derive(Serialize)]
struct SummaryResponse {
    request_id: String,
    dataset_id: String,
    rows: usize,
    summary: SpendSummary,
}

#[derive(Deserialize)]
struct OptimizeRequest {
    path: String,
    /// Defaults to the best conversion count observed in the file
    target_conversions: Option<f64>,
}

#[derive(Serialize)]
struct OptimizeResponse {
    request_id: String,
    dataset_id: String,
    rows: usize,
    report: OptimizationReport,
}

#[derive(Deserialize)]
struct EngagementRequest {
    records: Vec<EngagementRecord>,
}

#[derive(Serialize)]
struct EngagementResponse {
    request_id: String,
    rates_pct: Vec<f64>,
    summary: EngagementSummary,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::default();
    let bind_addr = config.bind_addr.clone();

    let state = Arc::new(AppState {
        config,
        metrics: Metrics::new(),
    });

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/keywords", post(analyze_keywords))
        .route("/campaigns/summary", post(campaign_summary))
        .route("/campaigns/optimize", post(campaign_optimize))
        .route("/social/engagement", post(engagement_metrics))
        .route("/stats", get(get_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();

    tracing::info!("server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.unwrap();
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "marketing-analytics",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn analyze_keywords(
    State(state): State<Arc<AppState>>,
    Json(req): Json<KeywordRequest>,
) -> Result<Json<KeywordResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();
    let timer = TimedOperation::start();

    if req.text.len() > state.config.limits.max_text_bytes {
        state.metrics.record_request(false);
        return Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("text exceeds {} bytes", state.config.limits.max_text_bytes),
        ));
    }

    let min_length = req.min_length.unwrap_or(state.config.analyzer.min_length);

    let stats = keywords::analyze_with_min_length(&req.text, min_length).map_err(|e| {
        state.metrics.record_request(false);
        tracing::warn!(%request_id, error = %e, "keyword analysis rejected");
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let tokens_counted: usize = stats.iter().map(|s| s.count).sum();
    let distinct_tokens = stats.len();
    let top_n = req.top_n.unwrap_or(state.config.analyzer.top_n);

    state.metrics.record_keywords(timer.elapsed());
    state.metrics.record_request(true);
    tracing::info!(%request_id, distinct_tokens, "keyword analysis served");

    Ok(Json(KeywordResponse {
        request_id,
        tokens_counted,
        distinct_tokens,
        keywords: stats.into_iter().take(top_n).collect(),
    }))
}

async fn campaign_summary(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();
    let timer = TimedOperation::start();

    let data = load_dataset(&state, &request_id, &req.path).await?;

    let summary = adspend::spend_summary(&data).map_err(|e| {
        state.metrics.record_request(false);
        tracing::warn!(%request_id, error = %e, "ROI computation failed");
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;

    state.metrics.record_campaign(timer.elapsed(), data.len());
    state.metrics.record_request(true);
    tracing::info!(%request_id, dataset_id = %data.dataset_id, "campaign summary served");

    Ok(Json(SummaryResponse {
        request_id,
        dataset_id: data.dataset_id.clone(),
        rows: data.len(),
        summary,
    }))
}

async fn campaign_optimize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();
    let timer = TimedOperation::start();

    let data = load_dataset(&state, &request_id, &req.path).await?;

    let report = match req.target_conversions {
        Some(target) => adspend::optimize_toward(&data, target),
        None => adspend::optimize(&data),
    }
    .map_err(|e| {
        state.metrics.record_request(false);
        tracing::warn!(%request_id, error = %e, "spend optimization failed");
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;

    state.metrics.record_campaign(timer.elapsed(), data.len());
    state.metrics.record_request(true);
    tracing::info!(%request_id, dataset_id = %data.dataset_id, "spend optimization served");

    Ok(Json(OptimizeResponse {
        request_id,
        dataset_id: data.dataset_id.clone(),
        rows: data.len(),
        report,
    }))
}

async fn engagement_metrics(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EngagementRequest>,
) -> Result<Json<EngagementResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();
    let timer = TimedOperation::start();

    let summary = social::summarize(&req.records).map_err(|e| {
        state.metrics.record_request(false);
        tracing::warn!(%request_id, error = %e, "engagement computation failed");
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;

    // summarize already validated every record, so this cannot fail now
    let rates_pct = social::engagement_rates(&req.records)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    state.metrics.record_engagement(timer.elapsed());
    state.metrics.record_request(true);
    tracing::info!(%request_id, records = req.records.len(), "engagement metrics served");

    Ok(Json(EngagementResponse {
        request_id,
        rates_pct,
        summary,
    }))
}

async fn get_stats(State(state): State<Arc<AppState>>) -> Json<metrics::MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

/// Shared CSV sourcing for the campaign routes.
async fn load_dataset(
    state: &AppState,
    request_id: &str,
    path: &str,
) -> Result<dataset::CampaignDataset, ApiError> {
    let path = PathBuf::from(path);

    if !path.exists() {
        state.metrics.record_request(false);
        return Err((StatusCode::NOT_FOUND, format!("no such file: {:?}", path)));
    }

    let data = dataset::load_campaign_csv(&path).await.map_err(|e| {
        state.metrics.record_request(false);
        tracing::warn!(%request_id, error = %e, "dataset load failed");
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;

    if data.len() > state.config.limits.max_dataset_rows {
        state.metrics.record_request(false);
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            format!(
                "dataset has {} rows, limit is {}",
                data.len(),
                state.config.limits.max_dataset_rows
            ),
        ));
    }

    Ok(data)
}
