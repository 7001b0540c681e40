// Axum API Server Module
//
// Purpose: JSON API + server-rendered pages around the yield estimator.
// State is read-only; every request is evaluated from its own input.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::crop::crop_catalog;
use crate::error::AgriError;
use crate::reference::{community_stats, forum_posts, helplines, languages, prediction_history, HistorySummary};
use crate::report::PredictionReport;
use crate::selection::CropForm;
use crate::soil::{soil_type_catalog, SoilForm};
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        tracing::info!("Batch limit: {} requests", config.max_batch);
        Self {
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Catalogs (JSON API)
        .route("/api/crops", get(list_crops))
        .route("/api/soil-types", get(list_soil_types))
        .route("/api/soil/sample", get(sample_soil))
        .route("/api/languages", get(list_languages))

        // Prediction endpoints
        .route("/api/predict/batch", post(predict_batch))
        .route("/api/predict", post(predict))

        // Static reference content
        .route("/api/history", get(get_history))
        .route("/api/community", get(get_community))

        // HTML pages
        .route("/", get(pages::home_page))
        .route("/prediction", get(pages::prediction_page))
        .route("/history", get(pages::history_page))
        .route("/community", get(pages::community_page))
        .fallback(pages::not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_crops() -> impl IntoResponse {
    Json(serde_json::json!({ "crops": crop_catalog() }))
}

async fn list_soil_types() -> impl IntoResponse {
    Json(serde_json::json!({ "soilTypes": soil_type_catalog() }))
}

/// Values of the "auto-fill sample data" button
async fn sample_soil() -> impl IntoResponse {
    Json(SoilForm::sample())
}

async fn list_languages() -> impl IntoResponse {
    Json(serde_json::json!({ "languages": languages() }))
}

/// Single prediction
///
/// POST /api/predict
/// Body: { "crop": {"crop": "wheat", "location": "Pune"}, "soil": {"ph": "6.5", ...} }
///
/// Incomplete input is a 200 with `prediction: null` and a prompt message.
async fn predict(Json(req): Json<PredictRequest>) -> Result<Json<PredictionReport>, AppError> {
    let report = PredictionReport::from_forms(&req.crop, &req.soil)?;

    match &report.prediction {
        Some(p) => tracing::info!(
            "Predicted {} for {}: {} {}",
            p.crop,
            report.selection.location_or_default(),
            p.yield_value,
            p.yield_unit
        ),
        None => tracing::debug!("Prediction requested with incomplete input"),
    }

    Ok(Json(report))
}

/// Batch prediction (one report per request item, same order)
///
/// POST /api/predict/batch
/// Body: { "requests": [ {crop, soil}, ... ] }
///
/// Items with unknown crop/soil names produce an inline `error` entry rather
/// than failing the whole batch.
async fn predict_batch(
    State(state): State<AppState>,
    Json(req): Json<BatchPredictRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let limit = state.config.max_batch;
    let size = req.requests.len();
    if size > limit {
        return Err(AgriError::BatchTooLarge { size, limit }.into());
    }

    tracing::info!("Evaluating prediction batch of {}", size);

    // CPU-bound work: run in blocking thread pool, fan out with rayon
    let results = tokio::task::spawn_blocking(move || {
        use rayon::prelude::*;

        req.requests
            .par_iter()
            .map(|item| match PredictionReport::from_forms(&item.crop, &item.soil) {
                Ok(report) => serde_json::to_value(report)
                    .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() })),
                Err(e) => serde_json::json!({ "error": e.to_string() }),
            })
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    let completed = results.iter().filter(|r| !r["prediction"].is_null()).count();

    Ok(Json(serde_json::json!({
        "count": size,
        "completed": completed,
        "results": results,
    })))
}

async fn get_history() -> impl IntoResponse {
    let records = prediction_history();
    let summary = HistorySummary::from_records(&records);
    Json(serde_json::json!({
        "records": records,
        "summary": summary,
    }))
}

async fn get_community() -> impl IntoResponse {
    Json(serde_json::json!({
        "posts": forum_posts(),
        "helplines": helplines(),
        "stats": community_stats(),
    }))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
pub struct PredictRequest {
    pub crop: CropForm,
    pub soil: SoilForm,
}

#[derive(serde::Deserialize, Debug)]
pub struct BatchPredictRequest {
    pub requests: Vec<PredictRequest>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Input(AgriError),
    Internal(String),
}

impl From<AgriError> for AppError {
    fn from(err: AgriError) -> Self {
        AppError::Input(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Input(err @ AgriError::BatchTooLarge { .. }) => {
                (StatusCode::PAYLOAD_TOO_LARGE, err.to_string())
            }
            AppError::Input(err @ AgriError::Config { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::Input(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            tracing::error!("{}", message);
        }

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
