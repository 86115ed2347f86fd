mod config;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use config::AppConfig;
use extract::{ActionItemCollection, Extractor, TranscriptSummary};
use gateway::{CompletionClient, GatewayError, OllamaClient};
use ingest::IngestError;
use knowledge::{KnowledgeMap, MapBuilder};

struct AppState {
    extractor: Extractor,
    map_builder: MapBuilder,
    config: AppConfig,
}

#[derive(Deserialize)]
struct TranscriptRequest {
    transcript: String,
}

#[derive(Deserialize)]
struct TranscriptFileRequest {
    path: String,
}

#[derive(Serialize)]
struct HealthResponse {
    completion_backend: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

/// Gateway failures become 502 with the error text in the body, so the
/// browser can tell "zero results" from "call failed".
fn gateway_error(error: GatewayError) -> ApiError {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
}

fn ingest_error(error: IngestError) -> ApiError {
    let status = match &error {
        IngestError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        IngestError::Read { .. } => StatusCode::NOT_FOUND,
    };
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();

    let client: Arc<dyn CompletionClient> = Arc::new(OllamaClient::new(
        config.completion.base_url.clone(),
        config.completion.model.clone(),
        config.completion.request_timeout_secs,
    ));

    let state = Arc::new(AppState {
        extractor: Extractor::new(client.clone()),
        map_builder: MapBuilder::new(client),
        config: config.clone(),
    });

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/extract", post(extract_action_items))
        .route("/extract/file", post(extract_from_file))
        .route("/map", post(generate_knowledge_map))
        .route("/summarize", post(summarize_transcript))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "server listening");

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = match reqwest::get(&state.config.completion.base_url).await {
        Ok(resp) if resp.status().is_success() => "ok".to_string(),
        Ok(resp) => format!("error: status {}", resp.status()),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        completion_backend: status,
    })
}

async fn extract_action_items(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TranscriptRequest>,
) -> Result<Json<ActionItemCollection>, ApiError> {
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, chars = req.transcript.len(), "extraction request");

    let collection = state
        .extractor
        .try_extract_action_items(&req.transcript)
        .await
        .map_err(gateway_error)?;

    tracing::info!(%request_id, items = collection.action_items.len(), "extraction complete");
    Ok(Json(collection))
}

/// Server-side variant for transcripts already on disk. `.docx`/`.pdf` are
/// rejected here; their text extraction happens in the browser.
async fn extract_from_file(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TranscriptFileRequest>,
) -> Result<Json<ActionItemCollection>, ApiError> {
    let request_id = Uuid::new_v4();

    let path = PathBuf::from(&req.path);
    let transcript = ingest::read_transcript(&path).await.map_err(ingest_error)?;
    tracing::info!(%request_id, path = %req.path, chars = transcript.len(), "file extraction request");

    let collection = state
        .extractor
        .try_extract_action_items(&transcript)
        .await
        .map_err(gateway_error)?;

    Ok(Json(collection))
}

async fn generate_knowledge_map(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ActionItemCollection>,
) -> Result<Json<KnowledgeMap>, ApiError> {
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, items = req.action_items.len(), "knowledge map request");

    let map = state
        .map_builder
        .try_generate(&req)
        .await
        .map_err(gateway_error)?;

    tracing::info!(%request_id, nodes = map.nodes.len(), edges = map.edges.len(), "knowledge map complete");
    Ok(Json(map))
}

async fn summarize_transcript(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TranscriptRequest>,
) -> Result<Json<TranscriptSummary>, ApiError> {
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, chars = req.transcript.len(), "summary request");

    let summary = state
        .extractor
        .try_summarize(&req.transcript)
        .await
        .map_err(gateway_error)?;

    Ok(Json(summary))
}
