use axum::body::Bytes;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use http::{Method, StatusCode};
use placement_core::{PlacementBatch, PlacementManifest, generate_manifest};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

pub fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/furniture-placement", post(furniture_placement))
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

#[derive(Debug, Serialize, Deserialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
struct PlacementResponse {
    manifest: PlacementManifest,
    success: bool,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Failure shape of the placement endpoint: the contract knows only 200
/// with a manifest and 500 with `{error}`, so every error maps to 500.
#[derive(Debug)]
struct ApiError {
    message: String,
}

impl ApiError {
    fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn furniture_placement(body: Bytes) -> Result<Json<PlacementResponse>, ApiError> {
    let batch: PlacementBatch = parse_json(&body)?;
    tracing::debug!(
        furniture_items = batch.furniture_items.len(),
        anchors = batch.anchors.len(),
        existing_placements = batch.existing_placements.len(),
        "solving placement batch"
    );

    let manifest = generate_manifest(&batch);
    if !manifest.valid {
        tracing::debug!(
            collisions = manifest.collisions.len(),
            "solve recorded collisions"
        );
    }

    Ok(Json(PlacementResponse {
        manifest,
        success: true,
    }))
}

fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    if body.is_empty() {
        return Err(ApiError::internal("request body is required"));
    }

    serde_json::from_slice(body).map_err(|err| {
        tracing::warn!(%err, "rejecting malformed request body");
        ApiError::internal(format!("invalid JSON body: {err}"))
    })
}
