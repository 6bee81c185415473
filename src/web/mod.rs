// HTTP API — Axum-based summarization service.
//
// Handlers validate request shape, delegate to the Summarizer, and map
// failures to JSON error bodies. CORS is permissive; the frontend is
// served from a different origin.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::summarize::Summarizer;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<Summarizer>,
}

/// Start the API server and block until it exits.
pub async fn run_server(summarizer: Arc<Summarizer>, port: u16, bind: &str) -> Result<()> {
    let app = build_router(AppState { summarizer });

    let addr = format!("{bind}:{port}");
    info!("Newsbrief API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/summarize", post(handlers::summarize))
        .route("/answer", post(handlers::answer))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Deployment health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Static welcome payload for the root path.
async fn welcome() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "message": "Newsbrief API is running" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
