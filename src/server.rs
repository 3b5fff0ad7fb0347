//! HTTP chat server.
//!
//! Serves the query engine to browser clients over a small JSON API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/chat` | Answer one chat message |
//! | `GET`  | `/api/phones` | The full catalog, in catalog order |
//! | `GET`  | `/health` | Health check (version and catalog size) |
//!
//! # Chat Contract
//!
//! ```json
//! // request
//! { "message": "samsung phone under 20000" }
//! // response
//! { "response": "Here's a top pick: ...", "phones": [ { "brand": "Samsung", ... } ] }
//! ```
//!
//! `phones` is omitted when the reply attaches no records. No-match and
//! refused messages are ordinary `200` replies.
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "..." } }
//! ```
//!
//! A body that is not JSON, or lacks a string `message`, is rejected with
//! `400 bad_request` before any interpretation happens.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so a UI served from
//! another origin can call the API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use phone_finder_core::{Outcome, ProductRecord, QueryEngine, ResponsePayload};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::chat::build_engine;
use crate::config::Config;

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The engine owns the read-only catalog; `Arc` keeps clones cheap.
    engine: Arc<QueryEngine>,
}

impl AppState {
    pub fn new(engine: QueryEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

/// Builds the router with all routes and the CORS layer.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(handle_chat))
        .route("/api/phones", get(handle_phones))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

/// Starts the chat server.
///
/// Loads the catalog once, binds `[server].bind`, and serves until the
/// process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let engine = build_engine(config)?;
    run_server_with_engine(config, engine).await
}

/// Like [`run_server`], but with a pre-built engine (e.g. an in-memory
/// catalog in tests).
pub async fn run_server_with_engine(config: &Config, engine: QueryEngine) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();
    let catalog_size = engine.catalog().len();
    let app = router(AppState::new(engine));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        bind = %bind_addr,
        catalog_size,
        "phone finder listening on http://{}",
        bind_addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable error code (e.g., `"bad_request"`).
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    catalog_size: usize,
}

async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.engine.catalog().len(),
    })
}

// ============ GET /api/phones ============

#[derive(Serialize)]
struct PhonesResponse {
    phones: Vec<ProductRecord>,
}

async fn handle_phones(State(state): State<AppState>) -> Json<PhonesResponse> {
    Json(PhonesResponse {
        phones: state.engine.catalog().records().to_vec(),
    })
}

// ============ POST /api/chat ============

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
}

/// Handler for `POST /api/chat`.
///
/// Each request is independent: the engine is consulted once and the
/// shaped payload is returned as-is.
async fn handle_chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ResponsePayload>, AppError> {
    let Json(req) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "malformed chat request");
        bad_request(rejection.body_text())
    })?;

    let reply = state.engine.answer(&req.message);
    if reply.outcome == Outcome::Refused {
        tracing::warn!("refused guarded message");
    } else {
        tracing::info!(
            outcome = reply.outcome.as_str(),
            matches = reply.match_count,
            attached = reply.payload.matched_records.len(),
            "chat reply"
        );
    }

    Ok(Json(reply.payload))
}
