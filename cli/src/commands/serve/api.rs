//! # Hestia JSON API
//!
//! File: cli/src/commands/serve/api.rs
//! Author: Group AUZA
//!
//! ## Endpoints
//!
//! - `GET  /api/health` → `{"status":"ok"}`
//! - `GET  /api/faq` → `[{"id":1,"question":"...","answer":"..."}, ...]`
//! - `GET  /api/quick-responses` → `["Tell me about the programs", ...]`
//! - `POST /api/ask` with `{"question":"..."}` → `{"answer":"..."}`.
//!   A blank question is answered with `400` and `{"error":"..."}`.
//! - `GET  /api/status` → `{"connectivity":"online"}` or `"offline"`
//! - anything else under `/api` → `404` with `{"error":"..."}`
//!
use crate::common::network::connectivity::{Connectivity, ConnectivityMonitor};
use crate::core::error::HestiaError;
use crate::knowledge::{Matcher, QUICK_RESPONSES};
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub connectivity: Arc<ConnectivityMonitor>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct FaqItem {
    pub id: usize,
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Deserialize, Debug)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub connectivity: Connectivity,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Rejected request. Always a client error: the matcher itself cannot fail.
#[derive(Debug)]
pub struct ApiError(HestiaError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// # API Router (`router`)
///
/// Builds the `/api` routes with `state` attached. Unmatched `/api` paths
/// are answered here with a JSON 404 so that a static fallback mounted by
/// the caller never sees them.
///
/// ## Arguments
///
/// * `state`: Matcher and connectivity monitor shared by the handlers.
///
/// ## Returns
///
/// * `Router`: Without middleware; `server_logic::create_app` adds it.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/faq", get(faq))
        .route("/api/quick-responses", get(quick_responses))
        .route("/api/ask", post(ask))
        .route("/api/status", get(status))
        .route("/api", any(api_not_found))
        .route("/api/{*rest}", any(api_not_found))
        .with_state(state)
}

async fn api_not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    debug!("No API route for {}", uri.path());
    let body = Json(ErrorResponse {
        error: format!("No API endpoint at {}", uri.path()),
    });
    (StatusCode::NOT_FOUND, body)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn faq(State(state): State<AppState>) -> Json<Vec<FaqItem>> {
    let items = state
        .matcher
        .knowledge()
        .iter()
        .enumerate()
        .map(|(index, entry)| FaqItem {
            id: index + 1,
            question: entry.question,
            answer: entry.answer,
        })
        .collect();
    Json(items)
}

async fn quick_responses() -> Json<Vec<&'static str>> {
    Json(QUICK_RESPONSES.to_vec())
}

async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    if request.question.trim().is_empty() {
        debug!("Rejected blank question");
        return Err(ApiError(HestiaError::EmptyInput));
    }
    info!("API question: {:?}", request.question);
    Ok(Json(AskResponse {
        answer: state.matcher.answer(&request.question),
    }))
}

async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        connectivity: state.connectivity.current(),
    })
}
