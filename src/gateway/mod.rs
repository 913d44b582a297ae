//! HTTP gateway (Axum) for synopsis evaluation.
//!
//! One scoring route plus liveness and readiness probes, all sharing a
//! `SynopsisScorer` through [`HandlerState`]. Anonymization and access
//! gating happen here so the scoring engine stays free of transport
//! concerns.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use handler::{ScoreRequest, ScoreResponse, score_handler};
pub use state::HandlerState;

use crate::constants::{
    SYNOSCORE_STATUS_HEADER, SYNOSCORE_STATUS_HEALTHY, SYNOSCORE_STATUS_READY,
};

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/v1/score", post(score_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub oracle: &'static str,
    pub oracle_mode: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        SYNOSCORE_STATUS_HEADER,
        HeaderValue::from_static(SYNOSCORE_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    // Oracles load before the listener binds, so a serving process always
    // has a usable scorer; readiness reports which backend is answering.
    let components = ComponentStatus {
        http: SYNOSCORE_STATUS_READY,
        oracle: SYNOSCORE_STATUS_READY,
        oracle_mode: state.scorer.oracle_kind().label(),
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        SYNOSCORE_STATUS_HEADER,
        HeaderValue::from_static(SYNOSCORE_STATUS_READY),
    );

    (
        StatusCode::OK,
        headers,
        Json(ReadyResponse {
            status: "ok",
            components,
        }),
    )
        .into_response()
}
