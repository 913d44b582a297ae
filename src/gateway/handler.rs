//! The `/v1/score` request handler.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{SYNOSCORE_STATUS_HEADER, SYNOSCORE_STATUS_SCORED};
use crate::hashing;
use crate::privacy;
use crate::scoring::ScoreReport;

use super::error::GatewayError;
use super::state::HandlerState;

/// Body of a `POST /v1/score` request.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    /// Source article text.
    pub article: String,
    /// Candidate synopsis to evaluate against the article.
    pub synopsis: String,
    /// Redact personal data from both texts before scoring.
    #[serde(default = "default_anonymize")]
    pub anonymize: bool,
}

const fn default_anonymize() -> bool {
    true
}

/// Body of a successful `POST /v1/score` response.
///
/// The report fields are flattened so `final_score`, `detailed_scores` and
/// `feedback` sit at the top level next to the evaluation metadata.
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    /// Unique id for this evaluation, for client-side correlation.
    pub evaluation_id: String,
    /// RFC 3339 timestamp of the evaluation.
    pub evaluated_at: String,
    /// Label of the similarity backend that produced the scores.
    pub oracle: &'static str,
    #[serde(flatten)]
    pub report: ScoreReport,
}

#[tracing::instrument(skip(state, headers, request))]
pub async fn score_handler(
    State(state): State<HandlerState>,
    headers: HeaderMap,
    Json(request): Json<serde_json::Value>,
) -> Result<Response, GatewayError> {
    authorize(&headers, state.access_token.as_deref())?;

    let request: ScoreRequest = serde_json::from_value(request).map_err(|err| {
        GatewayError::InvalidRequest(format!("failed to parse score request: {err}"))
    })?;

    let digest = hashing::request_digest(&request.article, &request.synopsis);
    debug!(digest = %digest, anonymize = request.anonymize, "Processing score request");

    let (article, synopsis) = if request.anonymize {
        (
            privacy::anonymize(&request.article, state.splitter.as_ref()),
            privacy::anonymize(&request.synopsis, state.splitter.as_ref()),
        )
    } else {
        (request.article, request.synopsis)
    };

    // Embedding inference is CPU-bound; keep it off the reactor threads.
    let scorer = Arc::clone(&state.scorer);
    let report = tokio::task::spawn_blocking(move || scorer.evaluate(&article, &synopsis))
        .await
        .map_err(|err| GatewayError::InternalError(format!("evaluation task failed: {err}")))??;

    info!(
        digest = %digest,
        final_score = report.final_score,
        feedback_lines = report.feedback.len(),
        "Synopsis evaluated"
    );

    let response = ScoreResponse {
        evaluation_id: uuid::Uuid::new_v4().to_string(),
        evaluated_at: chrono::Utc::now().to_rfc3339(),
        oracle: state.scorer.oracle_kind().label(),
        report,
    };

    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        SYNOSCORE_STATUS_HEADER,
        HeaderValue::from_static(SYNOSCORE_STATUS_SCORED),
    );

    Ok((StatusCode::OK, response_headers, Json(response)).into_response())
}

/// Checks the bearer token when access gating is configured.
///
/// Health and readiness probes never pass through here; only the score
/// route is gated.
fn authorize(headers: &HeaderMap, expected: Option<&str>) -> Result<(), GatewayError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    let provided = headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    match provided {
        Some(token) if token == expected => Ok(()),
        Some(_) => Err(GatewayError::Unauthorized(
            "access token does not match".to_string(),
        )),
        None => Err(GatewayError::Unauthorized(
            "missing Bearer token".to_string(),
        )),
    }
}
