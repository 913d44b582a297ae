use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::constants::{SYNOSCORE_STATUS_ERROR, SYNOSCORE_STATUS_HEADER};
use crate::scoring::ScoreError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("evaluation failed: {0}")]
    EvaluationFailed(#[from] ScoreError),

    #[error("internal error: {0}")]
    InternalError(String),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error_message, synoscore_status) = match &self {
            GatewayError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string(), "invalid_request")
            }
            GatewayError::Unauthorized(_) => {
                (StatusCode::UNAUTHORIZED, self.to_string(), "unauthorized")
            }
            GatewayError::EvaluationFailed(err) => match err {
                ScoreError::InvalidInput { .. } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    self.to_string(),
                    "invalid_input",
                ),
                ScoreError::InsufficientContent { .. } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    self.to_string(),
                    "insufficient_content",
                ),
                ScoreError::Oracle(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    self.to_string(),
                    "oracle_error",
                ),
                ScoreError::InvalidConfig { .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    self.to_string(),
                    "scoring_error",
                ),
            },
            GatewayError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                self.to_string(),
                "internal_error",
            ),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            SYNOSCORE_STATUS_HEADER,
            HeaderValue::from_str(synoscore_status)
                .unwrap_or(HeaderValue::from_static(SYNOSCORE_STATUS_ERROR)),
        );

        let body = Json(ErrorResponse {
            error: error_message,
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
