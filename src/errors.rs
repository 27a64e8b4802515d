use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Request-level error taxonomy.
///
/// `ExternalService` never reaches the client on the prediction endpoints:
/// the orchestrator recovers from it by running the fallback chain. It still
/// maps to a response so a handler that forgets to recover degrades sanely.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("{0}")]
    Validation(String),

    #[error("external prediction service error: {0}")]
    ExternalService(String),

    #[error("{0}")]
    Computation(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            PredictError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: msg.clone(),
                    message: None,
                },
            ),
            PredictError::Computation(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Prediction failed".to_string(),
                    message: Some(msg.clone()),
                },
            ),
            PredictError::ExternalService(_) => {
                tracing::error!(error = %self, "external service error escaped the fallback path");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorBody {
                        error: "Prediction service unavailable".to_string(),
                        message: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
