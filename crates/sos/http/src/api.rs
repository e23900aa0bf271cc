//! SOS API handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use sos_core::{CallerIdentity, DispatchError, ErrorKind};
use sos_service::Dispatch;

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Caller-facing error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&DispatchError> for ErrorResponse {
    fn from(err: &DispatchError) -> Self {
        Self {
            error: ErrorBody {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Send an SOS notification.
///
/// The body is parsed here but validated by the service, after the caller
/// is authorized. A body that is not JSON is passed on as `null`.
pub async fn notify_handler<S>(
    State(service): State<S>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    S: Dispatch,
{
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let identity = CallerIdentity::from_authorization(authorization);

    let payload = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

    match service.dispatch(&identity, &payload).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => (status_for(e.kind()), Json(ErrorResponse::from(&e))).into_response(),
    }
}

/// Health response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness check.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
