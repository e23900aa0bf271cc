//! HTTP middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request logging middleware.
///
/// Logs method, path, status and latency. Headers are never logged since
/// they carry caller credentials.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    tracing::debug!(method = %method, path = %path, "incoming request");

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::warn!(method = %method, path = %path, status = %status, elapsed_ms, "request failed");
    } else {
        tracing::info!(method = %method, path = %path, status = %status, elapsed_ms, "request completed");
    }

    response
}
