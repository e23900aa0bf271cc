//! SOS HTTP Layer
//!
//! Axum handlers exposing SOS dispatch as a remote-callable endpoint.

mod api;
mod middleware;

pub use api::*;
pub use middleware::*;

use axum::Router;

/// Create the SOS router.
pub fn sos_router<S>(service: S) -> Router
where
    S: sos_service::Dispatch + Clone + 'static,
{
    use axum::routing::{get, post};

    Router::new()
        .route("/v1/sos/notify", post(api::notify_handler::<S>))
        .route("/health", get(api::health_handler))
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .with_state(service)
}
