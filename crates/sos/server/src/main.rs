//! SOS Server - dispatches SOS push notifications over HTTP.

use std::sync::Arc;

use axum::Router;
use color_eyre::eyre::WrapErr as _;
use sos_service::{ApiKeyAuthorizer, SosDispatcher, TracingLog};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    let config = sos_server::Config::from_env().wrap_err("invalid configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::from(config.log_level).into()),
        )
        .init();

    let authorizer = ApiKeyAuthorizer::new(config.api_keys.iter().cloned());
    if authorizer.is_empty() {
        color_eyre::eyre::bail!("no usable API keys configured");
    }

    tracing::info!(
        topic = %config.apns.topic,
        sandbox = config.apns.sandbox,
        api_keys = authorizer.len(),
        "sos-server starting"
    );

    // Initialize push delivery
    let cert = std::fs::read(&config.apns.cert_path).wrap_err_with(|| {
        format!(
            "failed to read APNs certificate {}",
            config.apns.cert_path.display()
        )
    })?;

    let sender = sos_push::ApnsSender::new(
        &cert,
        &config.apns.cert_password,
        config.apns.topic.clone(),
        config.apns.endpoint(),
    )?;

    // Create dispatch service
    let service = SosDispatcher::new(
        authorizer,
        sender,
        TracingLog::new(config.log_level),
    )
    .with_provider_timeout(config.provider_timeout);

    // Build router
    let app = Router::new()
        .merge(sos_http::sos_router(Arc::new(service)))
        .layer(TraceLayer::new_for_http());

    // Start server
    tracing::info!(addr = %config.listen_addr, "listening");

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .wrap_err("failed to bind")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server error")?;

    tracing::info!("sos-server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
