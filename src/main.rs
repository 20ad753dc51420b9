use metrics_service::config::{Config, SourceKind};
use metrics_service::models::source::{SampleBooksSource, SharedBooksSource};
use metrics_service::routes;
use metrics_service::services::remote::HttpBooksSource;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "metrics_service=info,tower_http=info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let source: SharedBooksSource = match config.source {
        SourceKind::Http => {
            info!(
                "Using HTTP books source at {} (timeout {:?})",
                config.books_api_url, config.books_api_timeout
            );
            match HttpBooksSource::with_config(&config.books_api_url, config.books_api_timeout) {
                Ok(source) => Arc::new(source),
                Err(e) => {
                    error!("Failed to build HTTP client: {}", e);
                    std::process::exit(1);
                }
            }
        }
        SourceKind::Sample => {
            info!("Using static sample books source");
            Arc::new(SampleBooksSource::new())
        }
    };

    let app = routes::app(source);
    let addr = config.addr();

    info!("Metrics service starting on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
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
    info!("Shutdown signal received, stopping metrics service");
}
