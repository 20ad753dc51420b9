pub mod health;
pub mod metrics;

use crate::models::source::SharedBooksSource;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn app(source: SharedBooksSource) -> Router {
    Router::new()
        .route("/", get(metrics::get_metrics))
        .route("/status", get(health::health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(source)
}
