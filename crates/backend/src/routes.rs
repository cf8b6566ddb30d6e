use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::request_log::request_logger;

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `/health` plus the frontend bundle. Unknown paths get `index.html` so a
/// reload with `?active=...` lands in the app.
pub fn configure_routes(static_dir: &Path) -> Router {
    let index = static_dir.join("index.html");

    Router::new()
        .route("/health", get(health))
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(middleware::from_fn(request_logger))
}
