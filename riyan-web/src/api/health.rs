//! Liveness probe for the load balancer
//!
//! `/health` reports the process as up even while MySQL is unreachable, so a
//! CMS outage shows as 500 pages rather than the instance being pulled from
//! rotation. Use `/api/test-db` to check the database.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Crate name, so a shared proxy can tell the site apart from other backends
    pub module: String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
