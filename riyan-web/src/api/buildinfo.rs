//! Which build of the site is deployed
//!
//! Values are stamped by `build.rs` at compile time; no state is needed.

use axum::response::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub version: String,
    /// Short commit hash, `unknown` when built outside a git checkout
    pub git_hash: String,
    pub build_timestamp: String,
    /// `debug` or `release`
    pub build_profile: String,
}

/// GET /api/buildinfo
pub async fn get_build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: env!("GIT_HASH").to_string(),
        build_timestamp: env!("BUILD_TIMESTAMP").to_string(),
        build_profile: env!("BUILD_PROFILE").to_string(),
    })
}
