//! riyan-web library - public website for Riyan Pvt. Ltd.
//!
//! Server-rendered pages over the read-only CMS database, plus a few
//! diagnostic JSON endpoints.

use std::sync::Arc;

use axum::{routing::get, Router};
use riyan_common::config::SiteConfig;
use sqlx::MySqlPool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;
pub mod error;
pub mod pages;
pub mod render;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (read-only queries)
    pub db: MySqlPool,
    /// Resolved site configuration
    pub config: Arc<SiteConfig>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: MySqlPool, config: SiteConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let site = Router::new()
        .route("/", get(pages::home::home_page))
        .route("/projects", get(pages::projects::project_list))
        .route("/projects/:slug", get(pages::projects::project_detail))
        .route("/news", get(pages::news::news_list))
        .route("/news/:slug", get(pages::news::news_detail))
        .route("/firm/about", get(pages::firm::about_page))
        .route("/firm/contact", get(pages::firm::contact_page))
        .route("/firm/career", get(pages::careers::career_list))
        .route("/firm/career/internships", get(pages::careers::internships_page))
        .route("/firm/career/:slug", get(pages::careers::career_detail));

    let diagnostics = Router::new()
        .route("/api/check-career-fields", get(api::diagnostics::check_career_fields))
        .route("/api/test-db", get(api::diagnostics::test_db))
        .route("/api/test-images", get(api::diagnostics::test_images))
        .route("/api/buildinfo", get(api::get_build_info));

    Router::new()
        .merge(site)
        .merge(diagnostics)
        .merge(api::health_routes())
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
