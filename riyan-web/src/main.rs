//! riyan-web - public website for Riyan Pvt. Ltd.
//!
//! Renders pages from the CMS database (read-only) and serves a few JSON
//! diagnostic endpoints.

use anyhow::{Context, Result};
use clap::Parser;
use riyan_common::config::{load_toml_config, SiteConfig};
use riyan_web::cli::Args;
use riyan_web::{build_router, AppState};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; real deployments set the environment directly
    dotenvy::dotenv().ok();

    let default_filter = if cfg!(debug_assertions) {
        "riyan_web=debug,riyan_common=debug,tower_http=debug"
    } else {
        "riyan_web=info,riyan_common=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting riyan-web v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let file = load_toml_config(args.config.as_deref()).context("Failed to load config file")?;
    let config = SiteConfig::resolve(args.overrides(), file).context("Invalid configuration")?;
    info!(
        "Site URL: {}, career post types: {:?}",
        config.site_url, config.content.career_post_types
    );

    let pool = riyan_common::db::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("✓ Connected to database");

    let bind = config.bind.clone();
    let app = build_router(AppState::new(pool, config));

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    info!("riyan-web listening on http://{}", bind);
    info!("Health check: http://{}/health", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
