//! # sbdk_site
//!
//! Web server for SBDK.dev: marketing pages, the documentation viewer and
//! the `/api/docs` proxy in front of the project's GitHub wiki.
//!
//! ## Request flow for documentation
//!
//! 1. slug is resolved to a wiki filename (page registry first, legacy
//!    casing rule as fallback)
//! 2. `{wiki_raw_base}/{id}.md` is fetched once, or served from the
//!    freshness cache
//! 3. `/api/docs` relays the raw text; `/docs/{slug}` rewrites wiki links
//!    to local routes and renders the markdown server-side

pub mod analytics;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod markdown;
pub mod pages;
pub mod routes;
pub mod sitemap;

use anyhow::{Context, Result};
use tracing::{info, warn};

pub use analytics::AnalyticsClient;
pub use config::{AnalyticsConfig, ConfigError, SiteConfig};
pub use error::DocsError;
pub use fetcher::WikiClient;
pub use routes::{AppState, DOCS_CACHE_CONTROL, build_router};

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: SiteConfig) -> Result<()> {
    let bind = config.bind;
    let state = AppState::new(config)?;

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            warn!("Cannot listen for Ctrl-C ({e}); running until killed");
            futures::future::pending::<()>().await;
        }
    }
}
