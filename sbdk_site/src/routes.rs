//! HTTP routes.
//!
//! Every request is independent: handlers read the shared [`AppState`]
//! (config, wiki client with its cache, rewriter, analytics) and never
//! mutate it.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use sbdk_common::{ContentRewriter, DocPage, Resolution, find_by_slug, find_by_wiki_slug, resolve};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::analytics::AnalyticsClient;
use crate::config::SiteConfig;
use crate::error::DocsError;
use crate::fetcher::WikiClient;
use crate::markdown;
use crate::pages::{self, DocContent};
use crate::sitemap;

/// Shared cache policy for successful documentation responses.
pub const DOCS_CACHE_CONTROL: &str = "public, s-maxage=300, stale-while-revalidate=600";

/// Application-scoped context, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub wiki: WikiClient,
    pub rewriter: Arc<ContentRewriter>,
    pub analytics: AnalyticsClient,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Result<Self> {
        let wiki = WikiClient::new(&config).context("building wiki client")?;
        let rewriter = ContentRewriter::new(config.external_docs_url(), &config.site_url)
            .context("building content rewriter")?;
        let analytics =
            AnalyticsClient::new(&config.analytics).context("building analytics client")?;
        Ok(Self {
            config: Arc::new(config),
            wiki,
            rewriter: Arc::new(rewriter),
            analytics,
        })
    }

    fn resolve(&self, slug: &str) -> Resolution {
        let resolution = resolve(slug, self.config.resolve_mode);
        if resolution.is_legacy() {
            warn!(
                slug,
                remote_id = resolution.remote_id(),
                "slug not in page registry, using legacy casing rule"
            );
        }
        resolution
    }

    /// Fetch the wiki source for `slug` and record the outcome.
    async fn fetch_document(&self, slug: &str) -> Result<Arc<str>, DocsError> {
        let resolution = self.resolve(slug);
        let result = self.wiki.fetch(resolution.remote_id()).await;
        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        self.analytics
            .track_docs_fetch(slug, resolution.remote_id(), outcome);
        result
    }
}

#[derive(Debug, Deserialize)]
pub struct DocsQuery {
    slug: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DocsBody {
    content: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/pricing", get(pricing))
        .route("/docs", get(docs_hub))
        .route("/docs/{slug}", get(doc_view))
        .route("/api/docs", get(docs_api))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/robots.txt", get(robots_txt))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /api/docs?slug=<id>`: raw wiki markdown as `{ content }`.
async fn docs_api(
    State(state): State<AppState>,
    query: Result<Query<DocsQuery>, QueryRejection>,
) -> Result<Response, DocsError> {
    let Query(query) = query.map_err(|rejection| {
        debug!(error = %rejection, "rejected docs query");
        DocsError::InvalidQuery
    })?;
    let slug = query
        .slug
        .filter(|s| !s.is_empty())
        .ok_or(DocsError::MissingSlug)?;

    let content = state.fetch_document(&slug).await?;
    let body = DocsBody {
        content: content.to_string(),
    };
    Ok(([(header::CACHE_CONTROL, DOCS_CACHE_CONTROL)], Json(body)).into_response())
}

async fn doc_view(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let Some(page) = find_by_slug(&slug) else {
        // Wiki-style names (`Getting-Started`) arrive via rewritten absolute links
        if let Some(page) = find_by_wiki_slug(&slug) {
            return Redirect::permanent(&format!("/docs/{}", page.slug)).into_response();
        }
        return not_found(State(state)).await;
    };

    state.analytics.track_page_view(&format!("/docs/{}", page.slug));
    let content = render_document(&state, page).await;
    Html(pages::doc_page(&state.config, page, &content).into_string()).into_response()
}

async fn render_document(state: &AppState, page: &DocPage) -> DocContent {
    match state.fetch_document(page.wiki_slug).await {
        Ok(source) => DocContent::Rendered(markdown::to_html(&state.rewriter.rewrite(&source))),
        Err(e) => DocContent::Failed(e.to_string()),
    }
}

async fn home(State(state): State<AppState>) -> Html<String> {
    state.analytics.track_page_view("/");
    Html(pages::home_page(&state.config).into_string())
}

async fn pricing(State(state): State<AppState>) -> Html<String> {
    state.analytics.track_page_view("/pricing");
    Html(pages::pricing_page(&state.config).into_string())
}

async fn docs_hub(State(state): State<AppState>) -> Html<String> {
    state.analytics.track_page_view("/docs");
    Html(pages::docs_hub_page(&state.config).into_string())
}

async fn sitemap_xml(State(state): State<AppState>) -> Response {
    let entries = sitemap::entries(&state.config.site_url, Utc::now().date_naive());
    match sitemap::to_xml(&entries) {
        Ok(xml) => ([(header::CONTENT_TYPE, "application/xml")], xml).into_response(),
        Err(e) => {
            error!(error = %e, "sitemap generation failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        sitemap::robots_txt(&state.config.site_url),
    )
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found(State(state): State<AppState>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(pages::not_found_page(&state.config).into_string()),
    )
        .into_response()
}
