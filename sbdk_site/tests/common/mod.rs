//! Shared helpers for router-level tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use sbdk_site::{AppState, SiteConfig, build_router};
use tower::ServiceExt;
use wiremock::MockServer;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("json body")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Text between `<title>` and `</title>`.
    pub fn title(&self) -> Option<&str> {
        let start = self.body.find("<title>")? + "<title>".len();
        let end = self.body[start..].find("</title>")? + start;
        Some(&self.body[start..end])
    }
}

pub fn config_for(wiki: &MockServer) -> SiteConfig {
    SiteConfig {
        wiki_raw_base: wiki.uri(),
        site_url: "https://sbdk.dev".to_string(),
        ..SiteConfig::default()
    }
}

pub fn app(config: SiteConfig) -> Router {
    build_router(AppState::new(config).expect("app state"))
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}
