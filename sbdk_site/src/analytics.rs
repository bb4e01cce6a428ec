//! Server-side event capture.
//!
//! A single [`AnalyticsClient`] is built from config at startup and carried
//! in the application state. Without an API key every call is a no-op.
//! Capture runs off the request path; failures are logged and dropped.

use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::config::AnalyticsConfig;

/// Distinct id used for anonymous server-side events.
const SERVER_DISTINCT_ID: &str = "sbdk-site";

#[derive(Debug, Serialize)]
struct CapturePayload<'a> {
    api_key: &'a str,
    event: &'a str,
    distinct_id: &'a str,
    properties: Map<String, Value>,
}

#[derive(Clone)]
pub struct AnalyticsClient {
    inner: Option<Enabled>,
}

#[derive(Clone)]
struct Enabled {
    http: Client,
    api_key: String,
    capture_url: Url,
}

impl AnalyticsClient {
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    pub fn new(config: &AnalyticsConfig) -> anyhow::Result<Self> {
        let Some(api_key) = config.api_key.clone().filter(|k| !k.is_empty()) else {
            return Ok(Self::disabled());
        };
        let host = format!("{}/", config.host.trim_end_matches('/'));
        let capture_url = Url::parse(&host)?.join("capture/")?;
        Ok(Self {
            inner: Some(Enabled {
                http: Client::builder().timeout(config.timeout()).build()?,
                api_key,
                capture_url,
            }),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Send one event and wait for the host to accept it.
    pub async fn capture(
        &self,
        event: &str,
        distinct_id: &str,
        properties: Map<String, Value>,
    ) -> Result<(), reqwest::Error> {
        let Some(enabled) = &self.inner else {
            return Ok(());
        };
        let payload = CapturePayload {
            api_key: &enabled.api_key,
            event,
            distinct_id,
            properties,
        };
        enabled
            .http
            .post(enabled.capture_url.clone())
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Capture on a background task.
    pub fn spawn_capture(&self, event: &'static str, properties: Map<String, Value>) {
        if !self.is_enabled() {
            return;
        }
        let client = self.clone();
        tokio::spawn(async move {
            if let Err(e) = client.capture(event, SERVER_DISTINCT_ID, properties).await {
                debug!(event, error = %e, "analytics capture failed");
            }
        });
    }

    pub fn track_page_view(&self, path: &str) {
        self.spawn_capture("$pageview", props(json!({ "path": path })));
    }

    /// `outcome` is `ok` or a [`crate::error::DocsError::kind`] label.
    pub fn track_docs_fetch(&self, slug: &str, remote_id: &str, outcome: &str) {
        self.spawn_capture(
            "docs_fetched",
            props(json!({ "slug": slug, "remote_id": remote_id, "outcome": outcome })),
        );
    }
}

fn props(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn disabled_without_key() {
        let client = AnalyticsClient::new(&AnalyticsConfig::default()).expect("client");
        assert!(!client.is_enabled());

        let empty_key = AnalyticsConfig {
            api_key: Some(String::new()),
            ..AnalyticsConfig::default()
        };
        assert!(!AnalyticsClient::new(&empty_key).expect("client").is_enabled());
    }

    #[test]
    fn capture_url_joins_host() {
        let config = AnalyticsConfig {
            api_key: Some("phc_test".to_string()),
            host: "https://eu.i.posthog.com/".to_string(),
            ..AnalyticsConfig::default()
        };
        let client = AnalyticsClient::new(&config).expect("client");
        let url = client.inner.as_ref().map(|e| e.capture_url.as_str().to_string());
        assert_eq!(url.as_deref(), Some("https://eu.i.posthog.com/capture/"));
    }

    #[tokio::test]
    async fn capture_gives_up_on_unresponsive_host() {
        let host = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/capture/"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
            .mount(&host)
            .await;

        let config = AnalyticsConfig {
            api_key: Some("phc_test".to_string()),
            host: host.uri(),
            timeout_secs: 1,
        };
        let client = AnalyticsClient::new(&config).expect("client");

        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            client.capture("$pageview", "id", Map::new()),
        )
        .await
        .expect("capture bounded by client timeout");
        let err = outcome.expect_err("delayed host times out");
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn disabled_capture_is_noop() {
        let client = AnalyticsClient::disabled();
        client
            .capture("event", "id", Map::new())
            .await
            .expect("no-op capture");
    }
}
