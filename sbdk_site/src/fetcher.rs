//! Wiki document fetcher.
//!
//! One outbound GET per uncached request, no retries. Successful bodies are
//! kept for the configured freshness window so repeated page views do not
//! hit the wiki host.

use std::sync::Arc;

use anyhow::{Result, bail};
use moka::future::Cache;
use reqwest::{Client, Url};
use tracing::{debug, error, warn};

use crate::config::SiteConfig;
use crate::error::DocsError;

/// Client for the raw wiki host.
#[derive(Clone)]
pub struct WikiClient {
    http: Client,
    raw_base: Url,
    cache: Option<Cache<String, Arc<str>>>,
}

impl WikiClient {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let raw_base = Url::parse(&config.wiki_raw_base)?;
        if raw_base.cannot_be_a_base() {
            bail!("wiki_raw_base '{}' cannot be used as a base URL", raw_base);
        }

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.fetch_timeout() {
            builder = builder.timeout(timeout);
        }

        let cache = config.cache_ttl().map(|ttl| {
            Cache::builder()
                .max_capacity(config.cache_capacity)
                .time_to_live(ttl)
                .build()
        });

        Ok(Self {
            http: builder.build()?,
            raw_base,
            cache,
        })
    }

    /// `{raw_base}/{remote_id}.md`, with the identifier encoded as a single
    /// path segment.
    pub fn document_url(&self, remote_id: &str) -> Url {
        let mut url = self.raw_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&format!("{remote_id}.md"));
        }
        url
    }

    /// Fetch the raw markdown for a wiki page.
    pub async fn fetch(&self, remote_id: &str) -> Result<Arc<str>, DocsError> {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(remote_id).await {
                debug!(remote_id, "wiki cache hit");
                return Ok(hit);
            }
        }

        let body = self.fetch_uncached(remote_id).await?;
        if let Some(cache) = &self.cache {
            cache.insert(remote_id.to_string(), body.clone()).await;
        }
        Ok(body)
    }

    async fn fetch_uncached(&self, remote_id: &str) -> Result<Arc<str>, DocsError> {
        let url = self.document_url(remote_id);
        debug!(%url, "fetching wiki page");

        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            error!(%url, error = %e, "wiki fetch failed");
            DocsError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "wiki returned non-success status");
            return Err(DocsError::upstream(status));
        }

        let text = response.text().await.map_err(|e| {
            error!(%url, error = %e, "reading wiki response failed");
            DocsError::Transport(e)
        })?;
        Ok(Arc::from(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> WikiClient {
        let config = SiteConfig {
            wiki_raw_base: base.to_string(),
            ..SiteConfig::default()
        };
        WikiClient::new(&config).expect("client")
    }

    #[test]
    fn document_url_appends_extension() {
        let c = client("https://raw.githubusercontent.com/wiki/sbdk-dev/sbdk-dev");
        assert_eq!(
            c.document_url("Getting-Started").as_str(),
            "https://raw.githubusercontent.com/wiki/sbdk-dev/sbdk-dev/Getting-Started.md"
        );
    }

    #[test]
    fn document_url_handles_trailing_slash() {
        let c = client("https://wiki.example.dev/raw/");
        assert_eq!(c.document_url("Home").as_str(), "https://wiki.example.dev/raw/Home.md");
    }

    #[test]
    fn document_url_keeps_identifier_in_one_segment() {
        let c = client("https://wiki.example.dev/raw");
        let url = c.document_url("../secrets");
        assert_eq!(url.as_str(), "https://wiki.example.dev/raw/..%2Fsecrets.md");
    }

    #[test]
    fn rejects_non_base_urls() {
        let config = SiteConfig {
            wiki_raw_base: "mailto:wiki@example.dev".to_string(),
            ..SiteConfig::default()
        };
        assert!(WikiClient::new(&config).is_err());
    }
}
