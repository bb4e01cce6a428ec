//! Site configuration.
//!
//! Settings come from an optional TOML file; the CLI overrides individual
//! fields afterwards. Every field has a default so an empty file is valid.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use sbdk_common::ResolveMode;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_SITE_URL: &str = "https://sbdk.dev";
pub const DEFAULT_WIKI_RAW_BASE: &str = "https://raw.githubusercontent.com/wiki/sbdk-dev/sbdk-dev";
pub const DEFAULT_WIKI_WEB_BASE: &str = "https://github.com/sbdk-dev/sbdk-dev/wiki";
pub const DEFAULT_USER_AGENT: &str = "SBDK.dev Documentation Viewer";
pub const DEFAULT_ANALYTICS_HOST: &str = "https://us.i.posthog.com";
pub const DEFAULT_ANALYTICS_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Address the HTTP server listens on
    pub bind: SocketAddr,
    /// Public origin of the site, used for canonical URLs and the sitemap
    pub site_url: String,
    /// Raw wiki base; `{wiki_raw_base}/{id}.md` is fetched
    pub wiki_raw_base: String,
    /// Human-facing wiki base for "Edit on GitHub" links
    pub wiki_web_base: String,
    /// Absolute docs prefix rewritten to `{site_url}/docs/` in fetched content.
    /// Defaults to `wiki_web_base` when unset.
    pub external_docs_url: Option<String>,
    pub user_agent: String,
    /// Freshness window for fetched pages; 0 disables the cache
    pub cache_ttl_secs: u64,
    pub cache_capacity: u64,
    /// Upper bound for a single wiki fetch; no timeout when unset
    pub fetch_timeout_secs: Option<u64>,
    pub resolve_mode: ResolveMode,
    pub log_level: String,
    pub analytics: AnalyticsConfig,
}

/// PostHog-compatible event capture settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Project API key; capture is disabled without one
    pub api_key: Option<String>,
    pub host: String,
    /// Upper bound on a single capture request
    pub timeout_secs: u64,
}

impl AnalyticsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            host: DEFAULT_ANALYTICS_HOST.to_string(),
            timeout_secs: DEFAULT_ANALYTICS_TIMEOUT_SECS,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            site_url: DEFAULT_SITE_URL.to_string(),
            wiki_raw_base: DEFAULT_WIKI_RAW_BASE.to_string(),
            wiki_web_base: DEFAULT_WIKI_WEB_BASE.to_string(),
            external_docs_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache_ttl_secs: 300,
            cache_capacity: 256,
            fetch_timeout_secs: None,
            resolve_mode: ResolveMode::default(),
            log_level: "info".to_string(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load config from a specific path.
    ///
    /// Unlike a project-local config, a file named on the command line must
    /// exist and parse.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn external_docs_url(&self) -> &str {
        self.external_docs_url
            .as_deref()
            .unwrap_or(&self.wiki_web_base)
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        (self.cache_ttl_secs > 0).then(|| Duration::from_secs(self.cache_ttl_secs))
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }

    /// `{site_url}{path}` without a doubled slash.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.site_url.trim_end_matches('/'), path)
    }

    /// Link to the wiki page itself, for "Edit on GitHub" and error fallbacks.
    pub fn wiki_page_url(&self, wiki_slug: &str) -> String {
        format!("{}/{}", self.wiki_web_base.trim_end_matches('/'), wiki_slug)
    }
}
