//! Server-rendered pages: shared shell, nav and footer

mod docs;
mod docs_hub;
mod home;
mod pricing;

pub use docs::{DocContent, doc_page, not_found_page};
pub use docs_hub::docs_hub_page;
pub use home::home_page;
pub use pricing::pricing_page;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde_json::json;

use crate::config::SiteConfig;

pub const SITE_NAME: &str = "SBDK.dev";
pub const REPO_URL: &str = "https://github.com/sbdk-dev/sbdk-dev";
const DEFAULT_TITLE: &str = "SBDK.dev - Enterprise Data Pipelines in 30 Seconds";
const DEFAULT_DESCRIPTION: &str = "Local-first data pipeline toolkit with DLT, dbt, and DuckDB. \
    480x faster setup, zero cloud dependencies, enterprise-grade processing in under 500MB.";
const KEYWORDS: &[&str] = &[
    "data pipeline",
    "dlt",
    "dbt",
    "duckdb",
    "local-first",
    "data engineering",
    "analytics",
    "ETL",
    "open source",
    "developer tools",
];

/// Which top-level nav entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Docs,
    Pricing,
}

/// Head metadata for one page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Path part of the canonical URL
    pub path: String,
}

impl PageMeta {
    pub fn site_default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            path: "/".to_string(),
        }
    }

    /// `"{title} | SBDK.dev"`
    pub fn templated(title: &str, description: &str, path: &str) -> Self {
        Self::absolute(format!("{title} | {SITE_NAME}"), description, path)
    }

    pub fn absolute(title: String, description: &str, path: &str) -> Self {
        Self {
            title,
            description: description.to_string(),
            path: path.to_string(),
        }
    }
}

/// schema.org SoftwareApplication block for search engines.
fn json_ld(config: &SiteConfig) -> String {
    let data = json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": SITE_NAME,
        "applicationCategory": "DeveloperApplication",
        "operatingSystem": "Linux, macOS, Windows",
        "description": "Local-first data pipeline toolkit integrating DLT, dbt, and DuckDB for enterprise-grade data processing",
        "offers": { "@type": "Offer", "price": "0", "priceCurrency": "USD" },
        "author": { "@type": "Organization", "name": "SBDK" },
        "url": config.site_url,
        "downloadUrl": REPO_URL,
    });
    // `</` inside a script element would end it early
    data.to_string().replace("</", "<\\/")
}

pub fn shell(config: &SiteConfig, meta: &PageMeta, active: NavItem, content: Markup) -> Markup {
    let canonical = config.absolute_url(&meta.path);
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                meta name="keywords" content=(KEYWORDS.join(", "));
                meta name="robots" content="index, follow";
                link rel="canonical" href=(canonical);
                link rel="icon" href="/favicon.svg" type="image/svg+xml";
                meta property="og:type" content="website";
                meta property="og:locale" content="en_US";
                meta property="og:site_name" content=(SITE_NAME);
                meta property="og:url" content=(canonical);
                meta property="og:title" content=(meta.title);
                meta property="og:description" content=(meta.description);
                meta name="twitter:card" content="summary_large_image";
                script type="application/ld+json" { (PreEscaped(json_ld(config))) }
            }
            body class="font-sans antialiased" {
                (nav(active))
                (content)
                (footer())
            }
        }
    }
}

fn nav(active: NavItem) -> Markup {
    let link_class = |item: NavItem| if item == active { "nav-link active" } else { "nav-link" };
    html! {
        nav class="site-nav" {
            div class="container" {
                a href="/" class="brand" { span class="brand-name" { (SITE_NAME) } }
                div class="nav-links" {
                    a href="/#features" class=(link_class(NavItem::Home)) { "Features" }
                    a href="/docs/home" class=(link_class(NavItem::Docs)) { "Docs" }
                    a href="/pricing" class=(link_class(NavItem::Pricing)) { "Pricing" }
                }
                a href=(REPO_URL) target="_blank" rel="noopener noreferrer" class="nav-github" {
                    "Star on GitHub"
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="footer" {
            div class="container" {
                div class="footer-links" {
                    a href=(REPO_URL) target="_blank" rel="noopener noreferrer" class="footer-link" { "GitHub" }
                    a href="/docs/home" class="footer-link" { "Documentation" }
                    a href="/pricing" class="footer-link" { "Pricing" }
                }
                p class="footer-copyright" { "© 2025 SBDK. Open Source." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templated_title() {
        let meta = PageMeta::templated("Pricing", "desc", "/pricing");
        assert_eq!(meta.title, "Pricing | SBDK.dev");
    }

    #[test]
    fn shell_has_head_metadata() {
        let config = SiteConfig::default();
        let page = shell(
            &config,
            &PageMeta::site_default(),
            NavItem::Home,
            html! { main { "body" } },
        )
        .into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>SBDK.dev - Enterprise Data Pipelines in 30 Seconds</title>"));
        assert!(page.contains(r#"<link rel="canonical" href="https://sbdk.dev/">"#));
        assert!(page.contains("application/ld+json"));
        assert!(page.contains("<main>body</main>"));
    }

    #[test]
    fn json_ld_cannot_close_script() {
        let config = SiteConfig {
            site_url: "https://sbdk.dev/</script><script>".to_string(),
            ..SiteConfig::default()
        };
        assert!(!json_ld(&config).contains("</script>"));
    }
}
