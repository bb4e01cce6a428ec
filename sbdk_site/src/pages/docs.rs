//! Documentation viewer: sidebar navigation + rendered wiki page

use maud::{Markup, PreEscaped, html};
use sbdk_common::{DocPage, grouped, home};

use super::{NavItem, PageMeta, shell};
use crate::config::SiteConfig;

/// What the content area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocContent {
    /// Sanitised HTML produced from the wiki markdown
    Rendered(String),
    /// User-facing error message; no partial content is shown
    Failed(String),
}

fn sidebar(config: &SiteConfig, current: &DocPage) -> Markup {
    html! {
        aside class="docs-sidebar" {
            h3 { "Documentation" }
            @for (category, pages) in grouped() {
                div class="docs-category" id={ "nav-" (category.as_label()) } {
                    h4 { (category.display_name()) }
                    ul {
                        @for page in pages {
                            li {
                                a.docs-link.active[page.slug == current.slug] href={ "/docs/" (page.slug) } {
                                    (page.title)
                                }
                            }
                        }
                    }
                }
            }
            a href=(config.wiki_page_url(current.wiki_slug)) target="_blank" rel="noopener noreferrer" class="docs-edit" {
                "Edit on GitHub"
            }
        }
    }
}

fn error_panel(config: &SiteConfig, current: &DocPage, message: &str) -> Markup {
    html! {
        div class="docs-error" role="alert" {
            p class="docs-error-title" { "Failed to load documentation" }
            p class="docs-error-message" { (message) }
            div class="docs-error-actions" {
                a href=(config.wiki_page_url(current.wiki_slug)) target="_blank" rel="noopener noreferrer" {
                    "View on GitHub instead"
                }
                a href={ "/docs/" (home().slug) } { "Return to Home page" }
            }
        }
    }
}

pub fn doc_page(config: &SiteConfig, page: &DocPage, content: &DocContent) -> Markup {
    let meta = PageMeta::absolute(
        format!("{} | SBDK.dev Documentation", page.title),
        &format!(
            "{} - Complete documentation for SBDK.dev, a local-first data pipeline toolkit combining DLT, dbt, and DuckDB.",
            page.title
        ),
        &format!("/docs/{}", page.slug),
    );
    let body = html! {
        div class="docs-layout" {
            (sidebar(config, page))
            main class="docs-content" {
                @match content {
                    DocContent::Rendered(rendered) => {
                        article class="prose" { (PreEscaped(rendered)) }
                    }
                    DocContent::Failed(message) => {
                        (error_panel(config, page, message))
                    }
                }
            }
        }
    };
    shell(config, &meta, NavItem::Docs, body)
}

pub fn not_found_page(config: &SiteConfig) -> Markup {
    let meta = PageMeta::templated("Page Not Found", "The requested page does not exist.", "/404");
    let body = html! {
        main class="not-found" {
            div class="container" {
                h1 { "Page Not Found" }
                p { "The page you are looking for does not exist." }
                a href={ "/docs/" (home().slug) } class="btn" { "Browse the documentation" }
            }
        }
    };
    shell(config, &meta, NavItem::Docs, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbdk_common::find_by_slug;

    fn faq() -> &'static DocPage {
        find_by_slug("faq").expect("faq page")
    }

    #[test]
    fn rendered_page_has_title_nav_and_content() {
        let config = SiteConfig::default();
        let html = doc_page(
            &config,
            faq(),
            &DocContent::Rendered("<h1>FAQ</h1>".to_string()),
        )
        .into_string();

        assert!(html.contains("<title>FAQ | SBDK.dev Documentation</title>"));
        assert!(html.contains("<h1>FAQ</h1>"));
        assert_eq!(html.matches("docs-link active").count(), 1);
        assert!(html.contains(r#"href="/docs/faq""#));
        assert!(html.contains(r#"href="/docs/ci-cd-guide""#));
        assert!(html.contains("Advanced Topics"));
        assert!(html.contains("https://github.com/sbdk-dev/sbdk-dev/wiki/FAQ"));
        assert!(!html.contains("docs-error"));
    }

    #[test]
    fn failed_page_shows_error_panel() {
        let config = SiteConfig::default();
        let html = doc_page(
            &config,
            faq(),
            &DocContent::Failed("Failed to fetch documentation: Not Found".to_string()),
        )
        .into_string();

        assert!(html.contains("Failed to load documentation"));
        assert!(html.contains("Failed to fetch documentation: Not Found"));
        assert!(html.contains("View on GitHub instead"));
        assert!(html.contains(r#"<a href="/docs/home">Return to Home page</a>"#));
        assert!(!html.contains(r#"class="prose""#));
    }

    #[test]
    fn error_message_is_escaped() {
        let html = doc_page(
            &SiteConfig::default(),
            faq(),
            &DocContent::Failed("<img src=x>".to_string()),
        )
        .into_string();
        assert!(html.contains("&lt;img src=x&gt;"));
    }
}
