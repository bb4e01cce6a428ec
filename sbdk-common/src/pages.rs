//! Documentation page registry.
//!
//! The set of servable documentation pages is fixed at compile time. Each
//! entry maps a local path slug to the canonical wiki filename it is fetched
//! from, and to the navigation group it is listed under.

use serde::{Deserialize, Serialize};

/// Navigation groups for the documentation sidebar.
///
/// Variants are declared in the order they appear in navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocCategory {
    /// Landing page of the wiki
    Overview,
    /// Installation, first pipeline, FAQ
    GettingStarted,
    /// Pipeline internals (DLT, dbt, DuckDB)
    Architecture,
    /// Config files and API reference
    Configuration,
    /// Server mode, packaging, release workflow
    AdvancedTopics,
}

impl DocCategory {
    pub const ALL: [DocCategory; 5] = [
        DocCategory::Overview,
        DocCategory::GettingStarted,
        DocCategory::Architecture,
        DocCategory::Configuration,
        DocCategory::AdvancedTopics,
    ];

    /// Returns a kebab-case label for the category.
    ///
    /// Used as an HTML anchor and in analytics properties.
    pub fn as_label(&self) -> &'static str {
        match self {
            DocCategory::Overview => "overview",
            DocCategory::GettingStarted => "getting-started",
            DocCategory::Architecture => "architecture",
            DocCategory::Configuration => "configuration",
            DocCategory::AdvancedTopics => "advanced-topics",
        }
    }

    /// Returns the heading shown above the category in the sidebar.
    pub fn display_name(&self) -> &'static str {
        match self {
            DocCategory::Overview => "Overview",
            DocCategory::GettingStarted => "Getting Started",
            DocCategory::Architecture => "Architecture",
            DocCategory::Configuration => "Configuration",
            DocCategory::AdvancedTopics => "Advanced Topics",
        }
    }
}

/// A known documentation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocPage {
    /// Display title
    pub title: &'static str,
    /// Local path identifier, served at `/docs/{slug}`
    pub slug: &'static str,
    /// Wiki filename without the `.md` extension
    pub wiki_slug: &'static str,
    pub category: DocCategory,
}

const fn page(
    title: &'static str,
    slug: &'static str,
    wiki_slug: &'static str,
    category: DocCategory,
) -> DocPage {
    DocPage {
        title,
        slug,
        wiki_slug,
        category,
    }
}

/// Every servable documentation page. `home` must stay first.
pub static DOC_PAGES: [DocPage; 14] = [
    page("Home", "home", "Home", DocCategory::Overview),
    page("Getting Started", "getting-started", "Getting-Started", DocCategory::GettingStarted),
    page("User Guide", "user-guide", "User-Guide", DocCategory::GettingStarted),
    page("FAQ", "faq", "FAQ", DocCategory::GettingStarted),
    page("Architecture", "architecture", "Architecture", DocCategory::Architecture),
    page(
        "DLT Pipeline Architecture",
        "dlt-pipeline-architecture",
        "DLT-Pipeline-Architecture",
        DocCategory::Architecture,
    ),
    page("DBT Models", "dbt-models", "DBT-Models", DocCategory::Architecture),
    page("Configuration", "configuration", "Configuration", DocCategory::Configuration),
    page(
        "Configuration Schema",
        "configuration-schema",
        "Configuration-Schema",
        DocCategory::Configuration,
    ),
    page("API Reference", "api-reference", "API-Reference", DocCategory::Configuration),
    page("Server CLI Guide", "server-cli-guide", "Server-CLI-Guide", DocCategory::AdvancedTopics),
    page("Build Binary", "build-binary", "Build-Binary", DocCategory::AdvancedTopics),
    page("CI/CD Guide", "ci-cd-guide", "CI-CD-Guide", DocCategory::AdvancedTopics),
    page(
        "GitHub Release Workflow",
        "github-release-workflow",
        "GitHub-Release-Workflow",
        DocCategory::AdvancedTopics,
    ),
];

/// Look up a page by its local path slug.
pub fn find_by_slug(slug: &str) -> Option<&'static DocPage> {
    DOC_PAGES.iter().find(|p| p.slug == slug)
}

/// Look up a page by its exact wiki filename.
pub fn find_by_wiki_slug(wiki_slug: &str) -> Option<&'static DocPage> {
    DOC_PAGES.iter().find(|p| p.wiki_slug == wiki_slug)
}

/// The page shown when nothing else is selected.
pub fn home() -> &'static DocPage {
    &DOC_PAGES[0]
}

/// Pages grouped for navigation, categories in declaration order.
///
/// Categories without pages are skipped.
pub fn grouped() -> Vec<(DocCategory, Vec<&'static DocPage>)> {
    DocCategory::ALL
        .iter()
        .map(|&category| {
            let pages = DOC_PAGES
                .iter()
                .filter(|p| p.category == category)
                .collect::<Vec<_>>();
            (category, pages)
        })
        .filter(|(_, pages)| !pages.is_empty())
        .collect()
}
