//! Home page: hero + project showcase

use maud::{Markup, html};

use super::{NavItem, PageMeta, REPO_URL, shell};
use crate::config::SiteConfig;

struct Showcase {
    name: &'static str,
    repo: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

const SHOWCASE: &[Showcase] = &[
    Showcase {
        name: "SBDK.dev (Sandbox Development Kit)",
        repo: "sbdk-dev/sbdk-dev",
        description: "A developer sandbox for local-first data pipeline development using DLT, DuckDB, and dbt.",
        features: &[
            "Fast installation with uv",
            "100% local, no cloud dependencies",
            "Guided interactive CLI",
            "Hot reload on file changes",
        ],
    },
    Showcase {
        name: "Mallard (local-inference)",
        repo: "sbdk-dev/local-inference",
        description: "Zero-shot tabular predictions and embeddings directly in DuckDB through SQL.",
        features: &[
            "Zero-shot classification and regression",
            "Declarative SQL UDFs",
            "Built in Rust as a DuckDB extension",
        ],
    },
    Showcase {
        name: "Semantic Tracer",
        repo: "sbdk-dev/semantic-tracer",
        description: "Interactive lineage graphs for dbt semantic layers.",
        features: &[
            "Your models never leave your machine",
            "Reads semantic_models.yml directly",
            "Tauri backend",
        ],
    },
    Showcase {
        name: "Local AI Analyst",
        repo: "sbdk-dev/local-ai-analyst",
        description: "Natural language questions answered from real query results with statistical checks.",
        features: &[
            "Significance testing and confidence intervals",
            "Execution-first answers",
            "Multi-query workflows",
        ],
    },
    Showcase {
        name: "knowDB",
        repo: "sbdk-dev/knowDB",
        description: "Query your data from AI assistants over the Model Context Protocol.",
        features: &[
            "Works with any MCP-compatible assistant",
            "Syncs dbt models to the semantic layer",
            "MIT licensed",
        ],
    },
];

pub fn home_page(config: &SiteConfig) -> Markup {
    let body = html! {
        main {
            section class="hero" {
                div class="container" {
                    h1 class="hero-title" { "Enterprise Data Pipelines in 30 Seconds" }
                    p class="hero-subtitle" {
                        "Local-first data pipeline toolkit combining DLT, dbt, and DuckDB. "
                        "Zero cloud dependencies."
                    }
                    div class="hero-actions" {
                        a href="/docs/getting-started" class="btn btn-primary" { "Get Started" }
                        a href=(REPO_URL) target="_blank" rel="noopener noreferrer" class="btn" { "View on GitHub" }
                    }
                    pre class="install" { code { "uv pip install sbdk-dev && sbdk init my_project" } }
                }
            }
            section id="features" class="features" {
                div class="container" {
                    h2 { "The SBDK Ecosystem" }
                    div class="feature-grid" {
                        @for project in SHOWCASE {
                            article class="feature-card" {
                                h3 { (project.name) }
                                p { (project.description) }
                                ul {
                                    @for feature in project.features {
                                        li { (feature) }
                                    }
                                }
                                a href={ "https://github.com/" (project.repo) } target="_blank" rel="noopener noreferrer" {
                                    (project.repo)
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    shell(config, &PageMeta::site_default(), NavItem::Home, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_project() {
        let html = home_page(&SiteConfig::default()).into_string();
        for project in SHOWCASE {
            assert!(html.contains(project.repo), "{}", project.name);
        }
        assert!(html.contains(r#"id="features""#));
    }
}
