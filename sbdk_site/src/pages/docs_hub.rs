//! Docs hub: the ecosystem repositories

use maud::{Markup, html};

use super::{NavItem, PageMeta, shell};
use crate::config::SiteConfig;

struct Project {
    name: &'static str,
    description: &'static str,
    link: &'static str,
    archived: bool,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "SBDK.dev",
        description: "The foundation: local-first data pipeline framework with DLT, dbt, and DuckDB. \
                      Build, test, and run data pipelines entirely on your laptop.",
        link: "https://github.com/sbdk-dev/sbdk-dev",
        archived: false,
    },
    Project {
        name: "Mallard (local-inference)",
        description: "DuckDB extension for ML/AI: zero-shot predictions, embeddings, and feature importance in SQL.",
        link: "https://github.com/sbdk-dev/local-inference",
        archived: true,
    },
    Project {
        name: "Semantic Tracer",
        description: "Visualize dbt semantic layers with interactive lineage graphs.",
        link: "https://github.com/sbdk-dev/semantic-tracer",
        archived: true,
    },
    Project {
        name: "Local AI Analyst",
        description: "AI-powered data analyst with statistical rigor, answering from real query results.",
        link: "https://github.com/sbdk-dev/local-ai-analyst",
        archived: true,
    },
    Project {
        name: "knowDB",
        description: "MCP integration layer connecting your data to AI assistants.",
        link: "https://github.com/sbdk-dev/knowDB",
        archived: true,
    },
];

pub fn docs_hub_page(config: &SiteConfig) -> Markup {
    let meta = PageMeta::templated(
        "Explore the SBDK Ecosystem",
        "Five open-source projects demonstrating how to build local-first data and AI tools.",
        "/docs",
    );
    let body = html! {
        main {
            section class="page-header" {
                div class="container" {
                    h1 class="page-title" { "Explore the SBDK Ecosystem" }
                    p class="page-description" {
                        "Five open-source projects demonstrating how to build local-first data and AI tools."
                    }
                    a href="/docs/home" class="btn btn-primary" { "Read the SBDK.dev documentation" }
                }
            }
            section class="projects" {
                div class="container project-grid" {
                    @for project in PROJECTS {
                        a href=(project.link) target="_blank" rel="noopener noreferrer" class="project-card" {
                            h2 { (project.name) }
                            @if project.archived {
                                span class="badge-archived" { "ARCHIVED" }
                            }
                            p { (project.description) }
                            span class="project-link" { "View Repository" }
                        }
                    }
                }
            }
        }
    };
    shell(config, &meta, NavItem::Docs, body)
}
