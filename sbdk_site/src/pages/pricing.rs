//! Pricing page: tiers + FAQ

use maud::{Markup, html};

use super::{NavItem, PageMeta, REPO_URL, shell};
use crate::config::SiteConfig;

struct Tier {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    cta: &'static str,
    cta_link: &'static str,
    highlighted: bool,
    badge: Option<&'static str>,
}

const TIERS: &[Tier] = &[
    Tier {
        name: "Open Source",
        price: "Free",
        period: "Forever",
        description: "Perfect for individual developers and small teams",
        features: &[
            "Full CLI toolkit",
            "DLT, dbt, DuckDB integration",
            "Unlimited projects",
            "Unlimited data processing",
            "Local development",
            "Community support",
            "GitHub wiki access",
            "MIT License",
        ],
        cta: "Get Started",
        cta_link: REPO_URL,
        highlighted: false,
        badge: None,
    },
    Tier {
        name: "Team",
        price: "Coming Soon",
        period: "",
        description: "Collaborate with your data team",
        features: &[
            "Everything in Open Source",
            "Team collaboration features",
            "Shared pipeline templates",
            "Version control integration",
            "Priority email support",
            "Advanced monitoring",
            "Usage analytics dashboard",
            "SSO integration",
        ],
        cta: "Join Waitlist",
        cta_link: "#waitlist",
        highlighted: true,
        badge: Some("Coming Q2 2025"),
    },
    Tier {
        name: "Enterprise",
        price: "Custom",
        period: "",
        description: "For large organizations with specific needs",
        features: &[
            "Everything in Team",
            "Dedicated support",
            "Custom SLAs",
            "On-premise deployment",
            "Advanced security features",
            "Audit logging",
            "Custom integrations",
            "Training & onboarding",
        ],
        cta: "Contact Sales",
        cta_link: "mailto:sales@sbdk.dev",
        highlighted: false,
        badge: Some("Coming Soon"),
    },
];

const FAQ: &[(&str, &str)] = &[
    (
        "Will the open source version always be free?",
        "Yes. SBDK.dev core is MIT licensed and will always be free and open source.",
    ),
    (
        "What will the Team tier include?",
        "Collaboration features like shared pipeline templates, team dashboards, advanced monitoring, and priority support.",
    ),
    (
        "When will Team and Enterprise tiers launch?",
        "The Team tier is planned for Q2 2025 with Enterprise features shortly after. Join the waitlist to be notified.",
    ),
    (
        "Can I use SBDK.dev for commercial projects?",
        "Yes. The MIT license allows commercial use without restrictions.",
    ),
    (
        "Do I need to upgrade to use SBDK.dev in production?",
        "No. The open source version is production-ready; paid tiers add collaboration, support, and enterprise features.",
    ),
    (
        "Will there be cloud deployment options?",
        "Cloud deployment is being explored for Enterprise. The open source version will always support local and self-hosted use.",
    ),
];

pub fn pricing_page(config: &SiteConfig) -> Markup {
    let meta = PageMeta::templated(
        "Pricing",
        "SBDK.dev pricing: free and open source forever, with Team and Enterprise tiers coming soon.",
        "/pricing",
    );
    let body = html! {
        main {
            section class="page-header" {
                div class="container" {
                    h1 class="page-title" { "Simple, Transparent Pricing" }
                    p class="page-description" { "Start free with open source. Scale with your team." }
                }
            }
            section class="tiers" {
                div class="container tier-grid" {
                    @for tier in TIERS {
                        article.tier.tier-highlighted[tier.highlighted] {
                            @if let Some(badge) = tier.badge {
                                span class="tier-badge" { (badge) }
                            }
                            h2 { (tier.name) }
                            p class="tier-price" {
                                (tier.price)
                                @if !tier.period.is_empty() {
                                    span class="tier-period" { " / " (tier.period) }
                                }
                            }
                            p { (tier.description) }
                            ul {
                                @for feature in tier.features {
                                    li { (feature) }
                                }
                            }
                            a href=(tier.cta_link) class="btn" { (tier.cta) }
                        }
                    }
                }
            }
            section class="faq" {
                div class="container" {
                    h2 { "Frequently Asked Questions" }
                    @for (question, answer) in FAQ {
                        div class="faq-item" {
                            h3 { (question) }
                            p { (answer) }
                        }
                    }
                }
            }
            section id="waitlist" class="waitlist" {
                div class="container" {
                    h2 { "Get Early Access" }
                    p { "For now, star us on GitHub to stay updated on all new features:" }
                    a href=(REPO_URL) target="_blank" rel="noopener noreferrer" class="btn btn-primary" { "Star on GitHub" }
                }
            }
        }
    };
    shell(config, &meta, NavItem::Pricing, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tiers_and_faq() {
        let html = pricing_page(&SiteConfig::default()).into_string();
        assert!(html.contains("<title>Pricing | SBDK.dev</title>"));
        for tier in TIERS {
            assert!(html.contains(tier.name));
        }
        assert_eq!(html.matches(r#"class="faq-item""#).count(), FAQ.len());
        assert!(html.contains("tier tier-highlighted"));
        assert!(html.contains("Training &amp; onboarding"));
    }
}
