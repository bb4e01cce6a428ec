//! Wiki content rewriting.
//!
//! Wiki pages link to each other by filename (`[Setup](Getting-Started)`,
//! sometimes with the old uppercase names and a `.md` suffix) and by
//! absolute wiki URLs. Before rendering, both forms are pointed at the
//! site's own `/docs/` routes.

use regex::{NoExpand, Regex};
use thiserror::Error;

use crate::pages::DOC_PAGES;

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("invalid external docs pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("local docs prefix '{local}' contains external prefix '{external}'")]
    Overlapping { external: String, local: String },
}

/// Applies the link replacement table and the external domain rewrite.
///
/// Built once at startup; `rewrite` is pure and safe to share.
#[derive(Debug, Clone)]
pub struct ContentRewriter {
    literals: Vec<(String, String)>,
    external: Regex,
    local_prefix: String,
}

impl ContentRewriter {
    /// `external_docs_url` is the prefix to replace, `site_url` the site
    /// origin whose `/docs/` path replaces it.
    pub fn new(external_docs_url: &str, site_url: &str) -> Result<Self, RewriteError> {
        let external_prefix = format!("{}/", external_docs_url.trim_end_matches('/'));
        let local_prefix = format!("{}/docs/", site_url.trim_end_matches('/'));

        // A local prefix that still matches would be rewritten again on every pass.
        if local_prefix.contains(&external_prefix) {
            return Err(RewriteError::Overlapping {
                external: external_prefix,
                local: local_prefix,
            });
        }

        let external = Regex::new(&regex::escape(&external_prefix))?;
        Ok(Self {
            literals: legacy_link_table(),
            external,
            local_prefix,
        })
    }

    pub fn rewrite(&self, content: &str) -> String {
        let mut out = content.to_string();
        for (from, to) in &self.literals {
            if out.contains(from.as_str()) {
                out = out.replace(from.as_str(), to);
            }
        }
        self.external
            .replace_all(&out, NoExpand(&self.local_prefix))
            .into_owned()
    }

    /// Number of literal replacements in the table.
    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }
}

/// `](Wiki-Name)`, `](Wiki-Name.md)` and their uppercase spellings, mapped
/// to `](/docs/slug)`.
fn legacy_link_table() -> Vec<(String, String)> {
    let mut table = Vec::new();
    for page in &DOC_PAGES {
        let target = format!("](/docs/{})", page.slug);
        let mut names = vec![page.wiki_slug.to_string()];
        let upper = page.wiki_slug.to_uppercase();
        if upper != page.wiki_slug {
            names.push(upper);
        }
        for name in names {
            table.push((format!("]({name}.md)"), target.clone()));
            table.push((format!("]({name})"), target.clone()));
        }
    }
    table
}
