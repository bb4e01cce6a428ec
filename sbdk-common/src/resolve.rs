//! Slug to wiki filename resolution.
//!
//! Two rules exist. The page registry is authoritative: known pages carry
//! their exact wiki filename. The older casing rule (uppercase everything
//! except `Home`) only matches wiki files that were renamed to uppercase,
//! and is kept as an explicit fallback for identifiers the registry does
//! not know about.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pages::{find_by_slug, find_by_wiki_slug};

/// The one identifier the casing rule leaves untouched.
const RESERVED_HOME: &str = "Home";

/// Which rule maps a requested slug to a wiki filename.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    /// Registry lookup first, casing rule for unknown identifiers.
    #[default]
    Registry,
    /// Casing rule only.
    Legacy,
}

#[derive(Debug, Error)]
#[error("unknown resolve mode '{0}' (expected 'registry' or 'legacy')")]
pub struct UnknownResolveMode(String);

impl FromStr for ResolveMode {
    type Err = UnknownResolveMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registry" => Ok(ResolveMode::Registry),
            "legacy" => Ok(ResolveMode::Legacy),
            other => Err(UnknownResolveMode(other.to_string())),
        }
    }
}

impl fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResolveMode::Registry => "registry",
            ResolveMode::Legacy => "legacy",
        })
    }
}

/// Outcome of resolving a slug, tagged with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Registry(&'static str),
    Legacy(String),
}

impl Resolution {
    pub fn remote_id(&self) -> &str {
        match self {
            Resolution::Registry(id) => id,
            Resolution::Legacy(id) => id,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Resolution::Legacy(_))
    }
}

/// Casing rule: `Home` stays as is, anything else is uppercased.
///
/// Performs no membership check. An identifier that does not exist on the
/// wiki only shows up as a failed fetch.
pub fn legacy_remote_id(input: &str) -> String {
    if input == RESERVED_HOME {
        input.to_string()
    } else {
        input.to_uppercase()
    }
}

/// Resolve a requested slug to the wiki filename to fetch.
///
/// Accepts either a wiki filename (`Getting-Started`) or a local path slug
/// (`getting-started`) for registry pages.
pub fn resolve(input: &str, mode: ResolveMode) -> Resolution {
    let registered = match mode {
        ResolveMode::Registry => find_by_wiki_slug(input).or_else(|| find_by_slug(input)),
        ResolveMode::Legacy => None,
    };
    match registered {
        Some(page) => Resolution::Registry(page.wiki_slug),
        None => Resolution::Legacy(legacy_remote_id(input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::DOC_PAGES;

    #[test]
    fn legacy_keeps_home() {
        assert_eq!(legacy_remote_id("Home"), "Home");
    }

    #[test]
    fn legacy_uppercases_everything_else() {
        for input in ["home", "HOME", "Getting-Started", "faq", "ci-cd-guide", ""] {
            assert_eq!(legacy_remote_id(input), input.to_uppercase());
        }
    }

    #[test]
    fn legacy_does_not_validate() {
        assert_eq!(legacy_remote_id("no-such-page"), "NO-SUCH-PAGE");
    }

    #[test]
    fn registry_mode_prefers_table() {
        for page in &DOC_PAGES {
            let by_wiki = resolve(page.wiki_slug, ResolveMode::Registry);
            let by_local = resolve(page.slug, ResolveMode::Registry);
            assert_eq!(by_wiki, Resolution::Registry(page.wiki_slug));
            assert_eq!(by_local, Resolution::Registry(page.wiki_slug));
        }
    }

    #[test]
    fn registry_mode_falls_back_to_casing_rule() {
        let resolution = resolve("Changelog", ResolveMode::Registry);
        assert!(resolution.is_legacy());
        assert_eq!(resolution.remote_id(), "CHANGELOG");
    }

    #[test]
    fn legacy_mode_ignores_table() {
        let resolution = resolve("Getting-Started", ResolveMode::Legacy);
        assert_eq!(resolution, Resolution::Legacy("GETTING-STARTED".to_string()));
        assert_eq!(resolve("Home", ResolveMode::Legacy).remote_id(), "Home");
    }

    #[test]
    fn mode_parses_lowercase() {
        let mode: ResolveMode = serde_json::from_str("\"legacy\"").expect("parse");
        assert_eq!(mode, ResolveMode::Legacy);
        assert_eq!(ResolveMode::default(), ResolveMode::Registry);
    }

    #[test]
    fn mode_from_str() {
        assert_eq!("legacy".parse::<ResolveMode>().ok(), Some(ResolveMode::Legacy));
        assert_eq!("registry".parse::<ResolveMode>().ok(), Some(ResolveMode::Registry));
        assert_eq!(ResolveMode::Legacy.to_string(), "legacy");

        let err = "Legacy".parse::<ResolveMode>().expect_err("case-sensitive");
        assert!(err.to_string().contains("'Legacy'"));
    }
}
