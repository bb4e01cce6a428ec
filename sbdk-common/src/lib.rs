//! Shared types for the SBDK.dev site.
//!
//! This crate holds the parts of the documentation viewer that do no I/O:
//! the fixed page registry, the slug resolution rules, and the wiki
//! link rewriter applied to fetched content before rendering.

mod pages;
mod resolve;
mod rewrite;

pub use pages::{DOC_PAGES, DocCategory, DocPage, find_by_slug, find_by_wiki_slug, grouped, home};
pub use resolve::{ResolveMode, Resolution, UnknownResolveMode, legacy_remote_id, resolve};
pub use rewrite::{ContentRewriter, RewriteError};
