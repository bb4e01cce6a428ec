//! sitemap.xml and robots.txt generation.

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use sbdk_common::DOC_PAGES;
use thiserror::Error;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("writing sitemap xml: {0}")]
    Io(#[from] std::io::Error),

    #[error("sitemap xml is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Site root, every documentation page, then pricing.
pub fn entries(site_url: &str, today: NaiveDate) -> Vec<SitemapEntry> {
    let base = site_url.trim_end_matches('/');
    let entry = |url: String, change_frequency, priority| SitemapEntry {
        url,
        last_modified: today,
        change_frequency,
        priority,
    };

    let mut out = Vec::with_capacity(DOC_PAGES.len() + 2);
    out.push(entry(base.to_string(), ChangeFrequency::Weekly, 1.0));
    for page in &DOC_PAGES {
        let priority = match page.slug {
            "home" | "getting-started" => 0.9,
            _ => 0.8,
        };
        out.push(entry(
            format!("{base}/docs/{}", page.slug),
            ChangeFrequency::Weekly,
            priority,
        ));
    }
    out.push(entry(format!("{base}/pricing"), ChangeFrequency::Monthly, 0.8));
    out
}

pub fn to_xml(entries: &[SitemapEntry]) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer
        .create_element("urlset")
        .with_attribute(("xmlns", SITEMAP_NS))
        .write_inner_content(|w| {
            for entry in entries {
                w.create_element("url").write_inner_content(|w| {
                    w.create_element("loc")
                        .write_text_content(BytesText::new(&entry.url))?;
                    w.create_element("lastmod")
                        .write_text_content(BytesText::new(&entry.last_modified.to_string()))?;
                    w.create_element("changefreq")
                        .write_text_content(BytesText::new(entry.change_frequency.as_str()))?;
                    w.create_element("priority")
                        .write_text_content(BytesText::new(&format!("{:.1}", entry.priority)))?;
                    Ok::<(), std::io::Error>(())
                })?;
            }
            Ok::<(), std::io::Error>(())
        })?;
    Ok(String::from_utf8(writer.into_inner())?)
}

pub fn robots_txt(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        site_url.trim_end_matches('/')
    )
}
