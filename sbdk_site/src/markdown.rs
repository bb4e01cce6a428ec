//! Markdown to HTML for wiki pages.
//!
//! Raw HTML in wiki sources is rendered as text and script URLs are
//! neutralised, so fetched content cannot inject markup into the page.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

fn is_script_url(url: &str) -> bool {
    let lowered = url.trim_start().to_ascii_lowercase();
    lowered.starts_with("javascript:") || lowered.starts_with("vbscript:") || lowered.starts_with("data:text/html")
}

fn sanitize(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if is_script_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if is_script_url(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed(""),
            title,
            id,
        }),
        other => other,
    }
}

pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, options()).map(sanitize);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_gfm_tables() {
        let html = to_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn renders_links_and_headings() {
        let html = to_html("# Title\n\n[start](/docs/getting-started)");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains(r#"<a href="/docs/getting-started">start</a>"#));
    }

    #[test]
    fn escapes_raw_html() {
        let html = to_html("<script>alert(1)</script>\n\ntext <b>bold</b>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn neutralises_script_links() {
        let html = to_html("[x](javascript:alert(1)) [y](JavaScript:void(0))");
        assert!(!html.to_lowercase().contains("javascript:"));
        assert!(html.contains(r##"href="#""##));
    }

    #[test]
    fn malformed_input_still_renders() {
        let html = to_html("[[unclosed](Getting-Started **bold");
        assert!(html.contains("Getting-Started"));
    }
}
