//! HTML parser for page text and same-origin links
//!
//! This module handles parsing HTML content to extract:
//! - The readable text of a page (title, meta description, body)
//! - Same-origin links to follow (from `<a>` tags)

use crate::url::{is_asset_path, is_same_origin, parse_page_url};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Elements whose content never counts as page text
const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "iframe"];

/// Schemes of references that are not pages
const IGNORED_SCHEMES: &[&str] = &["mailto:", "tel:", "javascript:"];

/// Outcome of harvesting links from one page
///
/// A failure carries no reason: the page simply contributes no links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkExtraction {
    /// Extraction ran; the links are absolute, same-origin and fragment-free
    Extracted(Vec<String>),
    /// Markup or page URL could not be used
    Failed,
}

/// Reduces a document to its readable text
///
/// The result is the text of every `<title>`, the `content` of
/// `<meta name="description">`, and the body text, joined by single spaces.
/// Anything inside `script`, `style`, `noscript` or `iframe` is skipped.
///
/// # Example
///
/// ```
/// use page_lexicon::crawler::extract_page_text;
///
/// let html = r#"<html><head><title>Rust</title></head>
///     <body><p>Hello</p><script>var x = 1;</script></body></html>"#;
/// let text = extract_page_text(html);
/// assert!(text.contains("Rust"));
/// assert!(text.contains("Hello"));
/// assert!(!text.contains("var x"));
/// ```
pub fn extract_page_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let description = extract_meta_description(&document);
    let body = extract_body_text(&document);

    [title, description, body].join(" ")
}

/// Concatenated text of all `<title>` elements
fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn extract_meta_description(document: &Html) -> String {
    let Ok(selector) = Selector::parse(r#"meta[name="description"]"#) else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Body text with non-content elements removed
fn extract_body_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse("body") else {
        return String::new();
    };

    let mut parts: Vec<&str> = Vec::new();
    for body in document.select(&selector) {
        for node in body.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };

            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .map_or(false, |element| NON_CONTENT_TAGS.contains(&element.name()))
            });
            if hidden {
                continue;
            }

            let text = text.trim();
            if !text.is_empty() {
                parts.push(text);
            }
        }
    }

    parts.join(" ")
}

/// Harvests same-origin links from the markup of the page at `page_url`
///
/// Returns [`LinkExtraction::Failed`] when the page URL itself cannot serve
/// as a base. Individual malformed references are dropped without failing the
/// whole page.
pub fn extract_links_from_markup(html: &str, page_url: &str) -> LinkExtraction {
    match parse_page_url(page_url) {
        Ok(base_url) => LinkExtraction::Extracted(extract_same_origin_links(html, &base_url)),
        Err(e) => {
            tracing::debug!("Cannot extract links from {}: {}", page_url, e);
            LinkExtraction::Failed
        }
    }
}

/// Extracts same-origin page links from HTML
///
/// # Link Extraction Rules
///
/// **Include:**
/// - `<a href="...">` resolved against `base_url`
///
/// **Exclude:**
/// - `mailto:`, `tel:`, `javascript:` links
/// - Fragment-only links (`#section`)
/// - Links to another scheme, host or port
/// - Images, PDFs, archives, audio and video files
///
/// Fragments are stripped and duplicates removed, keeping document order.
///
/// # Example
///
/// ```
/// use page_lexicon::crawler::extract_same_origin_links;
/// use url::Url;
///
/// let html = r#"<a href="/about#team">About</a><a href="https://other.com/">Other</a>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let links = extract_same_origin_links(html, &base_url);
/// assert_eq!(links, vec!["https://example.com/about".to_string()]);
/// ```
pub fn extract_same_origin_links(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(link) = resolve_link(href, base_url) {
                    if seen.insert(link.clone()) {
                        links.push(link);
                    }
                }
            }
        }
    }

    links
}

/// Resolves a link href to an absolute same-origin page URL
///
/// Returns None if the link should be excluded.
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if IGNORED_SCHEMES
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
    {
        return None;
    }

    let mut resolved = base_url.join(href).ok()?;

    if !is_same_origin(base_url, &resolved) || is_asset_path(&resolved) {
        return None;
    }

    resolved.set_fragment(None);
    Some(resolved.to_string())
}
