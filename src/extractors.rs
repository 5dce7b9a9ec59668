//! Download link extraction from HTML

use scraper::{Html, Selector};

/// Direct-download (Xunlei) scheme prefix
pub const THUNDER_PREFIX: &str = "thunder://";
/// Magnet URI prefix
pub const MAGNET_PREFIX: &str = "magnet:";

/// Prefixes recognised as download links, checked against the raw href.
pub const DOWNLOAD_LINK_PREFIXES: [&str; 2] = [THUNDER_PREFIX, MAGNET_PREFIX];

/// True if `href` starts with a download-link prefix.
///
/// The check is case-sensitive and anchored at position zero; the value is
/// not trimmed.
pub fn is_download_link(href: &str) -> bool {
    DOWNLOAD_LINK_PREFIXES
        .iter()
        .any(|prefix| href.starts_with(prefix))
}

/// Extract download links from every `<a href>` in document order.
///
/// Matches are returned verbatim, duplicates included.
pub fn extract_download_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    let links: Vec<String> = document
        .select(&selector)
        .filter_map(|el| el.value().attr("href"))
        .filter(|href| is_download_link(href))
        .map(String::from)
        .collect();

    tracing::debug!(count = links.len(), "extracted download links");
    links
}
