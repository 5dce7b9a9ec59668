//! Fetch a page and collect its download links

use crate::extractors::extract_download_links;
use crate::fetch::PageFetcher;

/// Download links found on `url`, in document order.
///
/// Never fails: transport errors, non-2xx statuses and unreadable bodies are
/// logged and turned into an empty result.
pub fn get_download_links(fetcher: &PageFetcher, url: &str) -> Vec<String> {
    match fetcher.fetch_html(url) {
        Ok(html) => extract_download_links(&html),
        Err(e) => {
            tracing::error!(url = e.url(), "Error fetching links: {}", e);
            vec![]
        }
    }
}
