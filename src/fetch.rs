//! Page fetching over blocking HTTP (ureq)

use crate::error::FetchError;

/// Desktop Chrome User-Agent; the site turns away obvious bots.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fetches a single page as text.
///
/// Timeouts, redirects and proxies are left at ureq's defaults. Non-2xx
/// statuses are reported as [`FetchError::Status`] rather than as transport
/// errors so callers can tell them apart.
#[derive(Clone)]
pub struct PageFetcher {
    agent: ureq::Agent,
    user_agent: String,
}

impl PageFetcher {
    pub fn new() -> Self {
        Self::with_user_agent(BROWSER_USER_AGENT)
    }

    pub fn with_user_agent(user_agent: &str) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::Agent::config_builder()
                .user_agent(user_agent)
                .http_status_as_error(false)
                .build(),
        );

        Self {
            agent,
            user_agent: user_agent.to_string(),
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// GET `url` and return the decoded body.
    pub fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, "fetching page");

        let resp = self
            .agent
            .get(url)
            .call()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // No size cap: ureq's default 10 MB limit would drop large pages.
        let mut body = resp.into_body();
        let html = body
            .with_config()
            .limit(u64::MAX)
            .read_to_string()
            .map_err(|source| FetchError::Body {
                url: url.to_string(),
                source,
            })?;

        tracing::debug!(url, bytes = html.len(), "fetched page");
        Ok(html)
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}
