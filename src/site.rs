//! Supported-site guard

/// Host fragment of the only supported site
pub const DYGANG_HOST: &str = "dygang.net";

/// Decides whether a URL belongs to a supported site.
///
/// This is a plain substring test on the URL text, so the fragment also
/// matches when it only appears in the path or query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePolicy {
    host_fragment: String,
}

impl SitePolicy {
    pub fn new(host_fragment: impl Into<String>) -> Self {
        Self {
            host_fragment: host_fragment.into(),
        }
    }

    pub fn dygang() -> Self {
        Self::new(DYGANG_HOST)
    }

    pub fn host_fragment(&self) -> &str {
        &self.host_fragment
    }

    pub fn is_supported(&self, url: &str) -> bool {
        url.contains(&self.host_fragment)
    }
}

impl Default for SitePolicy {
    fn default() -> Self {
        Self::dygang()
    }
}
