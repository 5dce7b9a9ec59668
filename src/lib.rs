//! Download link extractor for dygang.net
//!
//! Fetches one film page and pulls out the download links embedded as
//! anchors:
//! - thunder:// (Xunlei direct download)
//! - magnet: (BitTorrent)

pub mod error;
pub mod extractors;
pub mod fetch;
pub mod links;
pub mod logging;
pub mod site;

pub use error::FetchError;
pub use extractors::*;
pub use fetch::{PageFetcher, BROWSER_USER_AGENT};
pub use links::get_download_links;
pub use site::{SitePolicy, DYGANG_HOST};
