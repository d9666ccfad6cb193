use async_trait::async_trait;

use crate::types::{ContentPageSnapshot, SearchPageSnapshot};
use crate::Result;

/// What the scraper needs from a browser.
///
/// An implementation opens a page, navigates, waits until the relevant
/// element is rendered, captures the queried node lists, and releases the
/// page (and browser, if it owns one) on every exit path.
#[async_trait]
pub trait DocBrowser: Send + Sync {
    /// Load `base_url`, submit `term` in the search box, and capture the
    /// link, path-container and snippet node lists of the results panel.
    async fn capture_search(&self, base_url: &str, term: &str) -> Result<SearchPageSnapshot>;

    /// Load `url` and capture its title, breadcrumb, body and content panels.
    async fn capture_content(&self, url: &str) -> Result<ContentPageSnapshot>;
}
