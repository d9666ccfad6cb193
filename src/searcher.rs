//! Search and retrieval entry points.
//!
//! [`DocSearcher`] ties the browser capability to the scraper: it captures a
//! page, reconstructs results from it, and wraps any failure in a
//! [`DocError::Search`] / [`DocError::Retrieval`] carrying the cause.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};
use url::Url;

use crate::browser::{BrowserManager, BrowserOptions, DocBrowser};
use crate::config::{Config, DEFAULT_VERSION};
use crate::scrape::{extract_content, reconstruct};
use crate::types::{DocumentContent, SearchResult};
use crate::{DocError, Result};

/// Docserver root for a documentation version.
pub fn base_url_for_version(template: &str, version: &str) -> String {
    template.replace("{version}", version)
}

/// The `<major>.<minor>` version embedded in a docserver URL, if any.
pub fn version_from_url(url: &str) -> Option<String> {
    static VERSION_RE: OnceLock<Option<Regex>> = OnceLock::new();
    VERSION_RE
        .get_or_init(|| Regex::new(r"/(\d+\.\d+)/").ok())
        .as_ref()?
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Keep results whose path contains any of the comma-separated filters.
///
/// Matching is a case-insensitive substring test against the breadcrumb
/// path, not the inferred module label. Blank filters are ignored; if none
/// remain, every result is kept.
pub fn filter_by_module(results: Vec<SearchResult>, filters: &str) -> Vec<SearchResult> {
    let filters: Vec<String> = filters
        .split(',')
        .map(|f| f.trim().to_lowercase())
        .filter(|f| !f.is_empty())
        .collect();
    if filters.is_empty() {
        return results;
    }

    results
        .into_iter()
        .filter(|result| {
            let path = result.path.to_lowercase();
            filters.iter().any(|filter| path.contains(filter.as_str()))
        })
        .collect()
}

/// Searches and retrieves documentation for one version.
#[derive(Debug, Clone)]
pub struct DocSearcher<B = BrowserManager> {
    browser: B,
    version: String,
    base_url: String,
}

impl DocSearcher<BrowserManager> {
    /// Searcher using the browser settings, version and URL template of `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_browser(
            BrowserManager::new(BrowserOptions::from(config)),
            config.version.clone(),
            &config.base_url_template,
        )
    }
}

impl<B: DocBrowser> DocSearcher<B> {
    pub fn with_browser(browser: B, version: impl Into<String>, base_url_template: &str) -> Self {
        let version = version.into();
        let base_url = base_url_for_version(base_url_template, &version);
        Self {
            browser,
            version,
            base_url,
        }
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    /// Search the documentation for `term`, returning at most `max_results`
    /// results in page order.
    pub async fn search(&self, term: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        debug!(term, version = %self.version, max_results, "starting search");
        let page = self
            .browser
            .capture_search(&self.base_url, term)
            .await
            .map_err(|err| DocError::search(term, err))?;

        let results = reconstruct(&page, term, &self.version, max_results, &self.base_url);
        info!(term, count = results.len(), "search finished");
        Ok(results)
    }

    /// Retrieve the full text of the documentation page at `url`.
    pub async fn retrieve_content(&self, url: &str) -> Result<DocumentContent> {
        Url::parse(url).map_err(|err| DocError::retrieval(url, err.into()))?;

        debug!(url, "retrieving page");
        let page = self
            .browser
            .capture_content(url)
            .await
            .map_err(|err| DocError::retrieval(url, err))?;

        let doc = extract_content(&page, url);
        info!(url, title = %doc.title, chars = doc.content.len(), "retrieval finished");
        Ok(doc)
    }
}

/// Version to use for `url`: the one in the URL, else the configured default.
pub fn version_for_url(url: &str, fallback: Option<&str>) -> String {
    version_from_url(url).unwrap_or_else(|| fallback.unwrap_or(DEFAULT_VERSION).to_string())
}
