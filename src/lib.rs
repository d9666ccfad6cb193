//! COMSOL documentation search library
//!
//! Searches the COMSOL Multiphysics documentation portal through a headless
//! browser, reconstructs structured results from the rendered result list,
//! and extracts the full text of individual documentation pages.
//!
//! # Module Overview
//!
//! - [`browser`] - Headless browser capability (Playwright via Node.js)
//! - [`scrape`] - Result reconstruction, module inference, content extraction
//! - [`searcher`] - Search/retrieve facade and result filtering
//! - [`output`] - Table, JSON, markdown, plain and HTML rendering
//! - [`config`] - Selectors, defaults and configuration file support
//! - [`types`] - Result types and page snapshots
//!
//! # Example
//!
//! ```no_run
//! use comsol_search_lib::{format_search_results, Config, DocSearcher, ResultFormat};
//!
//! # async fn example() -> comsol_search_lib::Result<()> {
//! let searcher = DocSearcher::from_config(&Config::default());
//! let results = searcher.search("phase change materials", 10).await?;
//! println!("{}", format_search_results(&results, ResultFormat::Markdown)?);
//! # Ok(())
//! # }
//! ```

pub mod browser;
pub mod config;
pub mod error;
pub mod output;
pub mod scrape;
pub mod searcher;
pub mod types;

pub use browser::{
    BrowserManager, BrowserOptions, DocBrowser, MOCK_CONTENT_PAGE_ENV, MOCK_SEARCH_PAGE_ENV,
};
pub use config::{Config, Selectors, Timeouts, DEFAULT_MAX_RESULTS, DEFAULT_VERSION};
pub use error::{DocError, ErrorCategory, ErrorPayload, Result};
pub use output::{format_document_content, format_search_results, ContentFormat, ResultFormat};
pub use scrape::{extract_content, infer_module, reconstruct};
pub use searcher::{
    base_url_for_version, filter_by_module, version_for_url, version_from_url, DocSearcher,
};
pub use types::{
    ContentPageSnapshot, DocumentContent, PathContainer, ScrapedNode, SearchPageSnapshot,
    SearchResult,
};
