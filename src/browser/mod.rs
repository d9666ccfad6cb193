//! Browser automation for the documentation portal.
//!
//! This module provides the browser capability the scraper depends on,
//! implemented with Playwright via Node.js.
//!
//! # Module Structure
//!
//! - [`DocBrowser`] - the capability trait (search capture, page capture)
//! - `manager` - [`BrowserManager`], one fresh browser per capture
//! - `playwright` - Playwright scripts, error mapping and availability checks
//! - `dom` - raw script output and conversion into snapshot types
//!
//! # Example
//!
//! ```no_run
//! use comsol_search_lib::{BrowserManager, BrowserOptions, DocBrowser};
//!
//! # async fn example() -> comsol_search_lib::Result<()> {
//! let manager = BrowserManager::new(BrowserOptions::default());
//! let page = manager
//!     .capture_search("https://doc.comsol.com/6.4/docserver/", "heat flux")
//!     .await?;
//! println!("{} result links", page.links.len());
//! # Ok(())
//! # }
//! ```

mod capability;
mod dom;
mod manager;
mod playwright;

pub use capability::DocBrowser;
pub use manager::{BrowserManager, BrowserOptions, MOCK_CONTENT_PAGE_ENV, MOCK_SEARCH_PAGE_ENV};
