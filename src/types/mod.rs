//! Core types used throughout the library.
//!
//! - [`SearchResult`] / [`DocumentContent`] - the data model handed to callers
//! - [`ScrapedNode`], [`PathContainer`], [`SearchPageSnapshot`],
//!   [`ContentPageSnapshot`] - what the browser capability returns

mod dom;
mod results;

pub use dom::{ContentPageSnapshot, PathContainer, ScrapedNode, SearchPageSnapshot};
pub use results::{DocumentContent, SearchResult};
