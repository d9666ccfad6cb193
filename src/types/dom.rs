//! Node lists returned by the browser capability.
//!
//! These are flat, ordered captures of what a CSS query matched on the
//! rendered page: inner text plus attributes for each node. Nothing here is
//! interpreted yet; see [`crate::scrape`] for that.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One DOM element as seen by `innerText` / `getAttribute`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedNode {
    /// Raw (untrimmed) inner text
    pub text: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
}

impl ScrapedNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }
}

/// A per-result breadcrumb container and the segment nodes nested in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathContainer {
    #[serde(default)]
    pub segments: Vec<ScrapedNode>,
}

impl PathContainer {
    pub fn new(segments: Vec<ScrapedNode>) -> Self {
        Self { segments }
    }
}

/// The three independently queried lists of a rendered search results page.
///
/// The lists are presumed index-aligned (i-th link, i-th path container,
/// i-th snippet describe one result) but nothing guarantees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPageSnapshot {
    #[serde(default)]
    pub links: Vec<ScrapedNode>,
    #[serde(default)]
    pub path_containers: Vec<PathContainer>,
    #[serde(default)]
    pub snippets: Vec<ScrapedNode>,
}

/// A rendered documentation page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPageSnapshot {
    pub title: String,
    #[serde(default)]
    pub breadcrumb: Vec<ScrapedNode>,
    pub body: Option<ScrapedNode>,
    #[serde(default)]
    pub panels: Vec<ScrapedNode>,
}
