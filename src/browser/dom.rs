//! Raw script output and conversion into the capability snapshot types.

use crate::types::{ContentPageSnapshot, PathContainer, ScrapedNode, SearchPageSnapshot};
use std::collections::HashMap;

/// `{ "status": "ok", "page": ... }` as printed by the scripts on stdout.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ScriptOutput<T> {
    pub status: String,
    pub page: Option<T>,
    pub message: Option<String>,
}

/// Raw node as produced by the `describe` helper in the scripts.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct RawNode {
    /// `innerText` can be null for detached or non-rendered elements.
    pub text: Option<String>,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct RawPathContainer {
    #[serde(default)]
    pub segments: Vec<RawNode>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSearchPage {
    #[serde(default)]
    pub links: Vec<RawNode>,
    #[serde(default)]
    pub path_containers: Vec<RawPathContainer>,
    #[serde(default)]
    pub snippets: Vec<RawNode>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct RawContentPage {
    pub title: Option<String>,
    #[serde(default)]
    pub breadcrumb: Vec<RawNode>,
    pub body: Option<RawNode>,
    #[serde(default)]
    pub panels: Vec<RawNode>,
}

fn convert_node(raw: RawNode) -> ScrapedNode {
    ScrapedNode {
        text: raw.text.unwrap_or_default(),
        attributes: raw.attributes,
    }
}

fn convert_nodes(raw: Vec<RawNode>) -> Vec<ScrapedNode> {
    raw.into_iter().map(convert_node).collect()
}

pub(crate) fn convert_search_page(raw: RawSearchPage) -> SearchPageSnapshot {
    SearchPageSnapshot {
        links: convert_nodes(raw.links),
        path_containers: raw
            .path_containers
            .into_iter()
            .map(|container| PathContainer::new(convert_nodes(container.segments)))
            .collect(),
        snippets: convert_nodes(raw.snippets),
    }
}

pub(crate) fn convert_content_page(raw: RawContentPage) -> ContentPageSnapshot {
    ContentPageSnapshot {
        title: raw.title.unwrap_or_default(),
        breadcrumb: convert_nodes(raw.breadcrumb),
        body: raw.body.map(convert_node),
        panels: convert_nodes(raw.panels),
    }
}
