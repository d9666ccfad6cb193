//! Main-text extraction for a single documentation page.

use tracing::debug;

use crate::types::{ContentPageSnapshot, DocumentContent};

/// Panels whose trimmed text is this short or shorter are treated as chrome.
pub const MIN_PANEL_TEXT_LEN: usize = 50;

const PANEL_SEPARATOR: &str = "\n\n";

/// Build a [`DocumentContent`] from a captured page.
///
/// Content defaults to the whole body text. When content panels carry real
/// text, their texts (blank-line separated) replace it.
pub fn extract_content(page: &ContentPageSnapshot, url: &str) -> DocumentContent {
    let breadcrumb: Vec<String> = page
        .breadcrumb
        .iter()
        .map(|node| node.trimmed_text())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect();

    let panels: Vec<&str> = page
        .panels
        .iter()
        .map(|node| node.trimmed_text())
        .filter(|text| text.chars().count() > MIN_PANEL_TEXT_LEN)
        .collect();

    let content = if panels.is_empty() {
        debug!(
            panel_count = page.panels.len(),
            "no substantial content panels; using body text"
        );
        page.body
            .as_ref()
            .map(|body| body.trimmed_text().to_string())
            .unwrap_or_default()
    } else {
        panels.join(PANEL_SEPARATOR)
    };

    DocumentContent {
        url: url.to_string(),
        title: page.title.clone(),
        content,
        breadcrumb,
    }
}
