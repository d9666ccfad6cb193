//! Rebuilding ordered search results from flat node lists.

use tracing::{debug, warn};

use super::module_rules::infer_module;
use crate::types::{PathContainer, ScrapedNode, SearchPageSnapshot, SearchResult};

pub const PATH_SEPARATOR: &str = " > ";

/// Longest path kept as-is; longer ones keep only their tail.
pub const MAX_PATH_CHARS: usize = 500;

/// Characters of the tail kept when a path is shortened.
pub const PATH_TAIL_CHARS: usize = 450;

/// Upper bound on snippet length, ellipsis included.
pub const MAX_SNIPPET_CHARS: usize = 400;

const ELLIPSIS: &str = "...";

/// Reconstruct up to `max_results` results from a captured search page.
///
/// Entry `i` pairs the i-th link with the i-th path container and the i-th
/// snippet. The lists are not checked against each other: if the page skips
/// a container for some result, later results pair with their neighbours'
/// data. Missing trailing entries produce an empty path / snippet.
pub fn reconstruct(
    page: &SearchPageSnapshot,
    search_term: &str,
    version: &str,
    max_results: usize,
    base_url: &str,
) -> Vec<SearchResult> {
    if page.links.len() != page.path_containers.len() || page.links.len() != page.snippets.len() {
        warn!(
            links = page.links.len(),
            paths = page.path_containers.len(),
            snippets = page.snippets.len(),
            "search result node lists differ in length; pairing by index anyway"
        );
    }

    let results: Vec<SearchResult> = page
        .links
        .iter()
        .take(max_results)
        .enumerate()
        .map(|(i, link)| {
            let segments = page
                .path_containers
                .get(i)
                .map(breadcrumb_segments)
                .unwrap_or_default();

            SearchResult {
                module: infer_module(&segments),
                title: link.trimmed_text().to_string(),
                path: clean_path(&segments),
                snippet: page
                    .snippets
                    .get(i)
                    .map(|node| truncate_snippet(node.trimmed_text()))
                    .unwrap_or_default(),
                search_term: search_term.to_string(),
                version: version.to_string(),
                url: resolve_url(link, base_url),
            }
        })
        .collect();

    debug!(
        available = page.links.len(),
        kept = results.len(),
        "reconstructed search results"
    );
    results
}

/// Trimmed segment texts of one path container.
///
/// Empty segments are dropped, as are segments that already contain a `>`
/// (an already-joined breadcrumb picked up by the selector).
pub fn breadcrumb_segments(container: &PathContainer) -> Vec<String> {
    container
        .segments
        .iter()
        .filter(|node| !node.text.contains('>'))
        .map(|node| node.trimmed_text())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join segments, drop consecutive repeats, and keep the tail of overlong paths.
pub fn clean_path(segments: &[String]) -> String {
    let joined = segments.join(PATH_SEPARATOR);
    let path = collapse_repeated_segments(&joined);

    let len = path.chars().count();
    if len > MAX_PATH_CHARS {
        let tail: String = path.chars().skip(len - PATH_TAIL_CHARS).collect();
        format!("{ELLIPSIS}{tail}")
    } else {
        path
    }
}

/// Collapse runs of identical consecutive " > "-separated segments.
pub fn collapse_repeated_segments(path: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for segment in path.split(PATH_SEPARATOR) {
        if kept.last() != Some(&segment) {
            kept.push(segment);
        }
    }
    kept.join(PATH_SEPARATOR)
}

/// Keep the head of an overlong snippet, ending it with an ellipsis.
pub fn truncate_snippet(snippet: &str) -> String {
    if snippet.chars().count() > MAX_SNIPPET_CHARS {
        let head: String = snippet
            .chars()
            .take(MAX_SNIPPET_CHARS - ELLIPSIS.len())
            .collect();
        format!("{head}{ELLIPSIS}")
    } else {
        snippet.to_string()
    }
}

/// Absolute URL of a result link: `base_url` followed by the raw href.
///
/// Plain concatenation, not URL joining; the docserver hrefs are fragments
/// relative to the docserver root.
pub fn resolve_url(link: &ScrapedNode, base_url: &str) -> Option<String> {
    link.attribute("href")
        .filter(|href| !href.is_empty())
        .map(|href| format!("{base_url}{href}"))
}
