//! Turning captured node lists into structured results.
//!
//! - [`reconstruct`] - ordered [`SearchResult`](crate::SearchResult)s from the
//!   link / path-container / snippet lists of a search page
//! - [`infer_module`] - the ordered module classification rules
//! - [`extract_content`] - title, breadcrumb and main text of a page
//!
//! Nothing in here performs I/O.

mod content;
mod module_rules;
mod reconstruct;

pub use content::{extract_content, MIN_PANEL_TEXT_LEN};
pub use module_rules::{
    infer_module, ModuleRule, API_PATH_INDICATORS, API_SEGMENT_MARKERS, GUIDE_TITLES,
    MODULE_KEYWORDS, MODULE_RULES, ROOT_SEGMENT, UNKNOWN_MODULE,
};
pub use reconstruct::{
    breadcrumb_segments, clean_path, collapse_repeated_segments, reconstruct, resolve_url,
    truncate_snippet, PATH_SEPARATOR, PATH_TAIL_CHARS, MAX_PATH_CHARS, MAX_SNIPPET_CHARS,
};
