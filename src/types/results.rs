//! Structured results produced by the scraper.

use serde::{Deserialize, Serialize};

/// A single search hit from the documentation portal.
///
/// Built once per scraped result triplet and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Inferred product-area label (e.g. "Heat Transfer Module")
    pub module: String,
    /// Title of the documentation entry
    pub title: String,
    /// Breadcrumb segments joined by " > "
    pub path: String,
    /// Text preview of the hit
    pub snippet: String,
    /// The query that produced this result
    pub search_term: String,
    /// Documentation version that was searched (e.g. "6.4")
    pub version: String,
    /// Direct link to the page, when the result link exposed an href
    pub url: Option<String>,
}

/// Full text retrieved from one documentation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContent {
    pub url: String,
    pub title: String,
    /// Page text; multiple content panels are separated by a blank line.
    pub content: String,
    /// Location of the page, outermost segment first.
    pub breadcrumb: Vec<String>,
}

impl DocumentContent {
    pub fn location(&self) -> String {
        self.breadcrumb.join(" > ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_result_serializes_with_snake_case_and_null_url() {
        let result = SearchResult {
            module: "CFD Module".into(),
            title: "Turbulence".into(),
            path: "COMSOL Multiphysics > CFD Module".into(),
            snippet: "k-epsilon".into(),
            search_term: "turbulent flow".into(),
            version: "6.4".into(),
            url: None,
        };

        let json = serde_json::to_string(&result).expect("serialize result");
        assert!(json.contains("\"search_term\":\"turbulent flow\""));
        assert!(json.contains("\"url\":null"));
    }

    #[test]
    fn location_joins_breadcrumb() {
        let doc = DocumentContent {
            url: "https://doc.comsol.com/6.4/docserver/#!/x.html".into(),
            title: "Heat Flux".into(),
            content: String::new(),
            breadcrumb: vec!["COMSOL Multiphysics".into(), "Heat Transfer Module".into()],
        };
        assert_eq!(doc.location(), "COMSOL Multiphysics > Heat Transfer Module");
    }
}
