use std::path::PathBuf;

use async_trait::async_trait;
use comsol_search_lib::{
    filter_by_module, format_search_results, BrowserManager, BrowserOptions, ContentPageSnapshot,
    DocBrowser, DocError, DocSearcher, PathContainer, ResultFormat, ScrapedNode,
    SearchPageSnapshot, MOCK_CONTENT_PAGE_ENV, MOCK_SEARCH_PAGE_ENV,
};

const TEMPLATE: &str = "https://doc.comsol.com/{version}/docserver/";

struct StaticBrowser {
    search: SearchPageSnapshot,
}

#[async_trait]
impl DocBrowser for StaticBrowser {
    async fn capture_search(
        &self,
        _base_url: &str,
        _term: &str,
    ) -> comsol_search_lib::Result<SearchPageSnapshot> {
        Ok(self.search.clone())
    }

    async fn capture_content(&self, url: &str) -> comsol_search_lib::Result<ContentPageSnapshot> {
        Err(DocError::navigation(url, "not available"))
    }
}

fn path(parts: &[&str]) -> PathContainer {
    PathContainer::new(parts.iter().map(|p| ScrapedNode::new(*p)).collect())
}

fn asset(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_assets")
        .join(name)
}

#[tokio::test]
async fn search_pairs_nodes_by_index_and_stops_at_max_results() {
    let page = SearchPageSnapshot {
        links: vec![
            ScrapedNode::new("Lithium-Ion Battery").with_attribute("href", "#!/bat.html"),
            ScrapedNode::new("Turbulence Models"),
            ScrapedNode::new("Ignored"),
        ],
        path_containers: vec![
            path(&["COMSOL Multiphysics", "Battery Design Module", "Theory"]),
            path(&["COMSOL Multiphysics", "CFD Module User's Guide"]),
            path(&["COMSOL Multiphysics", "Plasma Module"]),
        ],
        snippets: vec![
            ScrapedNode::new(" cell model "),
            ScrapedNode::new("x".repeat(500)),
            ScrapedNode::new("never read"),
        ],
    };
    let searcher = DocSearcher::with_browser(StaticBrowser { search: page }, "6.4", TEMPLATE);

    let results = searcher.search("battery", 2).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].module, "Battery Design Module");
    assert_eq!(results[0].path, "COMSOL Multiphysics > Battery Design Module > Theory");
    assert_eq!(results[0].snippet, "cell model");
    assert_eq!(
        results[0].url.as_deref(),
        Some("https://doc.comsol.com/6.4/docserver/#!/bat.html")
    );
    assert_eq!(results[1].module, "CFD Module User's Guide");
    assert!(results[1].url.is_none());
    assert!(results[1].snippet.chars().count() <= 400);
    assert!(results[1].snippet.ends_with("..."));
    assert!(results.iter().all(|r| r.search_term == "battery" && r.version == "6.4"));
}

#[tokio::test]
async fn empty_results_page_yields_empty_list() {
    let searcher = DocSearcher::with_browser(
        StaticBrowser {
            search: SearchPageSnapshot::default(),
        },
        "6.4",
        TEMPLATE,
    );

    let results = searcher.search("zzzz", 20).await.unwrap();
    assert!(results.is_empty());
    assert_eq!(
        format_search_results(&results, ResultFormat::Json).unwrap(),
        "[]"
    );
}

#[tokio::test]
async fn module_filter_applies_after_search() {
    let page = SearchPageSnapshot {
        links: vec![ScrapedNode::new("A"), ScrapedNode::new("B")],
        path_containers: vec![
            path(&["COMSOL Multiphysics", "Battery Design Module"]),
            path(&["COMSOL Multiphysics", "Heat Transfer Module"]),
        ],
        snippets: vec![ScrapedNode::new("a"), ScrapedNode::new("b")],
    };
    let searcher = DocSearcher::with_browser(StaticBrowser { search: page }, "6.4", TEMPLATE);

    let results = searcher.search("battery", 20).await.unwrap();
    let kept = filter_by_module(results, "HEAT");
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].title, "B");
}

#[tokio::test]
async fn browser_manager_reads_mock_captures() {
    std::env::set_var(MOCK_SEARCH_PAGE_ENV, asset("search_page.json"));
    std::env::set_var(MOCK_CONTENT_PAGE_ENV, asset("content_page.json"));

    let searcher = DocSearcher::with_browser(
        BrowserManager::new(BrowserOptions::default()),
        "6.3",
        TEMPLATE,
    );

    let results = searcher.search("battery", 20).await.unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].module, "Battery Design Module User's Guide");
    assert_eq!(
        results[0].snippet,
        "Couple the battery interface to heat transfer to model pack temperature."
    );
    assert_eq!(
        results[1].url.as_deref(),
        Some("https://doc.comsol.com/6.3/docserver/#!/com.comsol.help.heat/heat_ug_solids.html")
    );
    assert_eq!(results[2].module, "Programming Reference Manual");
    assert!(results[2].url.is_none());

    let doc = searcher
        .retrieve_content("https://doc.comsol.com/6.3/docserver/#!/com.comsol.help.heat/heat_ug_solids.html")
        .await
        .unwrap();
    assert_eq!(doc.title, "Heat Transfer in Solids");
    assert_eq!(
        doc.breadcrumb,
        vec![
            "COMSOL Multiphysics".to_string(),
            "Heat Transfer Module User's Guide".to_string()
        ]
    );
    let paragraphs: Vec<&str> = doc.content.split("\n\n").collect();
    assert_eq!(paragraphs.len(), 2);
    assert!(paragraphs[0].starts_with("The Heat Transfer in Solids interface"));
    assert!(!doc.content.contains("short nav panel"));
    assert!(!doc.content.contains("Menu Search"));
}
