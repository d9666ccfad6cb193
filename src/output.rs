//! Rendering of search results and document content.
//!
//! Pure string formatting: no I/O, no decisions beyond layout. Format names
//! are parsed up front so an unknown name fails before any browser work.

use std::fmt::Write as FmtWrite;
use std::str::FromStr;

use crate::types::{DocumentContent, SearchResult};
use crate::{DocError, Result};

const RESULTS_HEADING: &str = "COMSOL Documentation Search Results";
const TABLE_SNIPPET_CHARS: usize = 100;
const RULE_WIDTH: usize = 70;

/// Rendering for a list of search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Plain,
}

impl ResultFormat {
    pub const NAMES: &'static str = "table, json, markdown, plain";
}

impl FromStr for ResultFormat {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "plain" | "text" => Ok(Self::Plain),
            _ => Err(DocError::UnknownFormat {
                format: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

/// Rendering for a single retrieved page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFormat {
    #[default]
    Markdown,
    Plain,
    Html,
}

impl ContentFormat {
    pub const NAMES: &'static str = "markdown, plain, html";
}

impl FromStr for ContentFormat {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "plain" | "text" => Ok(Self::Plain),
            "html" => Ok(Self::Html),
            _ => Err(DocError::UnknownFormat {
                format: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

/// Render `results` in list order.
pub fn format_search_results(results: &[SearchResult], format: ResultFormat) -> Result<String> {
    match format {
        ResultFormat::Table => Ok(format_table(results)),
        ResultFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        ResultFormat::Markdown => Ok(format_markdown(results)),
        ResultFormat::Plain => Ok(format_plain(results)),
    }
}

pub fn format_document_content(doc: &DocumentContent, format: ContentFormat) -> String {
    match format {
        ContentFormat::Markdown => format_doc_markdown(doc),
        ContentFormat::Plain => format_doc_plain(doc),
        ContentFormat::Html => format_doc_html(doc),
    }
}

fn table_snippet(snippet: &str) -> String {
    if snippet.chars().count() > TABLE_SNIPPET_CHARS {
        let head: String = snippet.chars().take(TABLE_SNIPPET_CHARS).collect();
        format!("{head}...")
    } else {
        snippet.to_string()
    }
}

/// Cell text on a single line so columns stay aligned.
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn format_table(results: &[SearchResult]) -> String {
    let headers = ["Module", "Title", "Path", "Snippet"];
    let rows: Vec<[String; 4]> = results
        .iter()
        .map(|r| {
            [
                one_line(&r.module),
                one_line(&r.title),
                one_line(&r.path),
                one_line(&table_snippet(&r.snippet)),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_row = |cells: [&str; 4]| -> String {
        let mut line = String::new();
        for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
            if i > 0 {
                line.push_str(" | ");
            }
            let pad = width.saturating_sub(cell.chars().count());
            line.push_str(cell);
            line.extend(std::iter::repeat(' ').take(pad));
        }
        line.trim_end().to_string()
    };

    let mut buf = String::new();
    writeln!(buf, "{RESULTS_HEADING} ({} found)", results.len()).ok();
    writeln!(buf).ok();
    writeln!(buf, "{}", render_row(headers)).ok();
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(buf, "{}", separator.join("-+-")).ok();
    for row in &rows {
        let [module, title, path, snippet] = row;
        writeln!(
            buf,
            "{}",
            render_row([module.as_str(), title.as_str(), path.as_str(), snippet.as_str()])
        )
        .ok();
    }
    buf
}

fn format_markdown(results: &[SearchResult]) -> String {
    let mut lines = vec![
        format!("# {RESULTS_HEADING}\n"),
        format!("**Found {} results**\n", results.len()),
    ];

    let mut current_module: Option<&str> = None;
    for (i, result) in results.iter().enumerate() {
        if current_module != Some(result.module.as_str()) {
            current_module = Some(result.module.as_str());
            lines.push(format!("\n## {}\n", result.module));
        }
        lines.push(format!("### {}. {}\n", i + 1, result.title));
        lines.push(format!("**Path:** {}\n", result.path));
        lines.push(format!("**Snippet:** {}\n", result.snippet));
    }

    lines.join("\n")
}

fn format_plain(results: &[SearchResult]) -> String {
    let mut lines = vec![
        format!("{RESULTS_HEADING} ({} found)\n", results.len()),
        format!("{}\n", "=".repeat(RULE_WIDTH)),
    ];

    let mut current_module: Option<&str> = None;
    for (i, result) in results.iter().enumerate() {
        if current_module != Some(result.module.as_str()) {
            current_module = Some(result.module.as_str());
            lines.push(format!("\n[{}]", result.module));
        }
        lines.push(format!("{}. {}", i + 1, result.title));
        lines.push(format!("   Path: {}", result.path));
        lines.push(format!("   Snippet: {}", result.snippet));
        lines.push(String::new());
    }

    lines.join("\n")
}

fn format_doc_markdown(doc: &DocumentContent) -> String {
    let mut lines = vec![format!("# {}\n", doc.title)];
    if !doc.breadcrumb.is_empty() {
        lines.push(format!("**Location:** {}\n", doc.location()));
    }
    lines.push(format!("**URL:** {}\n", doc.url));
    lines.push("---\n".to_string());
    lines.push(doc.content.clone());
    lines.join("\n")
}

fn format_doc_plain(doc: &DocumentContent) -> String {
    let mut lines = vec![
        doc.title.clone(),
        "=".repeat(doc.title.chars().count()),
        String::new(),
    ];
    if !doc.breadcrumb.is_empty() {
        lines.push(format!("Location: {}", doc.location()));
    }
    lines.push(format!("URL: {}", doc.url));
    lines.push("-".repeat(RULE_WIDTH));
    lines.push(String::new());
    lines.push(doc.content.clone());
    lines.join("\n")
}

fn format_doc_html(doc: &DocumentContent) -> String {
    let title = html_escape::encode_text(&doc.title);
    let location = html_escape::encode_text(&doc.location()).into_owned();
    let href = html_escape::encode_double_quoted_attribute(&doc.url);
    let url_text = html_escape::encode_text(&doc.url);
    let content = html_escape::encode_text(&doc.content);

    let mut buf = String::new();
    writeln!(buf, "<!DOCTYPE html>").ok();
    writeln!(buf, "<html>").ok();
    writeln!(buf, "<head>").ok();
    writeln!(buf, "    <meta charset=\"UTF-8\">").ok();
    writeln!(buf, "    <title>{title}</title>").ok();
    writeln!(buf, "    <style>").ok();
    writeln!(
        buf,
        "        body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }}"
    )
    .ok();
    writeln!(buf, "        .breadcrumb {{ color: #666; margin-bottom: 20px; }}").ok();
    writeln!(buf, "        .content {{ line-height: 1.6; }}").ok();
    writeln!(buf, "    </style>").ok();
    writeln!(buf, "</head>").ok();
    writeln!(buf, "<body>").ok();
    writeln!(buf, "    <h1>{title}</h1>").ok();
    writeln!(buf, "    <div class=\"breadcrumb\">Location: {location}</div>").ok();
    writeln!(buf, "    <p><a href=\"{href}\">{url_text}</a></p>").ok();
    writeln!(buf, "    <hr>").ok();
    writeln!(buf, "    <div class=\"content\">").ok();
    writeln!(buf, "        <pre>{content}</pre>").ok();
    writeln!(buf, "    </div>").ok();
    writeln!(buf, "</body>").ok();
    write!(buf, "</html>").ok();
    buf
}
