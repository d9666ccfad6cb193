use std::time::Duration;
use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum DocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] ParseError),

    #[error("Navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    #[error("Timed out waiting for selector '{selector}': {message}")]
    SelectorTimeout { selector: String, message: String },

    #[error("Unknown format: {format} (expected one of: {expected})")]
    UnknownFormat {
        format: String,
        expected: &'static str,
    },

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Browser process exceeded deadline of {0:?}")]
    Deadline(Duration),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Error during search for '{term}': {source}")]
    Search {
        term: String,
        #[source]
        source: Box<DocError>,
    },

    #[error("Error retrieving content from {url}: {source}")]
    Retrieval {
        url: String,
        #[source]
        source: Box<DocError>,
    },
}

impl DocError {
    pub fn navigation(url: impl Into<String>, message: impl Into<String>) -> Self {
        DocError::Navigation {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn selector_timeout(selector: impl Into<String>, message: impl Into<String>) -> Self {
        DocError::SelectorTimeout {
            selector: selector.into(),
            message: message.into(),
        }
    }

    pub fn search(term: impl Into<String>, source: DocError) -> Self {
        DocError::Search {
            term: term.into(),
            source: Box::new(source),
        }
    }

    pub fn retrieval(url: impl Into<String>, source: DocError) -> Self {
        DocError::Retrieval {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error, looking through the search/retrieval wrappers.
    pub fn root_cause(&self) -> &DocError {
        match self {
            DocError::Search { source, .. } | DocError::Retrieval { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        let message = self.to_string();
        match self.root_cause() {
            DocError::Io(_) => ErrorPayload::new(
                ErrorCategory::Config,
                message,
                "Check file paths/permissions.",
            ),
            DocError::Serialization(_) => ErrorPayload::new(
                ErrorCategory::Browser,
                message,
                "The browser helper returned unexpected output; run with --verbose for details.",
            ),
            DocError::InvalidUrl(_) => ErrorPayload::new(
                ErrorCategory::Config,
                message,
                "Pass a full documentation URL (e.g., https://doc.comsol.com/6.4/docserver/#!/...).",
            ),
            DocError::Navigation { .. } => ErrorPayload::new(
                ErrorCategory::Network,
                message,
                "Check connectivity/proxy/VPN, or raise timeouts.navigation in the config file.",
            ),
            DocError::SelectorTimeout { .. } => ErrorPayload::new(
                ErrorCategory::Browser,
                message,
                "The page did not render the expected element; raise timeouts.selector or check that the site layout has not changed.",
            ),
            DocError::UnknownFormat { expected, .. } => ErrorPayload::new(
                ErrorCategory::Usage,
                message,
                format!("Use --format with one of: {expected}."),
            ),
            DocError::Deadline(_) => ErrorPayload::new(
                ErrorCategory::Browser,
                message,
                "Raise timeouts.process in the config file or retry when the site responds faster.",
            ),
            DocError::Browser(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("playwright npm package is missing") {
                    ErrorPayload::new(
                        ErrorCategory::Browser,
                        message,
                        "Install Playwright (e.g., `npm install playwright` and `npx playwright install chromium`).",
                    )
                } else if lower.contains("executable doesn't exist")
                    || lower.contains("chromium executable")
                {
                    ErrorPayload::new(
                        ErrorCategory::Browser,
                        message,
                        "Run `npx playwright install chromium` to download the browser.",
                    )
                } else if lower.contains("not found on path") || lower.contains("node command") {
                    ErrorPayload::new(
                        ErrorCategory::Browser,
                        message,
                        "Install Node.js and ensure the node binary is on PATH (or set node_command in the config file).",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Browser,
                        message,
                        "Re-run with --verbose to see the browser helper output.",
                    )
                }
            }
            DocError::Config(_) => ErrorPayload::new(
                ErrorCategory::Config,
                message,
                "Check flags and the config file (version, max_results, base_url_template, timeouts).",
            ),
            DocError::Search { .. } | DocError::Retrieval { .. } => ErrorPayload::new(
                ErrorCategory::Unknown,
                message,
                "Re-run with --verbose; file an issue if persistent.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, DocError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Network,
    Browser,
    Usage,
    Unknown,
}

/// What the CLI shows for an error: the message and, when known, a hint.
#[derive(Debug, Clone)]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_original_cause() {
        let err = DocError::search(
            "heat flux",
            DocError::selector_timeout(".searchInput", "Timeout 30000ms exceeded"),
        );
        assert!(matches!(
            err.root_cause(),
            DocError::SelectorTimeout { selector, .. } if selector == ".searchInput"
        ));
        let rendered = err.to_string();
        assert!(rendered.starts_with("Error during search for 'heat flux'"));
        assert!(rendered.contains(".searchInput"));
    }

    #[test]
    fn payload_category_follows_root_cause() {
        let err = DocError::retrieval(
            "https://doc.comsol.com/6.4/docserver/",
            DocError::navigation("https://doc.comsol.com/6.4/docserver/", "net::ERR_NAME_NOT_RESOLVED"),
        );
        let payload = err.to_payload();
        assert_eq!(payload.category, ErrorCategory::Network);
        assert!(payload.message.contains("ERR_NAME_NOT_RESOLVED"));
    }

    #[test]
    fn unknown_format_payload_lists_supported_formats() {
        let err = DocError::UnknownFormat {
            format: "xml".to_string(),
            expected: "table, json, markdown, plain",
        };
        let payload = err.to_payload();
        assert_eq!(payload.category, ErrorCategory::Usage);
        let remediation = payload.remediation.unwrap_or_default();
        assert!(
            remediation.contains("markdown"),
            "expected supported formats in remediation, got: {remediation}"
        );
    }

    #[test]
    fn browser_payload_includes_playwright_remediation() {
        let err = DocError::Browser(
            "Playwright npm package is missing; install with `npm install playwright`.".to_string(),
        );
        let remediation = err.to_payload().remediation.unwrap_or_default();
        assert!(
            remediation.contains("npm install playwright"),
            "expected remediation to mention npm install playwright, got: {remediation}"
        );
    }

    #[test]
    fn browser_payload_includes_node_install_hint() {
        let err = DocError::Browser(
            "Unable to spawn Playwright helper; 'node' was not found on PATH".to_string(),
        );
        let remediation = err.to_payload().remediation.unwrap_or_default();
        assert!(
            remediation.to_ascii_lowercase().contains("node"),
            "expected node install/path remediation, got: {remediation}"
        );
    }

    #[test]
    fn deadline_payload_mentions_process_timeout() {
        let err = DocError::Deadline(Duration::from_secs(120));
        let remediation = err.to_payload().remediation.unwrap_or_default();
        assert!(remediation.contains("timeouts.process"));
    }
}
