//! Browser manager for coordinating headless browser sessions.
//!
//! Every capture launches a fresh Chromium through a short-lived Node.js
//! helper and tears it down again, so a failed run never leaves state
//! behind for the next one.

use crate::config::{Config, Selectors};
use crate::types::{ContentPageSnapshot, SearchPageSnapshot};
use crate::{DocError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::capability::DocBrowser;
use super::dom::{
    convert_content_page, convert_search_page, RawContentPage, RawSearchPage, ScriptOutput,
};
use super::playwright::{
    ensure_node_available, ensure_playwright_available, map_playwright_error, map_spawn_error,
    CONTENT_SCRIPT, SEARCH_SCRIPT,
};

/// Env var naming a JSON file used instead of a live search capture.
pub const MOCK_SEARCH_PAGE_ENV: &str = "COMSOL_SEARCH_MOCK_SEARCH_PAGE";

/// Env var naming a JSON file used instead of a live content capture.
pub const MOCK_CONTENT_PAGE_ENV: &str = "COMSOL_SEARCH_MOCK_CONTENT_PAGE";

/// Configuration options for browser sessions.
#[derive(Debug, Clone)]
pub struct BrowserOptions {
    /// The Node.js command to use (default: "node").
    pub node_command: String,
    /// Whether to run in headless mode.
    pub headless: bool,
    /// Timeout for page navigation.
    pub navigation_timeout: Duration,
    /// Timeout for each wait on a selector.
    pub selector_timeout: Duration,
    /// Fixed delay after the results panel appears.
    pub settle_delay: Duration,
    /// Deadline for the whole helper process; it is killed when exceeded.
    pub process_timeout: Duration,
    pub selectors: Selectors,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for BrowserOptions {
    fn from(config: &Config) -> Self {
        Self {
            node_command: config.node_command.clone(),
            headless: config.headless,
            navigation_timeout: config.timeouts.navigation,
            selector_timeout: config.timeouts.selector,
            settle_delay: config.timeouts.settle,
            process_timeout: config.timeouts.process,
            selectors: config.selectors.clone(),
        }
    }
}

/// Launches one Playwright helper process per capture.
#[derive(Debug, Clone)]
pub struct BrowserManager {
    options: BrowserOptions,
}

impl BrowserManager {
    /// Creates a new BrowserManager with the given options.
    pub fn new(options: BrowserOptions) -> Self {
        Self { options }
    }

    fn selectors_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.options.selectors)?)
    }

    /// `node -e <script> -- <args>`; the `--` keeps dash-prefixed search
    /// terms from being parsed as Node options.
    fn helper_command(&self, script: &str, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.options.node_command);
        cmd.arg("-e")
            .arg(script)
            .arg("--")
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }

    async fn run_script<T: DeserializeOwned + Send>(
        &self,
        script: &str,
        args: Vec<String>,
        target: &str,
    ) -> Result<T> {
        ensure_node_available(&self.options.node_command).await?;
        ensure_playwright_available(&self.options.node_command).await?;

        let mut cmd = self.helper_command(script, &args);

        debug!(target_url = target, "launching Playwright helper");
        let start = Instant::now();
        let mut child = cmd
            .spawn()
            .map_err(|err| map_spawn_error(err, &self.options.node_command))?;

        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();

        let stdout_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            if let Some(mut out) = stdout_pipe {
                let _ = out.read_to_end(&mut buf).await;
            }
            buf
        });

        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            if let Some(mut err) = stderr_pipe {
                let _ = err.read_to_end(&mut buf).await;
            }
            buf
        });

        let status = match timeout(self.options.process_timeout, child.wait()).await {
            Ok(Ok(status)) => status,
            Ok(Err(err)) => return Err(DocError::Io(err)),
            Err(_) => {
                let _ = child.kill().await;
                let _ = child.wait().await;
                warn!(
                    target_url = target,
                    deadline = ?self.options.process_timeout,
                    "Playwright helper killed after exceeding its deadline"
                );
                return Err(DocError::Deadline(self.options.process_timeout));
            }
        };

        let stdout = stdout_task.await.unwrap_or_else(|_| Vec::new());
        let stderr = stderr_task.await.unwrap_or_else(|_| Vec::new());
        debug!(
            target_url = target,
            elapsed_ms = start.elapsed().as_millis() as u64,
            %status,
            "Playwright helper finished"
        );

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr);
            return Err(map_playwright_error(status.to_string(), &stderr, target));
        }

        parse_script_output(&String::from_utf8_lossy(&stdout))
    }
}

/// Parse the helper's stdout, rejecting non-ok payloads.
fn parse_script_output<T: DeserializeOwned>(stdout: &str) -> Result<T> {
    let output: ScriptOutput<T> = serde_json::from_str(stdout.trim()).map_err(|e| {
        DocError::Browser(format!(
            "Failed to parse Playwright output: {} - raw: {}",
            e,
            stdout.trim()
        ))
    })?;

    if output.status != "ok" {
        let detail = output
            .message
            .as_deref()
            .unwrap_or("no additional details");
        return Err(DocError::Browser(format!(
            "Playwright returned non-ok status {}: {}",
            output.status, detail
        )));
    }

    output.page.ok_or_else(|| {
        DocError::Browser("Playwright returned ok status but no page data".to_string())
    })
}

/// Path named by a mock env var, if set to something non-blank.
fn mock_page_path(env_key: &str) -> Option<PathBuf> {
    std::env::var(env_key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

fn read_mock_page<T: DeserializeOwned>(path: &Path) -> Result<T> {
    info!(path = %path.display(), "using mock page capture");
    let raw = std::fs::read_to_string(path)?;
    parse_script_output(&raw)
}

#[async_trait]
impl DocBrowser for BrowserManager {
    async fn capture_search(&self, base_url: &str, term: &str) -> Result<SearchPageSnapshot> {
        if let Some(path) = mock_page_path(MOCK_SEARCH_PAGE_ENV) {
            let raw: RawSearchPage = read_mock_page(&path)?;
            return Ok(convert_search_page(raw));
        }

        let args = vec![
            term.to_string(),
            base_url.to_string(),
            self.options.navigation_timeout.as_millis().to_string(),
            self.options.selector_timeout.as_millis().to_string(),
            self.options.settle_delay.as_millis().to_string(),
            if self.options.headless { "1" } else { "0" }.to_string(),
            self.selectors_json()?,
        ];
        let raw: RawSearchPage = self.run_script(SEARCH_SCRIPT, args, base_url).await?;
        Ok(convert_search_page(raw))
    }

    async fn capture_content(&self, url: &str) -> Result<ContentPageSnapshot> {
        if let Some(path) = mock_page_path(MOCK_CONTENT_PAGE_ENV) {
            let raw: RawContentPage = read_mock_page(&path)?;
            return Ok(convert_content_page(raw));
        }

        let args = vec![
            url.to_string(),
            self.options.navigation_timeout.as_millis().to_string(),
            self.options.selector_timeout.as_millis().to_string(),
            if self.options.headless { "1" } else { "0" }.to_string(),
            self.selectors_json()?,
        ];
        let raw: RawContentPage = self.run_script(CONTENT_SCRIPT, args, url).await?;
        Ok(convert_content_page(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_options_default_values() {
        let opts = BrowserOptions::default();
        assert_eq!(opts.node_command, "node");
        assert!(opts.headless);
        assert_eq!(opts.navigation_timeout, Duration::from_secs(60));
        assert_eq!(opts.selector_timeout, Duration::from_secs(30));
        assert!(opts.settle_delay.is_zero());
        assert_eq!(opts.process_timeout, Duration::from_secs(120));
        assert_eq!(opts.selectors, Selectors::default());
    }

    #[test]
    fn browser_options_follow_config() {
        let mut config = Config {
            node_command: "nodejs".to_string(),
            headless: false,
            ..Config::default()
        };
        config.timeouts.process = Duration::from_secs(5);

        let opts = BrowserOptions::from(&config);
        assert_eq!(opts.node_command, "nodejs");
        assert!(!opts.headless);
        assert_eq!(opts.process_timeout, Duration::from_secs(5));
    }

    #[test]
    fn helper_args_follow_double_dash() {
        let manager = BrowserManager::new(BrowserOptions::default());
        let args = vec!["-k epsilon".to_string(), "--inspect".to_string()];
        let cmd = manager.helper_command("console.log(process.argv[1])", &args);

        let argv: Vec<String> = cmd
            .as_std()
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            argv,
            ["-e", "console.log(process.argv[1])", "--", "-k epsilon", "--inspect"]
        );
        assert_eq!(cmd.as_std().get_program(), "node");
    }

    #[tokio::test]
    async fn dash_prefixed_term_reaches_script() {
        // needs a real node; skipped where none is installed
        let node_ok = std::process::Command::new("node")
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false);
        if !node_ok {
            return;
        }

        let manager = BrowserManager::new(BrowserOptions::default());
        let script = "const [, term] = process.argv; console.log(JSON.stringify({ status: 'ok', page: { term } }));";
        let mut child = manager
            .helper_command(script, &["-k epsilon".to_string()])
            .spawn()
            .unwrap();
        let mut stdout = String::new();
        child
            .stdout
            .take()
            .unwrap()
            .read_to_string(&mut stdout)
            .await
            .unwrap();
        assert!(child.wait().await.unwrap().success());

        #[derive(serde::Deserialize)]
        struct Echo {
            term: String,
        }
        let echo: Echo = parse_script_output(&stdout).unwrap();
        assert_eq!(echo.term, "-k epsilon");
    }

    #[test]
    fn selectors_are_passed_as_camel_case_json() {
        let manager = BrowserManager::new(BrowserOptions::default());
        let json = manager.selectors_json().unwrap();
        assert!(json.contains("\"searchInput\":\".searchInput\""));
        assert!(json.contains("\"pathContainer\":\".searchResultsPath\""));
        assert!(json.contains("\"contentPanel\":\".v-panel-content\""));
    }

    #[test]
    fn parse_script_output_rejects_non_ok_and_garbage() {
        let err = parse_script_output::<RawSearchPage>(r#"{"status":"error","message":"boom"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("boom"));

        let err = parse_script_output::<RawSearchPage>("not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse Playwright output"));

        let err = parse_script_output::<RawSearchPage>(r#"{"status":"ok"}"#).unwrap_err();
        assert!(err.to_string().contains("no page data"));
    }

    #[tokio::test]
    async fn capture_fails_for_missing_node_binary() {
        let manager = BrowserManager::new(BrowserOptions {
            node_command: "definitely-not-a-binary".to_string(),
            ..BrowserOptions::default()
        });

        let result = manager
            .run_script::<RawSearchPage>(SEARCH_SCRIPT, Vec::new(), "https://example.com")
            .await;
        assert!(matches!(result, Err(DocError::Browser(_))));
    }
}
