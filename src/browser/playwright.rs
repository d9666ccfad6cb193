//! Playwright integration for headless browser automation.
//!
//! This module contains the inline Playwright scripts, error mapping,
//! and availability checks for Node.js and Playwright.

use crate::{DocError, Result};
use std::io;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Search the docserver and capture the result node lists.
///
/// argv: query, baseUrl, navTimeoutMs, selectorTimeoutMs, settleMs, headless, selectorsJson
pub(crate) const SEARCH_SCRIPT: &str = r#"
const [, query, baseUrl, navTimeout, selectorTimeout, settleDelay, headlessFlag, selectorsJson] = process.argv;

async function run() {
  let browser;
  let stage = 'launch';
  let waitingFor = null;
  try {
    const { chromium } = require('playwright');
    const sel = JSON.parse(selectorsJson);
    const navMs = parseInt(navTimeout, 10);
    const selMs = parseInt(selectorTimeout, 10);
    const settleMs = parseInt(settleDelay, 10);

    browser = await chromium.launch({ headless: headlessFlag !== '0' });
    const page = await browser.newPage();

    stage = 'navigation';
    await page.goto(baseUrl, { waitUntil: 'domcontentloaded', timeout: navMs });

    stage = 'selector';
    waitingFor = sel.searchInput;
    const searchBox = await page.waitForSelector(sel.searchInput, { timeout: selMs });
    await searchBox.fill(query);
    await searchBox.press('Enter');

    waitingFor = sel.results;
    await page.waitForSelector(sel.results, { timeout: selMs });
    if (settleMs > 0) {
      await page.waitForTimeout(settleMs);
    }

    stage = 'scrape';
    waitingFor = null;
    const snapshot = await page.evaluate((sel) => {
      const describe = (el) => {
        const attributes = {};
        for (const attr of el.attributes) {
          attributes[attr.name] = attr.value;
        }
        return { text: el.innerText, attributes };
      };
      const all = (root, selector) => Array.from(root.querySelectorAll(selector));
      return {
        links: all(document, sel.link).map(describe),
        pathContainers: all(document, sel.pathContainer).map((container) => ({
          segments: all(container, sel.pathSegment).map(describe)
        })),
        snippets: all(document, sel.snippet).map(describe)
      };
    }, sel);

    await page.close();
    console.log(JSON.stringify({ status: 'ok', page: snapshot }));
  } catch (err) {
    const message = err && err.message ? err.message : String(err);
    console.error(JSON.stringify({ status: 'error', stage, selector: waitingFor, message }));
    process.exitCode = 1;
  } finally {
    if (browser) {
      await browser.close();
    }
  }
}

run();
"#;

/// Open one documentation page and capture its title, breadcrumb, body and panels.
///
/// argv: url, navTimeoutMs, selectorTimeoutMs, headless, selectorsJson
pub(crate) const CONTENT_SCRIPT: &str = r#"
const [, url, navTimeout, selectorTimeout, headlessFlag, selectorsJson] = process.argv;

async function run() {
  let browser;
  let stage = 'launch';
  let waitingFor = null;
  try {
    const { chromium } = require('playwright');
    const sel = JSON.parse(selectorsJson);
    const navMs = parseInt(navTimeout, 10);
    const selMs = parseInt(selectorTimeout, 10);

    browser = await chromium.launch({ headless: headlessFlag !== '0' });
    const page = await browser.newPage();

    stage = 'navigation';
    await page.goto(url, { timeout: navMs });

    stage = 'selector';
    waitingFor = sel.contentPanel;
    await page.waitForSelector(sel.contentPanel, { timeout: selMs });

    stage = 'scrape';
    waitingFor = null;
    const title = await page.title();
    const captured = await page.evaluate((sel) => {
      const describe = (el) => {
        const attributes = {};
        for (const attr of el.attributes) {
          attributes[attr.name] = attr.value;
        }
        return { text: el.innerText, attributes };
      };
      const all = (selector) => Array.from(document.querySelectorAll(selector)).map(describe);
      return {
        breadcrumb: all(sel.pathSegment),
        body: document.body ? describe(document.body) : null,
        panels: all(sel.contentPanel)
      };
    }, sel);

    await page.close();
    console.log(JSON.stringify({ status: 'ok', page: { title, ...captured } }));
  } catch (err) {
    const message = err && err.message ? err.message : String(err);
    console.error(JSON.stringify({ status: 'error', stage, selector: waitingFor, message }));
    process.exitCode = 1;
  } finally {
    if (browser) {
      await browser.close();
    }
  }
}

run();
"#;

/// Timeout for checking node/playwright availability.
pub(crate) const NODE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Script to check if Playwright is installed.
const PLAYWRIGHT_CHECK_SCRIPT: &str = "require('playwright'); process.stdout.write('ok');";

/// Error result printed by the scripts on stderr.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ScriptError {
    pub status: String,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub selector: Option<String>,
    pub message: String,
}

/// Maps a spawn error to an appropriate DocError.
pub(crate) fn map_spawn_error(err: io::Error, command: &str) -> DocError {
    if err.kind() == io::ErrorKind::NotFound {
        DocError::Browser(format!(
            "Unable to spawn Playwright helper; '{}' was not found on PATH",
            command
        ))
    } else {
        DocError::Io(err)
    }
}

/// Maps Playwright stderr output to an appropriate DocError.
///
/// `target` is the URL being loaded, used for navigation errors.
pub(crate) fn map_playwright_error(
    status_text: impl Into<String>,
    stderr: &str,
    target: &str,
) -> DocError {
    let last_line = stderr.lines().rev().find(|line| !line.trim().is_empty());
    if let Some(error) = last_line.and_then(|line| serde_json::from_str::<ScriptError>(line).ok()) {
        return map_script_error(error, target);
    }

    if stderr
        .to_ascii_lowercase()
        .contains("cannot find module 'playwright'")
    {
        return missing_playwright();
    }

    DocError::Browser(format!(
        "Playwright exited with status {}: {}",
        status_text.into(),
        stderr.trim()
    ))
}

/// Maps a structured script error to the navigation / selector / browser variants.
pub(crate) fn map_script_error(error: ScriptError, target: &str) -> DocError {
    if error
        .message
        .to_ascii_lowercase()
        .contains("cannot find module 'playwright'")
    {
        return missing_playwright();
    }

    match error.stage.as_deref() {
        Some("navigation") => DocError::navigation(target, error.message),
        Some("selector") => DocError::selector_timeout(
            error.selector.unwrap_or_else(|| "<unknown>".to_string()),
            error.message,
        ),
        stage => DocError::Browser(format!(
            "Playwright error (status {}, stage {}): {}",
            error.status,
            stage.unwrap_or("unknown"),
            error.message
        )),
    }
}

fn missing_playwright() -> DocError {
    DocError::Browser(
        "Playwright npm package is missing; install with `npm install playwright`.".to_string(),
    )
}

/// Ensures Node.js is available on the system.
pub(crate) async fn ensure_node_available(node_command: &str) -> Result<()> {
    let mut cmd = Command::new(node_command);
    cmd.arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let status = tokio::time::timeout(NODE_CHECK_TIMEOUT, cmd.status())
        .await
        .map_err(|_| {
            DocError::Browser(format!(
                "Timed out checking node availability after {:?}",
                NODE_CHECK_TIMEOUT
            ))
        })?
        .map_err(|err| map_spawn_error(err, node_command))?;

    if !status.success() {
        return Err(DocError::Browser(format!(
            "Node command {:?} is not available (exit {})",
            node_command, status
        )));
    }

    Ok(())
}

/// Ensures Playwright npm package is installed.
pub(crate) async fn ensure_playwright_available(node_command: &str) -> Result<()> {
    let mut cmd = Command::new(node_command);
    cmd.arg("-e")
        .arg(PLAYWRIGHT_CHECK_SCRIPT)
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    let output = tokio::time::timeout(NODE_CHECK_TIMEOUT, cmd.output())
        .await
        .map_err(|_| {
            DocError::Browser(format!(
                "Timed out checking Playwright availability after {:?}",
                NODE_CHECK_TIMEOUT
            ))
        })?
        .map_err(|err| map_spawn_error(err, node_command))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(map_playwright_error(
            format!("{:?}", output.status),
            &stderr,
            "",
        ));
    }

    Ok(())
}
