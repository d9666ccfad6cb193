//! Configuration constants and the optional TOML config file.
//!
//! Built-in defaults mirror the live documentation site. A config file can
//! override any of them; CLI flags override the config file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{DocError, Result};

pub const SEARCH_INPUT_SELECTOR: &str = ".searchInput";
pub const SEARCH_RESULTS_SELECTOR: &str = ".searchResults .v-verticallayout";
pub const SEARCH_RESULTS_LINK_SELECTOR: &str = ".searchResultsLink";
pub const SEARCH_RESULTS_PATH_CONTAINER_SELECTOR: &str = ".searchResultsPath";
pub const SEARCH_RESULTS_PATH_SELECTOR: &str = ".searchResultsPathLink";
pub const SEARCH_HIT_SELECTOR: &str = ".searchHit";
pub const CONTENT_PANEL_SELECTOR: &str = ".v-panel-content";

/// Timeout for `goto` on the docserver.
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Timeout for each `waitForSelector` (search box, results panel, content panel).
pub const DEFAULT_SELECTOR_TIMEOUT: Duration = Duration::from_secs(30);

/// Extra fixed delay after the results panel appears. Zero disables it.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::ZERO;

/// Deadline for the whole browser helper process.
pub const DEFAULT_PROCESS_TIMEOUT: Duration = Duration::from_secs(120);

pub const DEFAULT_VERSION: &str = "6.4";
pub const DEFAULT_MAX_RESULTS: usize = 20;
pub const BASE_URL_TEMPLATE: &str = "https://doc.comsol.com/{version}/docserver/";

const CONFIG_DIR_NAME: &str = "comsol-search";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub version: String,
    pub max_results: usize,
    pub base_url_template: String,
    pub headless: bool,
    pub node_command: String,
    pub timeouts: Timeouts,
    pub selectors: Selectors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timeouts {
    #[serde(with = "humantime_serde")]
    pub navigation: Duration,
    #[serde(with = "humantime_serde")]
    pub selector: Duration,
    #[serde(with = "humantime_serde")]
    pub settle: Duration,
    #[serde(with = "humantime_serde")]
    pub process: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            navigation: DEFAULT_NAVIGATION_TIMEOUT,
            selector: DEFAULT_SELECTOR_TIMEOUT,
            settle: DEFAULT_SETTLE_DELAY,
            process: DEFAULT_PROCESS_TIMEOUT,
        }
    }
}

/// CSS selectors handed to the browser helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Selectors {
    pub search_input: String,
    pub results: String,
    pub link: String,
    pub path_container: String,
    pub path_segment: String,
    pub snippet: String,
    pub content_panel: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            search_input: SEARCH_INPUT_SELECTOR.to_string(),
            results: SEARCH_RESULTS_SELECTOR.to_string(),
            link: SEARCH_RESULTS_LINK_SELECTOR.to_string(),
            path_container: SEARCH_RESULTS_PATH_CONTAINER_SELECTOR.to_string(),
            path_segment: SEARCH_RESULTS_PATH_SELECTOR.to_string(),
            snippet: SEARCH_HIT_SELECTOR.to_string(),
            content_panel: CONTENT_PANEL_SELECTOR.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            base_url_template: BASE_URL_TEMPLATE.to_string(),
            headless: true,
            node_command: "node".to_string(),
            timeouts: Timeouts::default(),
            selectors: Selectors::default(),
        }
    }
}

impl Config {
    /// `~/.config/comsol-search/config.toml` (platform config dir), if one can be determined.
    pub fn central_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config. Priority: explicit path > central config file > defaults.
    ///
    /// An explicit path must exist; a missing central file silently yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::central_config_path() {
            Some(central) if central.is_file() => Self::from_file(&central),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| DocError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(DocError::Config("version must not be empty".to_string()));
        }
        if self.max_results == 0 {
            return Err(DocError::Config(
                "max_results must be greater than zero".to_string(),
            ));
        }
        if !self.base_url_template.contains("{version}") {
            return Err(DocError::Config(format!(
                "base_url_template must contain a {{version}} placeholder, got {:?}",
                self.base_url_template
            )));
        }
        if self.node_command.trim().is_empty() {
            return Err(DocError::Config("node_command must not be empty".to_string()));
        }
        for (name, value) in [
            ("navigation", self.timeouts.navigation),
            ("selector", self.timeouts.selector),
            ("process", self.timeouts.process),
        ] {
            if value.is_zero() {
                return Err(DocError::Config(format!(
                    "timeouts.{name} must be greater than zero"
                )));
            }
        }
        Ok(())
    }
}
