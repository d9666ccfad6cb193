use std::path::Path;

use comsol_search_lib::{version_for_url, Config, DocError};
use tracing::info;

/// Resolved settings after merging CLI args and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSearchSettings {
    pub version: String,
    pub max_results: usize,
}

/// Merge search flags with the config file, preferring flags when given.
pub fn resolve_search_settings(
    cli_version: Option<String>,
    cli_max_results: Option<usize>,
    config: &Config,
) -> Result<ResolvedSearchSettings, DocError> {
    let version = cli_version
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| config.version.clone());
    if version.is_empty() {
        return Err(DocError::Config("--version must not be empty".to_string()));
    }

    let max_results = cli_max_results.unwrap_or(config.max_results);
    if max_results == 0 {
        return Err(DocError::Config(
            "--max-results must be greater than zero".to_string(),
        ));
    }

    Ok(ResolvedSearchSettings {
        version,
        max_results,
    })
}

/// Documentation version for a retrieve URL, falling back to the config.
pub fn resolve_retrieve_version(url: &str, config: &Config) -> String {
    version_for_url(url, Some(&config.version))
}

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/comsol-search/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, DocError> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "defaults".to_string());
        DocError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        DocError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Log the effective config (visible in verbose mode).
pub fn log_effective_config(config_path: Option<&Path>, config: &Config, version: &str) {
    info!("{}", format_effective_config(config, version, config_path));
}

/// Format effective config as a single-line string.
pub fn format_effective_config(config: &Config, version: &str, config_source: Option<&Path>) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    format!(
        "Effective config [{source}]: version={}, max_results={}, headless={}, node={}, timeouts: nav={}ms, selector={}ms, settle={}ms, process={}ms",
        version,
        config.max_results,
        config.headless,
        config.node_command,
        config.timeouts.navigation.as_millis(),
        config.timeouts.selector.as_millis(),
        config.timeouts.settle.as_millis(),
        config.timeouts.process.as_millis(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn resolve_search_settings_prefers_config_when_flags_absent() {
        let cfg = Config {
            version: "6.2".to_string(),
            max_results: 7,
            ..Config::default()
        };

        let resolved = resolve_search_settings(None, None, &cfg).unwrap();
        assert_eq!(resolved.version, "6.2");
        assert_eq!(resolved.max_results, 7);
    }

    #[test]
    fn resolve_search_settings_prefers_cli_when_flags_present() {
        let resolved =
            resolve_search_settings(Some("6.3".to_string()), Some(50), &Config::default()).unwrap();
        assert_eq!(
            resolved,
            ResolvedSearchSettings {
                version: "6.3".to_string(),
                max_results: 50
            }
        );
    }

    #[test]
    fn resolve_search_settings_rejects_zero_results() {
        let err = resolve_search_settings(None, Some(0), &Config::default()).unwrap_err();
        assert!(matches!(err, DocError::Config(_)));
    }

    #[test]
    fn retrieve_version_comes_from_url_then_config() {
        let cfg = Config {
            version: "6.1".to_string(),
            ..Config::default()
        };
        assert_eq!(
            resolve_retrieve_version("https://doc.comsol.com/6.3/docserver/#!/a.html", &cfg),
            "6.3"
        );
        assert_eq!(resolve_retrieve_version("https://example.com/a.html", &cfg), "6.1");
    }

    #[test]
    fn load_config_reports_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_results = 0").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Invalid config"));
        assert!(msg.contains("max_results"));
    }

    #[test]
    fn load_config_reports_missing_file() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config /definitely/not/here.toml"));
    }

    #[test]
    fn format_effective_config_includes_all_fields() {
        let mut cfg = Config::default();
        cfg.timeouts.settle = Duration::from_millis(1500);
        let summary = format_effective_config(&cfg, "6.3", Some(Path::new("comsol.toml")));

        assert!(summary.contains("version=6.3"));
        assert!(summary.contains("max_results=20"));
        assert!(summary.contains("nav=60000ms"));
        assert!(summary.contains("selector=30000ms"));
        assert!(summary.contains("settle=1500ms"));
        assert!(summary.contains("process=120000ms"));
        assert!(summary.contains("comsol.toml"));
    }
}
