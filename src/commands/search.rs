use std::path::PathBuf;
use std::process::ExitCode;

use comsol_search_lib::{
    filter_by_module, format_search_results, BrowserManager, BrowserOptions, DocSearcher,
    ResultFormat,
};

use crate::formatting::{render_error, write_output};
use crate::progress::reporter;
use crate::settings::{load_config, log_effective_config, resolve_search_settings};

/// Run the search command.
#[allow(clippy::too_many_arguments)]
pub async fn run_search(
    config_path: Option<PathBuf>,
    verbose: bool,
    term: String,
    doc_version: Option<String>,
    max_results: Option<usize>,
    module: Option<String>,
    format: String,
    output: Option<PathBuf>,
) -> ExitCode {
    let format: ResultFormat = match format.parse() {
        Ok(format) => format,
        Err(err) => return render_error(err),
    };
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err),
    };
    let settings = match resolve_search_settings(doc_version, max_results, &config) {
        Ok(settings) => settings,
        Err(err) => return render_error(err),
    };
    if verbose {
        log_effective_config(config_path.as_deref(), &config, &settings.version);
    }

    let progress = reporter(verbose);
    progress(&format!(
        "Searching COMSOL {} documentation for '{}'...",
        settings.version, term
    ));

    let searcher = DocSearcher::with_browser(
        BrowserManager::new(BrowserOptions::from(&config)),
        settings.version.clone(),
        &config.base_url_template,
    );
    let mut results = match searcher.search(&term, settings.max_results).await {
        Ok(results) => results,
        Err(err) => return render_error(err),
    };

    match module.as_deref() {
        Some(filter) => {
            let found = results.len();
            results = filter_by_module(results, filter);
            progress(&format!(
                "Found {found} results, filtered to {} by module",
                results.len()
            ));
        }
        None => progress(&format!("Found {} results", results.len())),
    }

    let rendered = match format_search_results(&results, format) {
        Ok(rendered) => rendered,
        Err(err) => return render_error(err),
    };
    if let Err(err) = write_output(&rendered, output.as_deref(), "Results") {
        return render_error(err);
    }
    ExitCode::SUCCESS
}
