use std::path::PathBuf;
use std::process::ExitCode;

use comsol_search_lib::{
    format_document_content, BrowserManager, BrowserOptions, ContentFormat, DocSearcher,
};

use crate::formatting::{render_error, write_output};
use crate::progress::reporter;
use crate::settings::{load_config, log_effective_config, resolve_retrieve_version};

/// Run the retrieve command.
pub async fn run_retrieve(
    config_path: Option<PathBuf>,
    verbose: bool,
    url: String,
    format: String,
    output: Option<PathBuf>,
) -> ExitCode {
    let format: ContentFormat = match format.parse() {
        Ok(format) => format,
        Err(err) => return render_error(err),
    };
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err),
    };
    let version = resolve_retrieve_version(&url, &config);
    if verbose {
        log_effective_config(config_path.as_deref(), &config, &version);
    }

    let progress = reporter(verbose);
    progress("Retrieving content from URL...");

    let searcher = DocSearcher::with_browser(
        BrowserManager::new(BrowserOptions::from(&config)),
        version,
        &config.base_url_template,
    );
    let doc = match searcher.retrieve_content(&url).await {
        Ok(doc) => doc,
        Err(err) => return render_error(err),
    };
    progress(&format!("Retrieved: {}", doc.title));

    let rendered = format_document_content(&doc, format);
    if let Err(err) = write_output(&rendered, output.as_deref(), "Content") {
        return render_error(err);
    }
    ExitCode::SUCCESS
}
