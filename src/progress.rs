use std::sync::Arc;

pub type ProgressCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Progress reporter: stderr lines when verbose, silent otherwise.
pub fn reporter(verbose: bool) -> ProgressCallback {
    if verbose {
        Arc::new(|msg: &str| eprintln!("{msg}"))
    } else {
        Arc::new(|_: &str| {})
    }
}
