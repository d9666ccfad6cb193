mod cli;
mod commands;
mod formatting;
mod progress;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_retrieve, run_search};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run() -> ExitCode {
    let args = cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Search {
            term,
            doc_version,
            max_results,
            module,
            format,
            output,
        } => {
            run_search(
                args.config,
                args.verbose,
                term,
                doc_version,
                max_results,
                module,
                format,
                output,
            )
            .await
        }
        Commands::Retrieve {
            url,
            format,
            output,
        } => run_retrieve(args.config, args.verbose, url, format, output).await,
        Commands::Version => {
            println!("comsol-search version {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}
