use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "comsol-search")]
#[command(
    version,
    about = "Search and retrieve COMSOL Multiphysics documentation using browser automation",
    long_about = "COMSOL documentation search\n\nCommands:\n- search: query the documentation portal and list matching entries.\n- retrieve: fetch the full text of one documentation page.\n- version: show version information.\n\nUse --help on any subcommand for details."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) to set defaults for version/max results/timeouts; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search COMSOL documentation for a given term
    #[command(after_help = "Examples:\n  comsol-search search \"phase change materials\"\n  comsol-search search \"heat transfer\" --version 6.3 --format json\n  comsol-search search \"battery\" --module \"Battery Design,Heat Transfer\"")]
    Search {
        #[arg(help = "Search term or phrase")]
        term: String,

        #[arg(short = 'v', long = "version", help = "COMSOL version (default from config, else 6.4)")]
        doc_version: Option<String>,

        #[arg(short = 'n', long, help = "Maximum number of results to return")]
        max_results: Option<usize>,

        #[arg(
            short,
            long,
            help = "Filter by module (comma-separated, case-insensitive partial match against the result path)"
        )]
        module: Option<String>,

        #[arg(
            short,
            long,
            default_value = "table",
            help = "Output format: table, json, markdown, plain"
        )]
        format: String,

        #[arg(short, long, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Retrieve full content from a COMSOL documentation URL
    Retrieve {
        #[arg(help = "Documentation URL to retrieve")]
        url: String,

        #[arg(
            short,
            long,
            default_value = "markdown",
            help = "Output format: markdown, plain, html"
        )]
        format: String,

        #[arg(short, long, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

pub fn parse() -> Cli {
    Cli::parse()
}
