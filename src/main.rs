use clap::{Parser, Subcommand};
use gleaner::config::{self, OrganizeConfig, WordfreqConfig};
use gleaner::wordfreq::chart::{ChartRenderer, JsonChart, TerminalChart};
use std::path::PathBuf;
use tracing::{debug, error};

/// Concurrent file-organizing and word-frequency utilities
#[derive(Parser)]
#[command(name = "gleaner")]
#[command(about = "Sort files by extension and chart word frequencies, concurrently", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy files into extension-keyed subdirectories of the output folder
    Organize {
        /// Source folder to read files from
        source: PathBuf,

        /// Output folder to save sorted files
        output: PathBuf,

        /// Maximum number of copies in flight at once
        #[arg(long, default_value_t = config::DEFAULT_MAX_PARALLEL)]
        max_parallel: usize,

        /// Report failed copies at the end instead of failing the run
        #[arg(long)]
        continue_on_error: bool,
    },
    /// Count word frequencies in a document fetched from a URL
    Wordfreq {
        /// URL to fetch the document from (falls back to $GLEANER_URL, then a built-in default)
        #[arg(long)]
        url: Option<String>,

        /// Number of chunks the document is partitioned into
        #[arg(long, default_value_t = config::DEFAULT_CHUNKS)]
        chunks: usize,

        /// Number of top-ranked words to display
        #[arg(long, default_value_t = config::DEFAULT_TOP)]
        top: usize,

        /// Maximum number of chunks mapped concurrently
        #[arg(long, default_value_t = config::DEFAULT_MAX_PARALLEL)]
        max_parallel: usize,

        /// How to render the ranked words
        #[arg(long, value_enum, default_value = "chart")]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Terminal bar chart
    Chart,
    /// JSON array of {word, count} objects
    Json,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("gleaner started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Commands::Organize {
            source,
            output,
            max_parallel,
            continue_on_error,
        } => run_organize(source, output, max_parallel, continue_on_error).await,
        Commands::Wordfreq {
            url,
            chunks,
            top,
            max_parallel,
            format,
        } => run_wordfreq(url, chunks, top, max_parallel, format).await,
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_organize(
    source: PathBuf,
    output: PathBuf,
    max_parallel: usize,
    continue_on_error: bool,
) -> anyhow::Result<()> {
    let config = OrganizeConfig {
        source,
        output,
        max_parallel,
        continue_on_error,
    };

    let summary = gleaner::organize::run(&config).await?;
    if summary.discovered > 0 {
        println!(
            "Copied {} of {} files into {}",
            summary.copied,
            summary.discovered,
            config.output.display()
        );
    }
    Ok(())
}

async fn run_wordfreq(
    url: Option<String>,
    chunks: usize,
    top: usize,
    max_parallel: usize,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let url = url
        .or_else(|| std::env::var("GLEANER_URL").ok())
        .unwrap_or_else(|| config::DEFAULT_URL.to_string());

    let config = WordfreqConfig {
        url,
        chunks,
        top,
        max_parallel,
    };

    let renderer: Box<dyn ChartRenderer> = match format {
        OutputFormat::Chart => Box::new(TerminalChart::default()),
        OutputFormat::Json => Box::new(JsonChart),
    };

    gleaner::wordfreq::run(&config, renderer.as_ref()).await
}
