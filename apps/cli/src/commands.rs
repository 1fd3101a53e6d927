//! CLI definition, routing, and tracing setup.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use url::Url;

use readcache_cache::{write_content, write_to_cache};
use readcache_fetcher::Fetcher;
use readcache_shared::{
    CacheConfig, FetchConfig, ReadcacheError, Result, load_config, load_config_from,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// readcache — fetch an article's readable text into the feed reader's cache file.
#[derive(Parser)]
#[command(
    name = "readcache",
    version,
    about = "Fetch a web article's readable text and cache it for the feed reader.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Article URL to fetch (interpretation controlled by --input-mode).
    pub input: String,

    /// How to interpret INPUT. The feed reader integration is ambiguous about
    /// whether it passes a URL or a cache-file identifier; the mode makes the
    /// caller's intent explicit instead of assuming one.
    #[arg(long, value_enum, default_value = "url")]
    pub input_mode: InputMode,

    /// Write to this path instead of the default cache file.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Load configuration from this file instead of ~/.config/readcache/config.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the fetch timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Input interpretation mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum InputMode {
    /// INPUT is an HTTP(S) URL to fetch and extract.
    Url,
    /// INPUT is a feed-reader cache-file identifier (integration contract
    /// not yet settled; rejected explicitly rather than guessed at).
    CacheRef,
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Run the CLI: fetch the article, write its text to the cache file.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    let url = match cli.input_mode {
        InputMode::Url => Url::parse(&cli.input).map_err(|e| {
            ReadcacheError::validation(format!("invalid URL '{}': {e}", cli.input))
        })?,
        InputMode::CacheRef => {
            return Err(ReadcacheError::validation(
                "cache-ref input mode is not supported: the feed-reader \
                 integration contract for cache identifiers is unsettled, \
                 pass a URL with --input-mode=url",
            ));
        }
    };

    let mut fetch_config = FetchConfig::from(&config);
    if let Some(timeout) = cli.timeout {
        fetch_config.timeout_secs = timeout;
    }

    let fetcher = Fetcher::new(&fetch_config)?;
    let article = fetcher.fetch_content(&url).await?;

    // A failed fetch never reaches this point, so the prior cache content
    // stays intact on any fetch or extract error.
    let written = match &cli.out {
        Some(path) => {
            write_content(&article.text, path)?;
            path.clone()
        }
        None => {
            let cache_config = CacheConfig::resolve(&config)?;
            write_to_cache(&article.text, &cache_config)?
        }
    };

    info!(
        url = %article.url,
        path = %written.display(),
        bytes = article.text.len(),
        "article text cached"
    );

    Ok(())
}
