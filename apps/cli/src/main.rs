//! readcache CLI — fetches an article's readable text into the feed
//! reader's cache file.
//!
//! Error kinds map to distinct exit codes so the feed reader can script
//! against failures: 2 config/usage, 3 fetch, 4 extract, 5 cache write.

mod commands;

use std::process::ExitCode;

use clap::Parser;

use commands::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        eprintln!("failed to install panic reporting: {e}");
    }

    let cli = Cli::parse();
    commands::init_tracing(&cli);

    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
