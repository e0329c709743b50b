//! Sentinel Console Library
//!
//! Command-line handling and startup for the `sentinel` binary. The console
//! itself lives in the workspace crates.

pub mod cli;

pub use cli::Args;

use sentinel_core::prelude::*;

/// Main application entry point
///
/// Installs error reporting and file logging, resolves settings and
/// endpoints from `args`, then hands the terminal to the TUI.
pub async fn run(args: Args) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    sentinel_core::logging::init()?;

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let settings = args.settings(&cwd)?;
    let endpoints = args
        .endpoints(&settings)
        .with_context(|| format!("Invalid server host {:?}", settings.server.host))?;

    let result = sentinel_tui::run(settings, endpoints).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Sentinel Console exiting");
    result
}
