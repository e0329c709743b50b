//! Command-line arguments

use std::path::{Path, PathBuf};

use clap::Parser;
use sentinel_app::config::{self, Settings};
use sentinel_core::prelude::*;
use sentinel_stream::{Endpoints, TransportSecurity};

/// Sentinel Console - live agent logs and directive status in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "sentinel")]
#[command(about = "Live agent logs and directive status in the terminal", long_about = None)]
pub struct Args {
    /// Server address as host[:port], overrides `server.host`
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Config file (default: .sentinel/config.toml in the working directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Always use wss:// and https://
    #[arg(long, conflicts_with = "insecure")]
    pub secure: bool,

    /// Always use ws:// and http://
    #[arg(long)]
    pub insecure: bool,
}

impl Args {
    /// Scheme override from `--secure`/`--insecure`
    pub fn security(&self) -> Option<TransportSecurity> {
        if self.secure {
            Some(TransportSecurity::Secure)
        } else if self.insecure {
            Some(TransportSecurity::Insecure)
        } else {
            None
        }
    }

    /// Load settings and apply overrides.
    ///
    /// An explicit `--config` path must exist; the default location falls
    /// back to defaults when absent.
    pub fn settings(&self, cwd: &Path) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => config::load_settings_from(path)
                .with_context(|| format!("Failed to load --config {}", path.display()))?,
            None => config::load_settings(cwd),
        };

        if let Some(host) = &self.host {
            info!("Host override from command line: {}", host);
            settings.server.host = host.clone();
        }

        Ok(settings)
    }

    pub fn endpoints(&self, settings: &Settings) -> Result<Endpoints> {
        config::resolve_endpoints(settings, self.security())
    }
}
