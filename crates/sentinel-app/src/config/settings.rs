//! Settings parser for .sentinel/config.toml

use std::path::{Path, PathBuf};

use sentinel_core::prelude::*;
use sentinel_stream::{Endpoints, TransportSecurity};

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const SENTINEL_DIR: &str = ".sentinel";

/// Path of the project-local config file under `base`
pub fn default_config_path(base: &Path) -> PathBuf {
    base.join(SENTINEL_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.sentinel/config.toml` under `base`.
///
/// A missing or unreadable file yields defaults.
pub fn load_settings(base: &Path) -> Settings {
    let config_path = default_config_path(base);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("{}; using defaults", e);
            Settings::default()
        }
    }
}

/// Load settings from an explicit path (`--config`).
///
/// # Errors
///
/// Returns [`Error::ConfigNotFound`] if `path` does not exist. A file that
/// exists but fails to parse falls back to defaults like [`load_settings`].
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    Ok(read_settings(path).unwrap_or_else(|e| {
        warn!("{}; using defaults", e);
        Settings::default()
    }))
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {:?}: {}", path, e)))?;
    let settings = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {:?}: {}", path, e)))?;
    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Resolve the stream and API URLs for the configured server.
///
/// `security_override` (from the command line) wins over `server.security`.
pub fn resolve_endpoints(
    settings: &Settings,
    security_override: Option<TransportSecurity>,
) -> Result<Endpoints> {
    let server = &settings.server;
    let security = security_override.unwrap_or_else(|| server.security.into());
    Endpoints::resolve(
        &server.host,
        &server.logs_path,
        &server.directives_path,
        security,
    )
}
