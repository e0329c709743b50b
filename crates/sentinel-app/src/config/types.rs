//! Configuration types for Sentinel Console
//!
//! Mirrors `.sentinel/config.toml`. Every section and field is optional.

use serde::{Deserialize, Serialize};

use sentinel_stream::endpoints::{DEFAULT_DIRECTIVES_PATH, DEFAULT_LOGS_PATH};
use sentinel_stream::TransportSecurity;

/// Global application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub directives: DirectiveSettings,
    pub ui: UiSettings,
}

/// `[server]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    /// `host[:port]`, no scheme
    pub host: String,
    pub logs_path: String,
    pub directives_path: String,
    pub security: SecurityMode,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1:8000".to_string(),
            logs_path: DEFAULT_LOGS_PATH.to_string(),
            directives_path: DEFAULT_DIRECTIVES_PATH.to_string(),
            security: SecurityMode::Auto,
        }
    }
}

/// Scheme selection as written in the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityMode {
    #[default]
    Auto,
    Secure,
    Insecure,
}

impl From<SecurityMode> for TransportSecurity {
    fn from(mode: SecurityMode) -> Self {
        match mode {
            SecurityMode::Auto => TransportSecurity::Auto,
            SecurityMode::Secure => TransportSecurity::Secure,
            SecurityMode::Insecure => TransportSecurity::Insecure,
        }
    }
}

/// `[directives]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectiveSettings {
    /// Overwrite agent/task on repeat sightings of a directive id
    pub refresh_details: bool,
}

/// `[ui]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Prefix log lines with `[HH:MM:SS]`
    pub show_timestamps: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_timestamps: true,
        }
    }
}
