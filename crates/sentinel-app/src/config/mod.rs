//! Configuration file parsing for Sentinel Console
//!
//! Supports `.sentinel/config.toml` (or an explicit `--config` path).

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, load_settings_from, resolve_endpoints};
pub use types::*;
