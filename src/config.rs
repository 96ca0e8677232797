// Configuration module for usersift
// This module handles loading and parsing configuration from ~/.config/usersift/config.toml

mod types;

pub use types::{Config, SourceConfig};

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;

use crate::error::UsersiftError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/usersift/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path
///
/// A missing file yields defaults silently. Unreadable files, invalid TOML and
/// unusable endpoints yield defaults plus a warning for the UI.
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    let config = match toml::from_str::<Config>(&contents) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            };
        }
    };

    if let Err(e) = parse_endpoint(&config.source.endpoint) {
        log::error!("Rejecting configured endpoint: {}", e);
        return ConfigResult {
            config: Config::default(),
            warning: Some(format!("Invalid config: {}", e)),
        };
    }

    #[cfg(debug_assertions)]
    log::debug!("Config parsed successfully: {:?}", config.source.endpoint);
    ConfigResult {
        config,
        warning: None,
    }
}

/// Parse and validate a user source endpoint
///
/// Only absolute http(s) URLs are accepted.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, UsersiftError> {
    let url = Url::parse(endpoint.trim()).map_err(|e| UsersiftError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(UsersiftError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme '{}'", scheme),
        }),
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/usersift/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("usersift")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
