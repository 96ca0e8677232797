// Configuration type definitions

use serde::Deserialize;

use crate::source::DEFAULT_ENDPOINT;

/// Remote user source section
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            endpoint: default_endpoint(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
