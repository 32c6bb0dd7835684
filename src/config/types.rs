// Configuration type definitions

use serde::Deserialize;

/// Search service connection section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the search service
    #[serde(default = "default_url")]
    pub url: String,
}

fn default_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { url: default_url() }
    }
}

/// Search behaviour section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Number of results requested per query
    #[serde(default = "default_k")]
    pub k: u32,
}

fn default_k() -> u32 {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { k: default_k() }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub search: SearchConfig,
}
