//! Configuration loading
//!
//! File values come from `<config_dir>/mvsearch/config.toml`; CLI flags
//! override them. A missing default file yields [`Config::default`].

mod types;

pub use types::{Config, SearchConfig, ServerConfig};

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::MvsError;

/// Default config file location
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mvsearch").join("config.toml"))
}

/// Load configuration, applying CLI overrides on top of file values
///
/// An explicitly passed `--config` path must exist; the default location may
/// be absent. A malformed file is a startup error, not a silent default.
pub fn load(cli: &Cli) -> Result<Config, MvsError> {
    let path = match &cli.config {
        Some(path) => {
            if !path.exists() {
                return Err(MvsError::InvalidConfig(format!(
                    "{}: file not found",
                    path.display()
                )));
            }
            Some(path.clone())
        }
        None => default_config_path(),
    };

    let mut config = match path {
        Some(path) if path.exists() => {
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str(&contents)
                .map_err(|e| MvsError::InvalidConfig(format!("{}: {}", path.display(), e)))?
        }
        _ => Config::default(),
    };

    if let Some(server) = &cli.server {
        config.server.url = server.clone();
    }
    if let Some(k) = cli.k {
        config.search.k = k;
    }

    Ok(config)
}
