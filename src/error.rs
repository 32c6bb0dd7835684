use thiserror::Error;

/// Startup errors for mvsearch
///
/// Only the startup path (config, terminal setup) surfaces errors. Remote
/// failures during a session are logged and absorbed by the controller.
#[derive(Debug, Error)]
pub enum MvsError {
    #[error("Invalid config file: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
