use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UniverseError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
