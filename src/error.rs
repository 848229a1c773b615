//! Top-level error type returned from `main`.

use thiserror::Error;

use crate::core::config::ConfigError;
use crate::core::feature_context::FeatureError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Feature(#[from] FeatureError),
}
