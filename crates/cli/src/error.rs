// SPDX-License-Identifier: MIT

use thiserror::Error;

/// All possible errors that can occur in the briefrs library.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] brief_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;
