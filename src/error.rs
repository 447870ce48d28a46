use thiserror::Error;

use crate::config::ConfigError;
use crate::http_request::RequestError;

/// Top-level error returned by the showcase binaries.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
