use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading theme configuration.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid theme configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
