use std::path::PathBuf;

use thiserror::Error;
use trellis::ThemeError;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("theme: {0}")]
    Theme(#[from] ThemeError),

    #[error("unable to open log file {path}: {source}")]
    Log {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("invalid key `{0}`, expected <target>:<key> e.g. select:down")]
    Key(String),

    #[error("unknown key target `{0}`")]
    Target(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
