//! Errors returned while loading configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings file exists but could not be read.
    #[error("Failed reading settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid `KEY=value` syntax.
    #[error("Invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// A value could not be coerced into its field type.
    #[error("Invalid configuration value: {0}")]
    Extract(#[from] Box<figment::Error>),
}

impl ConfigError {
    pub(crate) fn from_dotenv(path: impl Into<PathBuf>, err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::Io(source) => Self::Read { path: path.into(), source },
            other => Self::Parse { path: path.into(), source: other },
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
