use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// The guild configuration file could not be read.
    #[error("Failed to read configuration file {path}: {source}")]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The guild configuration file is not valid JSON or has the wrong shape.
    #[error("Failed to parse configuration file {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The data directory could not be created.
    #[error("Failed to create data directory: {0}")]
    DataDir(#[source] std::io::Error),
}
