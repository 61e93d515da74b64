use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    ConfigError(String),

    #[error("could not construct SDN client: {0}")]
    ClientError(#[from] reqwest::Error),

    #[error("host unknown: {0}")]
    UnknownHost(String),

    #[error("unable to generate a path; no capacity or no path")]
    NoPath,

    #[error("fetch from SDN controller failed; previous graph retained")]
    FetchFailure,
}

pub type Result<T> = std::result::Result<T, Error>;
