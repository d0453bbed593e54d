use std::path::PathBuf;

use thiserror::Error;

/// Loading or saving a [`MountConfig`](crate::MountConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config is not valid JSON")]
    Json(#[from] serde_json::Error),
}

/// Failures of the advisory collaborator. Geometry is never affected by these.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AdvisoryError {
    #[error("no credential available for the advisory service")]
    NoCredential,

    #[error("malformed advisory response: {0}")]
    MalformedResponse(String),
}

impl AdvisoryError {
    /// Message shown to the user for any advisory failure.
    pub fn user_notice(&self) -> &'static str {
        "Could not get a suggestion right now. Please try again."
    }
}
