//! Error taxonomy for the metadata report pipeline.
//!
//! Every stage returns [`Result`]. Nothing is recovered locally: the binary
//! prints the first error it sees and exits.

use thiserror::Error;

/// Errors surfaced by the report pipeline and its collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad flags, arguments or scope value.
    #[error("{0}")]
    Usage(String),

    /// The log-cache endpoint could not be determined.
    #[error("could not determine log-cache endpoint: {0}")]
    EndpointResolution(String),

    /// The local platform session (API target, token) could not be loaded.
    #[error("could not load platform session: {0}")]
    Platform(String),

    /// A request to log-cache or the platform API failed.
    #[error("request to {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    /// A response body could not be decoded.
    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// The operator identity could not be resolved.
    #[error("could not resolve username: {0}")]
    Identity(String),

    /// Writing the rendered report failed.
    #[error("could not write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn fetch(url: &str, reason: impl ToString) -> Self {
        Self::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn decode(url: &str, reason: impl ToString) -> Self {
        Self::Decode {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
