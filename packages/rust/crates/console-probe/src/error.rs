//! Error types for console probe requests.

use thiserror::Error;

/// Request execution error raised inside a single check.
///
/// The runner turns every variant into a printed diagnostic; none of them
/// ends the run.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure: refused connection, timeout, DNS or TLS error.
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// Response body was JSON but not an object.
    #[error("overview body is not a JSON object (got {0})")]
    NotAnObject(&'static str),
}
