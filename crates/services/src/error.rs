//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `SummaryApiClient`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SummaryApiError {
    #[error("summary endpoint returned no summary text")]
    MissingSummary,
    #[error("summary request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `AiClient`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AiClientError {
    #[error("ai generation is not configured")]
    Disabled,
    #[error("ai endpoint returned an empty completion")]
    EmptyResponse,
    #[error("ai request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
