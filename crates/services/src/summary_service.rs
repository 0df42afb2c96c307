use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SummaryApiError;
use crate::summary_client::SummaryApiClient;

/// Shown when the endpoint answered but carried no summary text.
pub const MISSING_SUMMARY_TEXT: &str = "No summary received";
/// Shown when the endpoint replied with a non-success status.
pub const SERVER_ERROR_TEXT: &str = "Error from server. Check backend logs.";
/// Shown when the request never got a usable response.
pub const NETWORK_ERROR_TEXT: &str = "Error generating summary (network).";

/// Seam between the completion handler and the transport so tests can
/// substitute the real endpoint.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    async fn generate_summary(&self, answers: &[String]) -> Result<String, SummaryApiError>;
}

#[async_trait]
impl SummaryBackend for SummaryApiClient {
    async fn generate_summary(&self, answers: &[String]) -> Result<String, SummaryApiError> {
        SummaryApiClient::generate_summary(self, answers).await
    }
}

/// Completion handler: turns a finished answer list into display text.
///
/// `generate` always resolves. Transport and server failures map onto fixed
/// placeholder strings so the caller reaches a terminal display state no
/// matter what happened on the wire.
#[derive(Clone)]
pub struct SummaryService {
    backend: Arc<dyn SummaryBackend>,
}

impl SummaryService {
    #[must_use]
    pub fn new(backend: Arc<dyn SummaryBackend>) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Arc::new(SummaryApiClient::from_env()))
    }

    pub async fn generate(&self, answers: &[String]) -> String {
        match self.backend.generate_summary(answers).await {
            Ok(text) => text,
            Err(err) => Self::placeholder_for(&err).to_string(),
        }
    }

    fn placeholder_for(err: &SummaryApiError) -> &'static str {
        match err {
            SummaryApiError::MissingSummary => MISSING_SUMMARY_TEXT,
            SummaryApiError::HttpStatus(_) => SERVER_ERROR_TEXT,
            SummaryApiError::Http(_) => NETWORK_ERROR_TEXT,
        }
    }
}
