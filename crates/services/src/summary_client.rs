use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::SummaryApiError;

#[derive(Clone, Debug)]
pub struct SummaryApiConfig {
    pub base_url: String,
}

impl SummaryApiConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("PATHBUILDER_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".into());
        Self { base_url }
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// HTTP client for the summary-generation endpoint.
#[derive(Clone)]
pub struct SummaryApiClient {
    client: Client,
    config: SummaryApiConfig,
}

impl SummaryApiClient {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(SummaryApiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: SummaryApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Submit the collected answers and return the generated summary text.
    ///
    /// # Errors
    ///
    /// Returns `SummaryApiError` when the request fails, the endpoint
    /// replies with a non-success status, or the response carries no
    /// summary text.
    pub async fn generate_summary(&self, answers: &[String]) -> Result<String, SummaryApiError> {
        let url = format!(
            "{}/generate-summary",
            self.config.base_url.trim_end_matches('/')
        );
        let payload = SummaryRequest { answers };

        let response = self.client.post(url).json(&payload).send().await?;

        if !response.status().is_success() {
            return Err(SummaryApiError::HttpStatus(response.status()));
        }

        let body: SummaryResponse = response.json().await?;
        body.summary
            .filter(|summary| !summary.is_empty())
            .ok_or(SummaryApiError::MissingSummary)
    }
}

#[derive(Debug, Serialize)]
struct SummaryRequest<'a> {
    answers: &'a [String],
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    summary: Option<String>,
}
