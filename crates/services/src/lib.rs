#![forbid(unsafe_code)]

pub mod ai_client;
pub mod error;
pub mod prompt;
pub mod summary_client;
pub mod summary_service;

pub use ai_client::{AiClient, AiConfig};
pub use error::{AiClientError, SummaryApiError};
pub use prompt::{build_prompt, keyed_answers};
pub use summary_client::{SummaryApiClient, SummaryApiConfig};
pub use summary_service::{
    MISSING_SUMMARY_TEXT, NETWORK_ERROR_TEXT, SERVER_ERROR_TEXT, SummaryBackend, SummaryService,
};
