use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use services::{
    MISSING_SUMMARY_TEXT, NETWORK_ERROR_TEXT, SERVER_ERROR_TEXT, SummaryApiError, SummaryBackend,
    SummaryService,
};

struct CountingBackend {
    calls: AtomicUsize,
}

#[async_trait]
impl SummaryBackend for CountingBackend {
    async fn generate_summary(&self, answers: &[String]) -> Result<String, SummaryApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("summary of {} answers", answers.len()))
    }
}

struct FailingBackend {
    error: fn() -> SummaryApiError,
}

#[async_trait]
impl SummaryBackend for FailingBackend {
    async fn generate_summary(&self, _answers: &[String]) -> Result<String, SummaryApiError> {
        Err((self.error)())
    }
}

// A reqwest::Error without touching the network: "http://" has no host, so
// the request fails before anything is sent.
async fn transport_error() -> SummaryApiError {
    let err = reqwest::Client::new()
        .get("http://")
        .send()
        .await
        .expect_err("url without host cannot be requested");
    SummaryApiError::Http(err)
}

#[tokio::test]
async fn successful_generation_passes_text_through() {
    let backend = Arc::new(CountingBackend {
        calls: AtomicUsize::new(0),
    });
    let service = SummaryService::new(Arc::clone(&backend) as Arc<dyn SummaryBackend>);
    let answers = vec!["x".to_string(), "y".to_string()];

    let text = service.generate(&answers).await;

    assert_eq!(text, "summary of 2 answers");
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn missing_summary_maps_to_placeholder() {
    let service = SummaryService::new(Arc::new(FailingBackend {
        error: || SummaryApiError::MissingSummary,
    }));

    let text = service.generate(&[]).await;

    assert_eq!(text, MISSING_SUMMARY_TEXT);
}

#[tokio::test]
async fn server_error_maps_to_placeholder() {
    let service = SummaryService::new(Arc::new(FailingBackend {
        error: || SummaryApiError::HttpStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
    }));

    let text = service.generate(&[]).await;

    assert_eq!(text, SERVER_ERROR_TEXT);
}

#[tokio::test]
async fn transport_error_maps_to_placeholder() {
    struct TransportFailingBackend;

    #[async_trait]
    impl SummaryBackend for TransportFailingBackend {
        async fn generate_summary(&self, _answers: &[String]) -> Result<String, SummaryApiError> {
            Err(transport_error().await)
        }
    }

    let service = SummaryService::new(Arc::new(TransportFailingBackend));

    let text = service.generate(&[]).await;

    assert_eq!(text, NETWORK_ERROR_TEXT);
}
