use std::sync::Arc;

use quiz_core::Catalog;
use services::SummaryService;

/// What the UI needs from the application composition root.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Catalog;
    fn summaries(&self) -> Arc<SummaryService>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Catalog,
    summaries: Arc<SummaryService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            summaries: app.summaries(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    #[must_use]
    pub fn summaries(&self) -> Arc<SummaryService> {
        Arc::clone(&self.summaries)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
