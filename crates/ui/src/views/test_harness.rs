use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::{Catalog, Question};
use services::{SummaryApiError, SummaryBackend, SummaryService};

use crate::app::Shell;
use crate::context::{UiApp, build_app_context};
use super::quiz::QuizTestHandles;

pub const TEST_SUMMARY_TEXT: &str = "Plan: stay patient and keep sizing small.";

/// Backend stub that records every payload and answers with fixed text.
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: Mutex<Vec<Vec<String>>>,
}

#[async_trait]
impl SummaryBackend for RecordingBackend {
    async fn generate_summary(&self, answers: &[String]) -> Result<String, SummaryApiError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(answers.to_vec());
        Ok(TEST_SUMMARY_TEXT.to_string())
    }
}

struct TestApp {
    catalog: Catalog,
    summaries: Arc<SummaryService>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    fn summaries(&self) -> Arc<SummaryService> {
        Arc::clone(&self.summaries)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<dyn UiApp>,
    handles: QuizTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    use_context_provider(|| build_app_context(&props.app));
    use_context_provider(|| props.handles.clone());
    rsx! { Shell {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
    pub backend: Arc<RecordingBackend>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn two_question_catalog() -> Catalog {
    Catalog::new(vec![
        Question::choice("a", "Question A", ["x", "z"]).expect("valid question"),
        Question::free_text("b", "Question B").expect("valid question"),
    ])
    .expect("valid catalog")
}

pub fn setup_quiz_harness(catalog: Catalog) -> ViewHarness {
    let backend = Arc::new(RecordingBackend::default());
    let summaries = Arc::new(SummaryService::new(
        Arc::clone(&backend) as Arc<dyn SummaryBackend>
    ));
    let app: Arc<dyn UiApp> = Arc::new(TestApp { catalog, summaries });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        HarnessRoot,
        HarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        handles,
        backend,
    }
}
