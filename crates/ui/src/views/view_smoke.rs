use dioxus::prelude::*;
use quiz_core::IntroChoice;

use crate::vm::QuizIntent;
use super::SummaryView;
use super::test_harness::{
    TEST_SUMMARY_TEXT, drive_dom, setup_quiz_harness, two_question_catalog,
};

#[tokio::test(flavor = "current_thread")]
async fn intro_gate_renders_first() {
    let mut harness = setup_quiz_harness(two_question_catalog());
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("Do you want to learn more about markets?"),
        "missing intro title in {html}"
    );
    assert!(
        html.contains("Yes, build my plan"),
        "missing intro cta in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn declining_shows_the_notice() {
    let mut harness = setup_quiz_harness(two_question_catalog());
    harness.rebuild();

    harness
        .handles
        .dispatch()
        .call(QuizIntent::Intro(IntroChoice::Decline));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(
        html.contains("No problem. Come back when you are ready."),
        "missing decline notice in {html}"
    );
    assert!(harness.backend.calls.lock().expect("calls lock").is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn empty_submission_blocks_and_shows_error() {
    let mut harness = setup_quiz_harness(two_question_catalog());
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuizIntent::Intro(IntroChoice::Accept));
    dispatch.call(QuizIntent::LeaveInterstitial);
    drive_dom(&mut harness.dom);
    dispatch.call(QuizIntent::Submit);
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(
        html.contains("Please choose the option that fits you best."),
        "missing validation error in {html}"
    );
    assert!(
        html.contains("Question 1 of 2"),
        "flow moved despite empty input: {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn back_prefills_the_previous_selection() {
    let mut harness = setup_quiz_harness(two_question_catalog());
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuizIntent::Intro(IntroChoice::Accept));
    dispatch.call(QuizIntent::LeaveInterstitial);
    dispatch.call(QuizIntent::SetInput("x".to_string()));
    dispatch.call(QuizIntent::Submit);
    drive_dom(&mut harness.dom);
    dispatch.call(QuizIntent::Back);
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(
        html.contains("Question 1 of 2"),
        "expected first question in {html}"
    );
    assert!(
        html.contains("is-selected"),
        "previous selection not prefilled in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn full_walk_reaches_the_summary_exactly_once() {
    let mut harness = setup_quiz_harness(two_question_catalog());
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuizIntent::Intro(IntroChoice::Accept));
    dispatch.call(QuizIntent::LeaveInterstitial);
    dispatch.call(QuizIntent::SetInput("x".to_string()));
    dispatch.call(QuizIntent::Submit);
    drive_dom(&mut harness.dom);
    dispatch.call(QuizIntent::SetInput("y".to_string()));
    dispatch.call(QuizIntent::Submit);
    drive_dom(&mut harness.dom);

    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains(TEST_SUMMARY_TEXT),
        "missing summary text in {html}"
    );
    assert!(
        html.contains("Generate Another"),
        "missing restart action in {html}"
    );

    let calls = harness.backend.calls.lock().expect("calls lock");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], ["x", "y"]);
}

#[component]
fn SummaryHarness() -> Element {
    rsx! {
        SummaryView {
            summary: "A calm path.".to_string(),
            on_restart: move |()| {},
        }
    }
}

#[tokio::test(flavor = "current_thread")]
async fn summary_view_renders_text_and_actions() {
    let mut dom = VirtualDom::new(SummaryHarness);
    dom.rebuild_in_place();

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("A calm path."), "missing summary in {html}");
    assert!(html.contains("Copy"), "missing copy action in {html}");
    assert!(
        html.contains("Generate Another"),
        "missing restart in {html}"
    );
}
