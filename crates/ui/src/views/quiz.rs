use dioxus::prelude::*;

use quiz_core::{IntroChoice, StepView};

use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizOutcome, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Shown inline when the user declines the intro gate.
const DECLINE_NOTICE: &str = "No problem. Come back when you are ready.";

/// Owned snapshot of the current step, taken before any nodes are built so
/// event closures never borrow the view-model.
#[derive(Clone, Debug, PartialEq)]
enum StepRender {
    Intro,
    Interstitial,
    Question {
        number: usize,
        label: String,
        options: Vec<String>,
        is_choice: bool,
    },
}

#[component]
pub fn QuizView(on_complete: EventHandler<Vec<String>>) -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| QuizVm::new(ctx.catalog()));
    let notice = use_signal(|| None::<&'static str>);

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut notice = notice;
        let outcome = vm.write().apply(intent);
        match outcome {
            QuizOutcome::Continue => notice.set(None),
            QuizOutcome::Declined => notice.set(Some(DECLINE_NOTICE)),
            QuizOutcome::Completed(answers) => {
                notice.set(None);
                on_complete.call(answers);
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let vm_guard = vm.read();
    let flow = vm_guard.flow();
    let step = match flow.current_view() {
        StepView::Intro => StepRender::Intro,
        StepView::Interstitial => StepRender::Interstitial,
        StepView::Question { number, question } => StepRender::Question {
            number,
            label: question.label().to_string(),
            options: question.options().to_vec(),
            is_choice: question.is_choice(),
        },
    };
    let input = flow.input().to_string();
    let error_message = vm_guard.error_message();
    let progress_percent = vm_guard.progress_percent();
    let question_count = vm_guard.question_count();
    let next_label = vm_guard.next_label();
    drop(vm_guard);
    let notice_text = notice();

    match step {
        StepRender::Intro => rsx! {
            section { class: "flow-card flow-card--intro",
                div { class: "flow-card__meta",
                    span { class: "stage-pill", "Checkpoint 01" }
                    span { class: "stage-line" }
                    span { class: "stage-label", "Set your intention" }
                }
                h2 { class: "flow-card__title", "Do you want to learn more about markets?" }
                p { class: "flow-card__subtitle", "(Quick check - this will not be saved)" }
                div { class: "button-stack",
                    button {
                        class: "cta-button",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Intro(IntroChoice::Accept)),
                        "Yes, build my plan"
                    }
                    button {
                        class: "secondary-button",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Intro(IntroChoice::Decline)),
                        "Not right now"
                    }
                }
                if let Some(text) = notice_text {
                    p { class: "notice-text", role: "status", "{text}" }
                }
                div { class: "flow-card__hint", "Tip: honest answers give better suggestions." }
            }
        },
        StepRender::Interstitial => rsx! {
            section { class: "flow-card flow-card--intro",
                div { class: "flow-card__meta",
                    span { class: "stage-pill", "Honesty Lock" }
                    span { class: "stage-line" }
                    span { class: "stage-label", "Transparency powers the AI" }
                }
                h3 { class: "flow-card__title", "Honesty nudge" }
                p { class: "flow-card__subtitle",
                    "Answer with ego off. Your path should match your truth, not your fantasy."
                }
                div { class: "button-stack",
                    button {
                        class: "cta-button",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::LeaveInterstitial),
                        "Continue"
                    }
                    button {
                        class: "secondary-button",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::BackToIntro),
                        "Back"
                    }
                }
            }
        },
        StepRender::Question {
            number,
            label,
            options,
            is_choice,
        } => {
            let next_disabled = is_choice && input.is_empty();
            let subtitle = if is_choice {
                "Choose the option that describes you best."
            } else {
                "Write a short, honest answer."
            };
            rsx! {
                section { class: "flow-card",
                    div { class: "progress-wrapper",
                        div { class: "progress-track",
                            div {
                                class: "progress-indicator",
                                style: "width: {progress_percent}%",
                            }
                        }
                        div { class: "progress-meta",
                            span { "Question {number} of {question_count}" }
                            span { "{progress_percent}% complete" }
                        }
                    }
                    div { class: "question-header",
                        h3 { class: "flow-card__title", "{label}" }
                        p { class: "flow-card__subtitle flow-card__subtitle--muted", "{subtitle}" }
                    }
                    if is_choice {
                        div { class: "option-grid", role: "group", aria_label: "{label}",
                            for option in options {
                                OptionButton {
                                    option: option.clone(),
                                    selected: input == option,
                                    on_intent: dispatch,
                                }
                            }
                        }
                    } else {
                        input {
                            class: "answer-input",
                            r#type: "text",
                            value: "{input}",
                            oninput: move |evt| dispatch.call(QuizIntent::SetInput(evt.value())),
                        }
                    }
                    if let Some(message) = error_message {
                        div { class: "error-text", role: "alert", "{message}" }
                    }
                    div { class: "button-stack button-stack--stretch",
                        button {
                            class: "secondary-button",
                            r#type: "button",
                            onclick: move |_| dispatch.call(QuizIntent::Back),
                            "Back"
                        }
                        button {
                            class: "cta-button",
                            r#type: "button",
                            disabled: next_disabled,
                            onclick: move |_| dispatch.call(QuizIntent::Submit),
                            "{next_label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: String, selected: bool, on_intent: EventHandler<QuizIntent>) -> Element {
    let class = if selected {
        "option-button is-selected"
    } else {
        "option-button"
    };
    let value = option.clone();
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_intent.call(QuizIntent::SetInput(value.clone())),
            span { "{option}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
