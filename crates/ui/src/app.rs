use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{QuizView, SummaryView};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Trading Path Builder" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Shell {}
            }
        }
    }
}

/// Card chrome around the quiz/summary switch, plus the single suspension
/// point of the whole client: the summary call spawned on completion.
#[component]
pub(crate) fn Shell() -> Element {
    let ctx = use_context::<AppContext>();
    let summary = use_signal(|| None::<String>);
    let loading = use_signal(|| false);

    let summaries = ctx.summaries();
    let on_complete = use_callback(move |answers: Vec<String>| {
        let summaries = summaries.clone();
        let mut summary = summary;
        let mut loading = loading;
        spawn(async move {
            loading.set(true);
            let text = summaries.generate(&answers).await;
            summary.set(Some(text));
            loading.set(false);
        });
    });

    let on_restart = use_callback(move |()| {
        // Dropping the summary unmounts SummaryView and remounts a fresh
        // QuizView, which resets the whole flow state.
        let mut summary = summary;
        summary.set(None);
    });

    let summary_state = summary.read().clone();
    let is_loading = loading();
    let main_class = if is_loading {
        "card-main is-loading"
    } else {
        "card-main"
    };

    rsx! {
        div { class: "card-shell",
            div { class: "card-surface",
                header { class: "card-header",
                    span { class: "badge", "Interactive Journey" }
                    h1 { "Trading Path Builder" }
                    p { "Honest reflections unlock the most precise AI plan." }
                }
                main { class: "{main_class}",
                    match summary_state {
                        Some(text) => rsx! {
                            SummaryView { summary: text, on_restart }
                        },
                        None => rsx! {
                            QuizView { on_complete }
                        },
                    }
                }
                if is_loading {
                    div { class: "loading-overlay",
                        div { class: "loading-spinner" }
                        p { "Composing your personalized path…" }
                    }
                }
            }
        }
    }
}
