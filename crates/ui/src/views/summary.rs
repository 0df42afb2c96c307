use dioxus::document::eval;
use dioxus::prelude::*;

#[component]
pub fn SummaryView(summary: String, on_restart: EventHandler<()>) -> Element {
    let mut copied = use_signal(|| false);

    let summary_for_copy = summary.clone();
    let on_copy = use_callback(move |()| {
        // Rust's debug escaping is valid JS string syntax, so the text can be
        // inlined directly.
        let js = format!("navigator.clipboard.writeText({summary_for_copy:?});");
        let _ = eval(&js);
        copied.set(true);
    });

    let copy_label = if copied() { "Copied" } else { "Copy" };

    rsx! {
        div { class: "summary-box",
            h2 { "Your Trading Path" }
            p { class: "summary-text", "{summary}" }
            div { class: "summary-actions",
                button {
                    class: "cta-button",
                    r#type: "button",
                    onclick: move |_| on_copy.call(()),
                    "{copy_label}"
                }
                button {
                    class: "secondary-button",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Generate Another"
                }
            }
        }
    }
}
