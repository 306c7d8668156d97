use dioxus::prelude::*;

use crate::app::Route;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String, on_retry: Option<EventHandler>) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            p { class: "c-error__text", "{message}" }
            if let Some(handler) = on_retry {
                button {
                    class: "c-button c-button--outline",
                    onclick: move |_| handler.call(()),
                    "Try Again"
                }
            }
        }
    }
}

// Empty state with a call to action pointing at another page
#[component]
pub fn EmptyState(
    title: String,
    description: String,
    action_text: String,
    action_route: Route,
) -> Element {
    rsx! {
        div { class: "c-empty-state",
            h2 { class: "c-empty-state__title", "{title}" }
            p { class: "c-empty-state__description", "{description}" }
            Link {
                to: action_route,
                class: "c-button c-button--primary",
                "{action_text}"
            }
        }
    }
}

// Inline status line under a form (BEM: c-status)
#[component]
pub fn StatusLine(message: String, is_error: bool) -> Element {
    let modifier = if is_error { "c-status--error" } else { "c-status--success" };

    rsx! {
        p { class: "c-status {modifier}", "{message}" }
    }
}
