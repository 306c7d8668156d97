use dioxus::prelude::*;

use crate::shared::hooks::use_toast;

/// Toast stack in the top-right corner.
#[component]
pub fn ToastList() -> Element {
    let toaster = use_toast();
    let queue = toaster.queue();

    rsx! {
        div { class: "c-toast-list", aria_live: "polite",
            for toast in queue.read().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: "c-toast {toast.severity.css_modifier()}",
                    role: "status",
                    span { class: "c-toast__text", "{toast.text}" }
                    button {
                        class: "c-toast__close",
                        r#type: "button",
                        aria_label: "Dismiss notification",
                        onclick: move |_| toaster.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
