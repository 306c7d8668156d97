use dioxus::prelude::*;

use crate::app::components::StatusLine;
use crate::domain::models::WishlistItem;
use crate::domain::services::share_wishlist;
use crate::shared::hooks::use_api;
use crate::shared::utils::sleep_ms;

const CLOSE_AFTER_SHARE_MS: u64 = 2_000;

/// Dialog that emails the wishlist to an address.
#[component]
pub fn ShareModal(items: Vec<WishlistItem>, on_close: EventHandler) -> Element {
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut sharing = use_signal(|| false);
    let mut status = use_signal(|| None::<(String, bool)>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let items = items.clone();
        let address = email();
        sharing.set(true);
        status.set(Some(("Sharing...".to_string(), false)));

        spawn(async move {
            match share_wishlist(&api, &address, &items).await {
                Ok(()) => {
                    status.set(Some(("Wishlist shared successfully!".to_string(), false)));
                    sleep_ms(CLOSE_AFTER_SHARE_MS).await;
                    status.set(None);
                    on_close.call(());
                }
                Err(err) => {
                    status.set(Some((format!("Failed to share wishlist: {err}"), true)));
                }
            }
            sharing.set(false);
        });
    };

    rsx! {
        div { class: "c-modal",
            div { class: "c-modal__backdrop", onclick: move |_| on_close.call(()) }
            div { class: "c-modal__dialog", role: "dialog", aria_modal: "true",
                h2 { class: "c-modal__title", "Share Your Wishlist" }
                form { class: "c-form", onsubmit: submit,
                    label { class: "c-form__label", r#for: "share-email", "Email address" }
                    input {
                        id: "share-email",
                        class: "c-input",
                        r#type: "email",
                        required: true,
                        placeholder: "friend@example.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    if let Some((message, is_error)) = status() {
                        StatusLine { message, is_error }
                    }
                    div { class: "c-modal__actions",
                        button {
                            class: "c-button c-button--outline",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            class: "c-button c-button--primary",
                            r#type: "submit",
                            disabled: sharing(),
                            if sharing() { "Sharing..." } else { "Share" }
                        }
                    }
                }
            }
        }
    }
}
