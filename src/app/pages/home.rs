use dioxus::prelude::*;

use crate::app::components::{ButtonLink, ButtonVariant, LoadingText};
use crate::app::Route;
use crate::domain::models::SessionPolicy;
use crate::domain::services::google_login_url;
use crate::shared::hooks::{use_api, use_session, SessionState};

/// Landing page. Signed-in visitors go straight to search.
#[component]
pub fn Home() -> Element {
    let api = use_api();
    let nav = navigator();
    let session = use_session(SessionPolicy::Optional);
    let mut search_term = use_signal(String::new);

    use_effect(move || {
        if session.read().session().is_some() {
            nav.push(Route::Search {
                product_name: String::new(),
            });
        }
    });

    if *session.read() != SessionState::Anonymous {
        return rsx! { LoadingText { message: "Loading..." } };
    }

    let google_url = google_login_url(&api);

    rsx! {
        section { class: "c-hero",
            h1 { class: "c-hero__title", "Slash" }
            p { class: "c-hero__tagline",
                "Elevating Your Shopping Experience, All you need is One Comparison. Shop until your heart's content."
            }
            form {
                class: "c-search-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let term = search_term().trim().to_string();
                    if !term.is_empty() {
                        nav.push(Route::Search { product_name: term });
                    }
                },
                input {
                    class: "c-input",
                    r#type: "text",
                    name: "product_name",
                    placeholder: "What's on your mind today?",
                    value: "{search_term}",
                    oninput: move |evt| search_term.set(evt.value()),
                }
                button { class: "c-button c-button--primary", r#type: "submit", "Search" }
            }
            div { class: "c-hero__actions",
                Link { to: Route::Login {}, class: "c-button c-button--outline", "Login" }
                ButtonLink { href: google_url, variant: ButtonVariant::Primary, "Login with Google" }
            }
        }
    }
}
