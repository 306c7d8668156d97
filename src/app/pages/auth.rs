use dioxus::prelude::*;

use crate::app::components::{CredentialsForm, LoadingText};
use crate::domain::services::{complete_oauth, CredentialsFlow};
use crate::shared::hooks::use_api;
use crate::shared::utils::navigate;

#[component]
pub fn Login() -> Element {
    rsx! {
        div { class: "c-auth-page",
            CredentialsForm { flow: CredentialsFlow::Login }
        }
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        div { class: "c-auth-page",
            CredentialsForm { flow: CredentialsFlow::Register }
        }
    }
}

/// OAuth return point: exchange `code`/`state` once, then go home.
#[component]
pub fn Callback(code: String, state: String) -> Element {
    let api = use_api();
    let nav = navigator();

    // Effects only run in the client, never during server rendering
    use_effect(move || {
        let api = api.clone();
        let (code, state) = (code.clone(), state.clone());
        spawn(async move {
            let destination = complete_oauth(&api, Some(&code), Some(&state)).await;
            navigate(nav, &destination);
        });
    });

    rsx! {
        div { class: "c-auth-page",
            LoadingText { message: "Processing your login..." }
            p { class: "c-auth-page__hint", "Please wait, you will be redirected shortly." }
        }
    }
}
