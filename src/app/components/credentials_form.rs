use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::services::auth::PASSWORD_HINT;
use crate::domain::services::{google_login_url, submit_credentials, validate_credentials, CredentialsFlow};
use crate::shared::hooks::use_api;
use crate::shared::utils::navigate;

/// Username/password form shared by the login and register pages.
#[component]
pub fn CredentialsForm(flow: CredentialsFlow) -> Element {
    let api = use_api();
    let nav = navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let google_url = google_login_url(&api);
    let is_register = flow == CredentialsFlow::Register;
    let (title, subtitle, idle_label, busy_label) = match flow {
        CredentialsFlow::Login => (
            "Login",
            "Enter your credentials to access your account",
            "Login",
            "Logging in...",
        ),
        CredentialsFlow::Register => (
            "Create an account",
            "Register to start comparing prices",
            "Register",
            "Registering...",
        ),
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let confirm = confirmation();
        let credentials = match validate_credentials(
            flow,
            &username(),
            &password(),
            is_register.then_some(confirm.as_str()),
        ) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            match submit_credentials(&api, flow, &credentials).await {
                Ok(destination) => navigate(nav, &destination),
                Err(err) => error.set(Some(flow.error_message(&err).to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "c-auth-card",
            div { class: "c-auth-card__header",
                h1 { class: "c-auth-card__title", "{title}" }
                p { class: "c-auth-card__subtitle", "{subtitle}" }
            }

            if let Some(message) = error() {
                div { class: "c-alert c-alert--error", role: "alert", "{message}" }
            }

            form { class: "c-form", onsubmit: submit,
                label { class: "c-form__label", r#for: "username", "Username" }
                input {
                    id: "username",
                    name: "username",
                    class: "c-input",
                    r#type: "text",
                    placeholder: "Enter your username",
                    disabled: submitting(),
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }

                label { class: "c-form__label", r#for: "password", "Password" }
                input {
                    id: "password",
                    name: "password",
                    class: "c-input",
                    r#type: "password",
                    placeholder: "Enter your password",
                    disabled: submitting(),
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                p { class: "c-form__hint", "{PASSWORD_HINT}" }

                if is_register {
                    label { class: "c-form__label", r#for: "confirm-password", "Confirm password" }
                    input {
                        id: "confirm-password",
                        class: "c-input",
                        r#type: "password",
                        placeholder: "Repeat your password",
                        disabled: submitting(),
                        value: "{confirmation}",
                        oninput: move |evt| confirmation.set(evt.value()),
                    }
                }

                button {
                    class: "c-button c-button--primary c-button--block",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "{busy_label}" } else { "{idle_label}" }
                }
            }

            div { class: "c-auth-card__divider", span { "Or continue with" } }
            a { class: "c-button c-button--outline c-button--block", href: "{google_url}",
                "Login with Google"
            }

            p { class: "c-auth-card__switch",
                if is_register {
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login" }
                } else {
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
