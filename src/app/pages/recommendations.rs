use dioxus::prelude::*;

use crate::app::components::{Button, LoadingText, ProductCard};
use crate::app::Route;
use crate::domain::models::{ChatRole, ChatTurn, Product, SessionPolicy, OPENING_QUESTION};
use crate::domain::services::ask_ai;
use crate::domain::services::recommendations::AI_ERROR;
use crate::shared::hooks::{use_api, use_session};
use crate::shared::utils::render_markdown;

/// Conversational recommendations: the assistant asks, the user answers.
#[component]
pub fn Recommendations() -> Element {
    let api = use_api();
    let session = use_session(SessionPolicy::Optional);

    let mut conversation = use_signal(|| vec![ChatTurn::assistant(OPENING_QUESTION)]);
    let mut question = use_signal(|| OPENING_QUESTION.to_string());
    let mut answer = use_signal(String::new);
    let mut products = use_signal(Vec::<Product>::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let text = answer().trim().to_string();
        if text.is_empty() || loading() {
            return;
        }

        conversation.write().push(ChatTurn::user(text));
        answer.set(String::new());
        error.set(None);
        loading.set(true);

        let api = api.clone();
        let turns = conversation.read().clone();
        let previous = question();
        spawn(async move {
            match ask_ai(&api, &turns, &previous).await {
                Ok(reply) => {
                    conversation.write().push(ChatTurn::assistant(reply.response));
                    question.set(reply.next_question);
                    if !reply.recommendations.is_empty() {
                        products.set(reply.recommendations);
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "AI recommendation request failed");
                    error.set(Some(AI_ERROR.to_string()));
                }
            }
            loading.set(false);
        });
    };

    if session.read().is_checking() {
        return rsx! { LoadingText { message: "Loading..." } };
    }

    if !session.read().is_signed_in() {
        return rsx! {
            section { class: "c-page c-page--centered",
                h1 { class: "c-page__title", "✨ AI Recommendations" }
                p { "Please log in to get personalized product recommendations." }
                Link { to: Route::Login {}, class: "c-button c-button--primary", "Login" }
            }
        };
    }

    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "✨ AI Recommendations" }

            div { class: "c-conversation",
                for (index, turn) in conversation.read().iter().enumerate() {
                    match turn.role {
                        ChatRole::Assistant => rsx! {
                            div {
                                key: "{index}",
                                class: "c-conversation__turn c-conversation__turn--assistant",
                                dangerous_inner_html: render_markdown(&turn.content),
                            }
                        },
                        ChatRole::User => rsx! {
                            div {
                                key: "{index}",
                                class: "c-conversation__turn c-conversation__turn--user",
                                "{turn.content}"
                            }
                        },
                    }
                }
                if loading() {
                    LoadingText { message: "Thinking..." }
                }
            }

            if let Some(message) = error() {
                div { class: "c-alert c-alert--error", role: "alert", "{message}" }
            }

            if !question().is_empty() {
                form { class: "c-search-form", onsubmit: submit,
                    label { class: "c-form__label", r#for: "ai-answer", "{question}" }
                    input {
                        id: "ai-answer",
                        class: "c-input",
                        r#type: "text",
                        placeholder: "Type your answer...",
                        disabled: loading(),
                        value: "{answer}",
                        oninput: move |evt| answer.set(evt.value()),
                    }
                    Button { submit: true, disabled: loading(), "Send" }
                }
            }

            if !products.read().is_empty() {
                h2 { class: "c-page__subtitle", "Recommended for you" }
                div { class: "c-product-grid",
                    for (index, product) in products.read().iter().cloned().enumerate() {
                        ProductCard { key: "{product.key(index)}", product }
                    }
                }
            }
        }
    }
}
