use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, LoadingText, ProductCard};
use crate::app::Route;
use crate::domain::models::{PersonalizedRecommendations as Recommended, SessionPolicy};
use crate::domain::services::fetch_personalized;
use crate::domain::services::recommendations::NO_HISTORY_HINT;
use crate::shared::hooks::{use_api, use_session};

#[component]
pub fn PersonalizedRecommendations() -> Element {
    let api = use_api();
    let session = use_session(SessionPolicy::RequireLogin);
    let mut result = use_signal(|| None::<Result<Recommended, String>>);
    let mut requested = use_signal(|| false);

    use_effect(move || {
        if session.read().session().is_none() || requested() {
            return;
        }
        requested.set(true);
        let api = api.clone();
        spawn(async move {
            // Failures already carry the text shown to the user
            let loaded = fetch_personalized(&api).await.map_err(|err| err.to_string());
            result.set(Some(loaded));
        });
    });

    if session.read().is_checking() {
        return rsx! { LoadingText { message: "Loading..." } };
    }

    let body = match result() {
        None => rsx! { LoadingText { message: "Loading your recommendations..." } },
        Some(Err(message)) => rsx! { ErrorMessage { message } },
        Some(Ok(found)) if found.recommendations.is_empty() => rsx! {
            EmptyState {
                title: "No recommendations yet",
                description: found.message.unwrap_or_else(|| NO_HISTORY_HINT.to_string()),
                action_text: "Start Searching",
                action_route: Route::Search { product_name: String::new() },
            }
        },
        Some(Ok(found)) => rsx! {
            if let Some(message) = found.message {
                p { class: "c-page__lead", "{message}" }
            }
            div { class: "c-product-grid",
                for (index, product) in found.recommendations.into_iter().enumerate() {
                    ProductCard { key: "{product.key(index)}", product }
                }
            }
        },
    };

    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Recommended for You" }
            {body}
        }
    }
}
