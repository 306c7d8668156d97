use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(path = %path, "No route matched");

    rsx! {
        section { class: "c-page c-page--centered",
            h1 { class: "c-page__title", "404" }
            p { "The page {path} does not exist." }
            Link { to: Route::Home {}, class: "c-button c-button--primary", "Back to Home" }
        }
    }
}
