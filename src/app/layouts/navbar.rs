use dioxus::prelude::*;

use crate::app::components::ThemeToggle;
use crate::app::Route;
use crate::domain::models::{Destination, SessionPolicy};
use crate::domain::services::{google_login_url, logout_url};
use crate::shared::hooks::{use_api, use_session};
use crate::shared::utils::navigate;

/// Global navbar. Checks the session itself, so the layout remounts it on
/// every route change.
#[component]
pub fn Navbar() -> Element {
    let api = use_api();
    let nav = navigator();
    let session = use_session(SessionPolicy::Optional);
    let mut logging_out = use_signal(|| false);

    let google_url = google_login_url(&api);
    let logout_target = logout_url(&api);
    let name = session.read().shown_name();
    let signed_in = session.read().session().is_some();

    rsx! {
        nav { class: "c-navbar",
            div { class: "c-navbar__left",
                Link { to: Route::Home {}, class: "c-navbar__logo", "Slash" }
                if signed_in {
                    Link { to: Route::Search { product_name: String::new() }, class: "c-navbar__link", "Search" }
                    Link { to: Route::Wishlist {}, class: "c-navbar__link", "Wishlist" }
                    Link { to: Route::Recommendations {}, class: "c-navbar__link", "✨ AI Recommendations" }
                    Link { to: Route::PersonalizedRecommendations {}, class: "c-navbar__link", "Personalized" }
                }
            }

            div { class: "c-navbar__actions",
                ThemeToggle {}
                if signed_in {
                    span { class: "c-navbar__welcome", "Welcome, {name}" }
                    button {
                        class: "c-button c-button--outline",
                        r#type: "button",
                        disabled: logging_out(),
                        onclick: move |_| {
                            logging_out.set(true);
                            navigate(nav, &Destination::external(logout_target.clone()));
                        },
                        if logging_out() { "Logging out..." } else { "Logout" }
                    }
                } else if !session.read().is_checking() {
                    Link { to: Route::Login {}, class: "c-button c-button--outline", "Login" }
                    a { class: "c-button c-button--primary", href: "{google_url}", "Login with Google" }
                }
            }
        }
    }
}
