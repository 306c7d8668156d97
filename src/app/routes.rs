use dioxus::prelude::*;

use crate::app::components::ToastList;
use crate::app::layouts::Navbar;
use crate::app::pages::{
    Callback, Home, Login, NotFound, PersonalizedRecommendations, Recommendations, Register,
    Search, Wishlist,
};
use crate::shared::hooks::{use_api_provider, use_toast_provider};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    // Google sends the browser back here after consent
    #[route("/callback?:code&:state")]
    Callback { code: String, state: String },

    #[route("/search?:product_name")]
    Search { product_name: String },
    #[route("/wishlist")]
    Wishlist {},

    #[route("/recommendations")]
    Recommendations {},
    #[route("/personalized-recommendations")]
    PersonalizedRecommendations {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_api_provider();
    use_toast_provider();

    use_effect(|| {
        tracing::info!("Slash web client initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Bundled by build.rs from assets/css/main.css
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");
    let route = use_route::<Route>();

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        document::Title { "Slash" }
        div { class: "c-layout",
            Navbar { key: "{route}" }
            ToastList {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}
