use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::domain::models::Destination;

/// Follow a [`Destination`]: router push for in-app paths, full page load otherwise.
pub fn navigate(nav: Navigator, destination: &Destination) {
    tracing::debug!(target_url = destination.target(), "Navigating");
    match destination {
        Destination::Route(path) => {
            nav.push(path.clone());
        }
        Destination::External(url) => {
            let target = serde_json::to_string(url).unwrap_or_else(|_| "\"/\"".to_string());
            let _ = document::eval(&format!("window.location.href = {target};"));
        }
    }
}
