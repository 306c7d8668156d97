use dioxus::prelude::*;

use crate::shared::hooks::{apply_theme, save_theme, use_theme};

/// Light/dark switch with an animated sun/moon ball.
#[component]
pub fn ThemeToggle() -> Element {
    let mut current_theme = use_theme();
    let is_light = !current_theme().is_dark();

    let toggle_theme = move |_| {
        let new_theme = current_theme().toggled();
        current_theme.set(new_theme);

        spawn(async move {
            apply_theme(new_theme).await;
            save_theme(new_theme).await;
        });
    };

    let label = if is_light {
        "Switch to dark mode"
    } else {
        "Switch to light mode"
    };
    let toggle_class = if is_light {
        "c-theme-toggle c-theme-toggle--light"
    } else {
        "c-theme-toggle"
    };

    rsx! {
        button {
            class: "{toggle_class}",
            r#type: "button",
            title: "{label}",
            aria_label: "{label}",
            onclick: toggle_theme,

            div { class: "c-theme-toggle__ball" }
            div { class: "c-theme-toggle__stars",
                span { class: "c-theme-toggle__star" }
                span { class: "c-theme-toggle__star" }
                span { class: "c-theme-toggle__star" }
            }
        }
    }
}
