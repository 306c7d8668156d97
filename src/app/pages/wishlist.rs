use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::app::components::{
    Button, ButtonVariant, EmptyState, ErrorMessage, LoadingText, ShareModal, StatusLine,
};
use crate::app::Route;
use crate::domain::models::{Destination, OperationStatus, SessionPolicy, WishlistItem};
use crate::domain::services::wishlist::load_error_message;
use crate::domain::services::{fetch_wishlist, remove_and_reload};
use crate::shared::errors::Result;
use crate::shared::hooks::{use_api, use_operations, use_session, use_toast};
use crate::shared::utils::navigate;

#[derive(Debug, Clone, PartialEq)]
enum WishlistView {
    Loading,
    Loaded(Vec<WishlistItem>),
    Failed(String),
}

fn show_items(items: Result<Vec<WishlistItem>>, mut view: Signal<WishlistView>, nav: Navigator) {
    match items {
        Ok(items) => view.set(WishlistView::Loaded(items)),
        Err(err) if err.is_unauthorized() => navigate(nav, &Destination::route("/login")),
        Err(err) => view.set(WishlistView::Failed(load_error_message(&err))),
    }
}

#[component]
pub fn Wishlist() -> Element {
    let api = use_api();
    let nav = navigator();
    let toaster = use_toast();
    let session = use_session(SessionPolicy::RequireLogin);
    let ops = use_operations();

    let mut view = use_signal(|| WishlistView::Loading);
    let mut inline_error = use_signal(|| None::<String>);
    let mut sharing = use_signal(|| false);
    let mut loaded_once = use_signal(|| false);

    let load = {
        let api = api.clone();
        move || {
            let api = api.clone();
            view.set(WishlistView::Loading);
            spawn(async move {
                let items = fetch_wishlist(&api).await;
                show_items(items, view, nav);
            });
        }
    };

    let mut first_load = load.clone();
    use_effect(move || {
        if session.read().session().is_some() && !loaded_once() {
            loaded_once.set(true);
            first_load();
        }
    });

    let remove = move |item: WishlistItem| {
        let api = api.clone();
        let mut ops = ops;
        inline_error.set(None);
        spawn(async move {
            let (report, items) = remove_and_reload(&api, &mut ops, &item).await;
            if let Some(message) = report.error {
                toaster.error(message.clone());
                inline_error.set(Some(message));
            }
            show_items(items, view, nav);
        });
    };

    if session.read().is_checking() {
        return rsx! { LoadingText { message: "Loading..." } };
    }

    let current = view.read().clone();
    let mut retry = load.clone();

    rsx! {
        section { class: "c-page",
            div { class: "c-page__header",
                h1 { class: "c-page__title", "Your Wishlist" }
                if let WishlistView::Loaded(items) = &current {
                    if !items.is_empty() {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| sharing.set(true),
                            "Share Wishlist"
                        }
                    }
                }
            }

            if let Some(message) = inline_error() {
                StatusLine { message, is_error: true }
            }

            match current {
                WishlistView::Loading => rsx! {
                    LoadingText { message: "Loading your wishlist..." }
                },
                WishlistView::Failed(message) => rsx! {
                    ErrorMessage { message, on_retry: move |_| retry() }
                },
                WishlistView::Loaded(items) if items.is_empty() => rsx! {
                    EmptyState {
                        title: "Your wishlist is empty",
                        description: "Search for products and add them to your wishlist.",
                        action_text: "Start Shopping",
                        action_route: Route::Search { product_name: String::new() },
                    }
                },
                WishlistView::Loaded(items) => rsx! {
                    div { class: "c-wishlist",
                        for item in items.iter().cloned() {
                            {
                                let removing = ops.read().is_active(&item.id, OperationStatus::Removing);
                                let mut remove = remove.clone();
                                let target = item.clone();
                                rsx! {
                                    article { key: "{item.id}", class: "c-wishlist-item",
                                        img { class: "c-wishlist-item__image", src: "{item.img}", alt: "{item.title}" }
                                        div { class: "c-wishlist-item__body",
                                            h3 { class: "c-wishlist-item__title", "{item.title}" }
                                            p { class: "c-wishlist-item__price", "{item.price}" }
                                            p { class: "c-wishlist-item__meta", "{item.website} · Rating: {item.rating}" }
                                        }
                                        div { class: "c-wishlist-item__actions",
                                            a {
                                                class: "c-button c-button--outline",
                                                href: "{item.url}",
                                                target: "_blank",
                                                rel: "noopener noreferrer",
                                                "View Product"
                                            }
                                            Button {
                                                variant: ButtonVariant::Danger,
                                                disabled: removing,
                                                onclick: move |_| remove(target.clone()),
                                                if removing { "Removing..." } else { "Remove" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if sharing() {
                        ShareModal { items: items.clone(), on_close: move |_| sharing.set(false) }
                    }
                },
            }
        }
    }
}
