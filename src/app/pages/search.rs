use std::collections::HashMap;

use dioxus::prelude::*;

use crate::app::components::{LoadingText, ProductCard};
use crate::app::Route;
use crate::domain::models::{Destination, OperationStatus, Product, SessionPolicy};
use crate::domain::services::{
    add_to_wishlist, requested_term, search_products, AddOutcome, SearchOutcome,
};
use crate::shared::hooks::{use_api, use_operations, use_session, use_toast};
use crate::shared::utils::{navigate, sleep_ms};

const INLINE_MESSAGE_MS: u64 = 3_000;
const LOGIN_REDIRECT_DELAY_MS: u64 = 2_000;

#[component]
pub fn Search(product_name: String) -> Element {
    let api = use_api();
    let nav = navigator();
    let toaster = use_toast();
    let session = use_session(SessionPolicy::RequireLogin);
    let ops = use_operations();

    let mut search_term = use_signal(|| product_name.clone());
    let mut searched_term = use_signal(String::new);
    let mut searching = use_signal(|| false);
    let mut outcome = use_signal(|| None::<SearchOutcome>);
    let mut messages = use_signal(HashMap::<String, (String, bool)>::new);

    let run_search = {
        let api = api.clone();
        move |term: String| {
            let api = api.clone();
            searched_term.set(term.clone());
            searching.set(true);
            outcome.set(None);
            spawn(async move {
                let result = search_products(&api, &term).await;
                if result == SearchOutcome::Unauthorized {
                    navigate(nav, &Destination::route("/login"));
                    return;
                }
                outcome.set(Some(result));
                searching.set(false);
            });
        }
    };

    // The URL drives the page: a new `product_name` replaces form and results
    let mut follow_url = run_search.clone();
    use_effect(use_reactive((&product_name,), move |(product_name,)| {
        if session.read().session().is_none() {
            return;
        }
        search_term.set(product_name.clone());
        messages.write().clear();
        match requested_term(&product_name) {
            Some(term) => follow_url(term),
            None => {
                outcome.set(None);
                searching.set(false);
            }
        }
    }));

    let mut search_again = run_search.clone();
    let current_param = product_name.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(term) = requested_term(&search_term()) else {
            return;
        };
        if requested_term(&current_param).as_deref() == Some(term.as_str()) {
            search_again(term);
        } else {
            nav.push(Route::Search { product_name: term });
        }
    };

    let add_product = move |(product, key): (Product, String)| {
        let api = api.clone();
        let mut ops = ops;
        messages.write().remove(&key);
        spawn(async move {
            let result = add_to_wishlist(&api, &mut ops, &product, &key).await;
            if let Some((text, severity)) = result.toast() {
                toaster.show(text, severity);
            }
            if let Some(inline) = result.inline() {
                messages.write().insert(key.clone(), inline);
            }

            match result {
                AddOutcome::Added { .. } => {
                    sleep_ms(INLINE_MESSAGE_MS).await;
                    messages.write().remove(&key);
                }
                AddOutcome::SessionExpired(_) => {
                    sleep_ms(LOGIN_REDIRECT_DELAY_MS).await;
                    navigate(nav, &Destination::route("/login"));
                }
                _ => {}
            }
        });
    };

    if session.read().is_checking() {
        return rsx! { LoadingText { message: "Loading..." } };
    }

    let name = session.read().shown_name();
    let heading = if name.is_empty() {
        "Product Search".to_string()
    } else {
        format!("Hello, {name}!")
    };
    let current = outcome.read().clone();

    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "{heading}" }
            form { class: "c-search-form", onsubmit: on_submit,
                input {
                    class: "c-input",
                    r#type: "text",
                    name: "product_name",
                    placeholder: "What are you looking for?",
                    value: "{search_term}",
                    oninput: move |evt| search_term.set(evt.value()),
                }
                button {
                    class: "c-button c-button--primary",
                    r#type: "submit",
                    disabled: searching(),
                    if searching() { "Searching..." } else { "Search" }
                }
            }

            if searching() {
                LoadingText { message: format!("Searching for \"{}\"...", searched_term()) }
            }

            if let Some(message) = current.as_ref().and_then(SearchOutcome::message) {
                div { class: "c-alert c-alert--warning", "{message}" }
            }

            if let Some(result) = current {
                div { class: "c-product-grid",
                    for (index, product) in result.products().iter().cloned().enumerate() {
                        {
                            let key = product.key(index);
                            let adding = ops.read().is_active(&key, OperationStatus::Adding);
                            let message = messages.read().get(&key).cloned();
                            let mut add_product = add_product.clone();
                            let item = (product.clone(), key.clone());
                            rsx! {
                                ProductCard {
                                    key: "{key}",
                                    product,
                                    adding,
                                    message,
                                    on_add: move |_| add_product(item.clone()),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
