use dioxus::prelude::*;

use crate::domain::models::Product;

/// Search or recommendation result. The wishlist button only appears when
/// `on_add` is set.
#[component]
pub fn ProductCard(
    product: Product,
    #[props(default = false)]
    adding: bool,
    /// Inline feedback under the card as `(text, is_error)`
    #[props(default)]
    message: Option<(String, bool)>,
    on_add: Option<EventHandler>,
) -> Element {
    let added = matches!(&message, Some((_, false)));
    let add_label = if adding {
        "Adding..."
    } else if added {
        "Added!"
    } else {
        "Add to Wishlist"
    };
    let add_class = if added {
        "c-button c-button--success"
    } else {
        "c-button c-button--primary"
    };

    rsx! {
        article { class: "c-product-card",
            div { class: "c-product-card__media",
                img {
                    class: "c-product-card__image",
                    src: "{product.image_url}",
                    alt: "{product.title}",
                }
            }
            h3 { class: "c-product-card__title", "{product.title}" }
            p { class: "c-product-card__price", "{product.price}" }
            p { class: "c-product-card__website", "{product.website}" }
            if product.has_rating() {
                p { class: "c-product-card__rating",
                    "★ {product.rating}"
                    if let Some(count) = &product.rating_count {
                        " ({count} reviews)"
                    }
                }
            }
            div { class: "c-product-card__actions",
                a {
                    class: "c-button c-button--outline",
                    href: "{product.link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View Product"
                }
                if let Some(handler) = on_add {
                    button {
                        class: "{add_class}",
                        r#type: "button",
                        disabled: adding,
                        onclick: move |evt| {
                            evt.prevent_default();
                            evt.stop_propagation();
                            handler.call(());
                        },
                        "{add_label}"
                    }
                }
            }
            if let Some((text, is_error)) = &message {
                div {
                    class: if *is_error { "c-product-card__message c-product-card__message--error" } else { "c-product-card__message" },
                    "{text}"
                }
            }
        }
    }
}
