use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "c-button--primary",
            ButtonVariant::Secondary => "c-button--secondary",
            ButtonVariant::Danger => "c-button--danger",
            ButtonVariant::Outline => "c-button--outline",
        }
    }
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    disabled: Option<bool>,
    /// Render as a form submit button
    #[props(default = false)]
    submit: bool,
    #[props(default = false)]
    full_width: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.unwrap_or(ButtonVariant::Primary).class();
    let width_class = if full_width { "c-button--block" } else { "" };
    let button_type = if submit { "submit" } else { "button" };

    rsx! {
        button {
            class: "c-button {variant_class} {width_class}",
            r#type: button_type,
            disabled: disabled.unwrap_or(false),
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Anchor styled as a button, for full-page navigations to the backend.
#[component]
pub fn ButtonLink(
    href: String,
    variant: Option<ButtonVariant>,
    #[props(default = false)]
    full_width: bool,
    children: Element,
) -> Element {
    let variant_class = variant.unwrap_or(ButtonVariant::Primary).class();
    let width_class = if full_width { "c-button--block" } else { "" };

    rsx! {
        a {
            class: "c-button {variant_class} {width_class}",
            href: "{href}",
            {children}
        }
    }
}
