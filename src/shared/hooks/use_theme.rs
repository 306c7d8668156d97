use dioxus::prelude::*;
use std::str::FromStr;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme to use when nothing was saved yet
    pub fn system_default(is_dark_preferred: bool) -> Theme {
        if is_dark_preferred {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Current theme, restored from localStorage or the system preference on mount
pub fn use_theme() -> Signal<Theme> {
    let mut current_theme = use_signal(|| Theme::Light);

    use_effect(move || {
        spawn(async move {
            let theme = match saved_theme() {
                Some(theme) => theme,
                None => {
                    let script = "return window.matchMedia('(prefers-color-scheme: dark)').matches;";
                    let prefers_dark = match document::eval(script).await {
                        Ok(result) => result.as_bool().unwrap_or(false),
                        Err(_) => false,
                    };
                    Theme::system_default(prefers_dark)
                }
            };
            current_theme.set(theme);
            apply_theme(theme).await;
        });
    });

    current_theme
}

#[cfg(target_arch = "wasm32")]
fn saved_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()??.parse().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn saved_theme() -> Option<Theme> {
    None
}

/// Put the theme class on the document element
pub async fn apply_theme(theme: Theme) {
    let script = format!(
        r#"
        (function() {{
            const root = document.documentElement;
            root.classList.remove('light', 'dark');
            root.classList.add('{}');
        }})()
    "#,
        theme.as_str()
    );

    let _ = document::eval(&script).await;
}

/// Save theme to localStorage
#[cfg(target_arch = "wasm32")]
pub async fn save_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_theme(_theme: Theme) {
    // No localStorage outside the browser
}
