// Custom Dioxus hooks
pub mod use_api;
pub mod use_operations;
pub mod use_session;
pub mod use_theme;
pub mod use_toast;

pub use use_api::{use_api, use_api_provider};
pub use use_operations::use_operations;
pub use use_session::{use_session, SessionState};
pub use use_theme::{apply_theme, save_theme, use_theme, Theme};
pub use use_toast::{use_toast, use_toast_provider, Toaster};
