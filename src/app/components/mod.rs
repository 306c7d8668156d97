pub mod button;
pub mod common;
pub mod credentials_form;
pub mod product_card;
pub mod share_modal;
pub mod theme_toggle;
pub mod toast;

pub use button::{Button, ButtonLink, ButtonVariant};
pub use common::{EmptyState, ErrorMessage, LoadingText, StatusLine};
pub use credentials_form::CredentialsForm;
pub use product_card::ProductCard;
pub use share_modal::ShareModal;
pub use theme_toggle::ThemeToggle;
pub use toast::ToastList;
