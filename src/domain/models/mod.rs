// Domain models (view-local entities)
// Pure Rust, no framework dependencies

pub mod navigation;
pub mod operations;
pub mod product;
pub mod recommendation;
pub mod session;
pub mod toast;
pub mod wishlist;

pub use navigation::Destination;
pub use operations::{OperationRegistry, OperationStatus, OperationStore};
pub use product::{Product, PLACEHOLDER_IMAGE};
pub use recommendation::{
    AiReply, AiRequest, ChatRole, ChatTurn, PersonalizedRecommendations, OPENING_QUESTION,
};
pub use session::{Session, SessionPolicy};
pub use toast::{ToastMessage, ToastQueue, ToastSeverity, TOAST_LIFETIME_MS};
pub use wishlist::{RemovalReport, ScrapedCells, WishlistItem, WishlistPayload};
