pub mod auth;
pub mod home;
pub mod not_found;
pub mod personalized;
pub mod recommendations;
pub mod search;
pub mod wishlist;

pub use auth::{Callback, Login, Register};
pub use home::Home;
pub use not_found::NotFound;
pub use personalized::PersonalizedRecommendations;
pub use recommendations::Recommendations;
pub use search::Search;
pub use wishlist::Wishlist;
