// Backend orchestration
// Framework-agnostic, generic over the HTTP transport

pub mod auth;
pub mod recommendations;
pub mod search;
pub mod wishlist;

pub use auth::{
    check_session, complete_oauth, google_login_url, logout_url, submit_credentials,
    validate_credentials, Credentials, CredentialsFlow,
};
pub use recommendations::{ask_ai, fetch_personalized};
pub use search::{add_to_wishlist, requested_term, search_products, AddOutcome, SearchOutcome};
pub use wishlist::{
    fetch_wishlist, parse_wishlist, remove_and_reload, remove_wishlist_item, share_wishlist,
};
