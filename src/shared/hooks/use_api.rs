use std::rc::Rc;

use dioxus::prelude::*;

use crate::shared::services::{ApiClient, SharedApi};

/// Create the platform API client and share it with every descendant.
pub fn use_api_provider() -> SharedApi {
    use_context_provider(|| Rc::new(ApiClient::platform()))
}

/// API client provided by the root component.
pub fn use_api() -> SharedApi {
    use_context::<SharedApi>()
}
