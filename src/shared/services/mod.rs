// HTTP plumbing: transport seam, platform transports and the API client
pub mod api_service;
pub mod transport;

#[cfg(target_arch = "wasm32")]
pub mod browser;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(test)]
pub mod testing;

pub use api_service::{ApiClient, PlatformTransport, SharedApi};
pub use transport::{ApiRequest, ApiResponse, Method, RequestBody, Transport};
