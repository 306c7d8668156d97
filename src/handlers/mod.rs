/// Development proxy forwarding backend paths from the app origin
pub mod proxy;

pub use proxy::{proxy_handler, proxy_routes, ProxyState, PROXIED_PATHS};
