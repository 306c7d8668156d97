//! Slash web client - Main Entry Point
//!
//! With `server`, the Dioxus app is served together with the dev proxy so
//! the browser reaches the backend through the app origin.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use slash_web::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use slash_web::config::AppConfig;
    use slash_web::handlers::proxy_routes;

    init_tracing();

    let backend_url = AppConfig::global().backend_url.clone();
    tracing::info!(backend_url = %backend_url, "Starting Slash web client");

    dioxus::serve(move || {
        let backend_url = backend_url.clone();
        async move {
            // Backend paths must be matched before the app's catch-all route
            let router = proxy_routes(backend_url).merge(dioxus::server::router(App));
            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    init_tracing();
    tracing::info!("Starting Slash desktop client");
    dioxus::launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();
}
