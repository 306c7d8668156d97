//! Standalone dev proxy (without Dioxus frontend)
//! Forwards the backend paths to the Slash backend, e.g. while running the
//! frontend with `dx serve` on another port.
//!
//! Run with: cargo run --features server --bin server -- --port 3001

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use slash_web::config::DEFAULT_BACKEND_URL;
use slash_web::handlers::{proxy_routes, PROXIED_PATHS};

#[derive(Debug, Parser)]
#[command(name = "server", about = "Slash development proxy")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// Origin of the Slash backend
    #[arg(long, env = "SLASH_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    tracing::info!(
        backend_url = %args.backend_url,
        paths = ?PROXIED_PATHS,
        "Starting Slash dev proxy (standalone)"
    );

    let app = proxy_routes(args.backend_url)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Proxy running on http://{}", addr);

    axum::serve(listener, app).await.context("proxy server stopped")?;
    Ok(())
}
