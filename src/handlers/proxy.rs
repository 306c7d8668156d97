use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use reqwest::{redirect::Policy, Client};

/// Largest request body forwarded to the backend.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Paths served by the backend rather than by the app.
///
/// Paths that are also client routes (`/wishlist`, `/search`,
/// `/personalized-recommendations`) stay with the app so page loads work;
/// the client calls those on the backend origin directly.
pub const PROXIED_PATHS: &[&str] = &[
    "/api/{*rest}",
    "/login/google",
    "/logout",
    "/exchange-token",
    "/add-wishlist-item",
    "/remove-wishlist-item",
    "/share",
    "/ai-recommendations",
];

/// Proxy configuration
#[derive(Clone)]
pub struct ProxyState {
    pub backend_url: String,
    pub client: Client,
}

impl ProxyState {
    pub fn new(backend_url: impl Into<String>) -> Self {
        // Redirects go back to the browser untouched
        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .unwrap_or_default();

        Self {
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }
}

/// Router forwarding every backend path to `backend_url`.
pub fn proxy_routes(backend_url: impl Into<String>) -> Router {
    let state = ProxyState::new(backend_url);
    PROXIED_PATHS
        .iter()
        .fold(Router::<ProxyState>::new(), |router, path| {
            router.route(path, any(proxy_handler))
        })
        .with_state(state)
}

/// Forward the request as is and relay the backend answer, including
/// `Location` and every `Set-Cookie`.
pub async fn proxy_handler(State(state): State<ProxyState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = format!("{}{}", state.backend_url, path_and_query);

    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Rejected oversized proxy body");
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
    };

    let upstream = state
        .client
        .request(parts.method.clone(), &url)
        .headers(forwarded_headers(&parts.headers))
        .body(body)
        .send()
        .await;

    let upstream = match upstream {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(method = %parts.method, url = %url, error = %e, "Backend unreachable");
            return (StatusCode::BAD_GATEWAY, "Backend unreachable").into_response();
        }
    };

    tracing::debug!(
        method = %parts.method,
        url = %url,
        status = upstream.status().as_u16(),
        "Proxied request"
    );

    let mut builder = Response::builder().status(upstream.status());
    for (key, value) in upstream.headers() {
        let key_str = key.as_str();
        if key_str != "content-length" && key_str != "transfer-encoding" {
            builder = builder.header(key, value);
        }
    }

    builder
        .body(Body::from_stream(upstream.bytes_stream()))
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build proxied response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
}

fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut headers = incoming.clone();
    // reqwest sets these for the backend origin and the forwarded body
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);
    headers.remove(header::TRANSFER_ENCODING);
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use axum::routing::{get, post};
    use tokio::net::TcpListener;

    async fn spawn_router(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn fake_backend() -> Router {
        Router::new()
            .route(
                "/api/check-auth",
                get(|headers: HeaderMap| async move {
                    let cookie = headers
                        .get(header::COOKIE)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    format!("cookie={cookie}")
                }),
            )
            .route(
                "/logout",
                get(|request: Request| async move {
                    let query = request.uri().query().unwrap_or("").to_string();
                    let mut response = StatusCode::FOUND.into_response();
                    let headers = response.headers_mut();
                    headers.insert(header::LOCATION, HeaderValue::from_static("http://localhost:3000/"));
                    headers.append(header::SET_COOKIE, HeaderValue::from_static("session=; Max-Age=0"));
                    headers.append(header::SET_COOKIE, HeaderValue::from_static("remember=; Max-Age=0"));
                    headers.insert("x-query", HeaderValue::from_str(&query).unwrap());
                    response
                }),
            )
            .route("/share", post(|body: String| async move { body }))
            .route(
                "/personalized-recommendations",
                get(|| async { r#"{"recommendations":[]}"# }),
            )
    }

    fn plain_client() -> Client {
        Client::builder().redirect(Policy::none()).build().unwrap()
    }

    #[tokio::test]
    async fn test_forwards_cookies_to_backend() {
        let backend = spawn_router(fake_backend()).await;
        let proxy = spawn_router(proxy_routes(backend)).await;

        let body = plain_client()
            .get(format!("{proxy}/api/check-auth"))
            .header(header::COOKIE, "session=abc")
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(body, "cookie=session=abc");
    }

    #[tokio::test]
    async fn test_relays_redirect_without_following() {
        let backend = spawn_router(fake_backend()).await;
        let proxy = spawn_router(proxy_routes(backend)).await;

        let response = plain_client()
            .get(format!("{proxy}/logout?redirect_uri=http%3A%2F%2Flocalhost%3A3000"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "http://localhost:3000/");
        assert_eq!(response.headers().get_all(header::SET_COOKIE).iter().count(), 2);
        assert_eq!(
            response.headers()["x-query"],
            "redirect_uri=http%3A%2F%2Flocalhost%3A3000"
        );
    }

    #[tokio::test]
    async fn test_forwards_request_body() {
        let backend = spawn_router(fake_backend()).await;
        let proxy = spawn_router(proxy_routes(backend)).await;

        let body = plain_client()
            .post(format!("{proxy}/share"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(r#"{"email":"a@b.test","wishlist":[]}"#)
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(body, r#"{"email":"a@b.test","wishlist":[]}"#);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_bad_gateway() {
        // Nothing listens on the discard port
        let proxy = spawn_router(proxy_routes("http://127.0.0.1:9")).await;

        let response = plain_client()
            .get(format!("{proxy}/api/check-auth"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_client_route_page_load_stays_with_app() {
        let backend = spawn_router(fake_backend()).await;
        let app = proxy_routes(backend).fallback(|| async { "app shell" });
        let proxy = spawn_router(app).await;

        let response = plain_client()
            .get(format!("{proxy}/personalized-recommendations"))
            .header(header::ACCEPT, "text/html")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "app shell");
    }

    #[test]
    fn test_backend_url_trailing_slash_trimmed() {
        let state = ProxyState::new("http://localhost:5000/");
        assert_eq!(state.backend_url, "http://localhost:5000");
    }
}
