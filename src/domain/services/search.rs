//! Product search and wishlist additions from search results

use serde_json::Value;

use crate::domain::models::{OperationStatus, OperationStore, Product, ToastSeverity};
use crate::shared::errors::AppError;
use crate::shared::logging::{log_operation_in_flight, log_search_result, LogOperation};
use crate::shared::services::{ApiClient, ApiResponse, Transport};
use crate::shared::utils::html_table::first_paragraph_text;

pub const SEARCH_FAILED: &str = "Failed to search. Please try again later.";
pub const INVALID_RESPONSE: &str = "Received an invalid response from the server.";
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Results(Vec<Product>),
    Empty { term: String },
    Failed(String),
    /// The backend wants a login; nothing else should be requested.
    Unauthorized,
}

impl SearchOutcome {
    pub fn products(&self) -> &[Product] {
        match self {
            SearchOutcome::Results(products) => products,
            _ => &[],
        }
    }

    /// Line shown above the (empty) result grid, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            SearchOutcome::Empty { term } => Some(format!(
                "No results found for \"{term}\". Try a different search term."
            )),
            SearchOutcome::Failed(message) => Some(message.clone()),
            SearchOutcome::Results(_) | SearchOutcome::Unauthorized => None,
        }
    }
}

/// Term to search for when the page is opened with `product_name`.
/// A blank parameter means the form is shown without results.
pub fn requested_term(product_name: &str) -> Option<String> {
    let term = product_name.trim();
    (!term.is_empty()).then(|| term.to_string())
}

pub async fn search_products<T: Transport>(api: &ApiClient<T>, term: &str) -> SearchOutcome {
    let query = [("product_name", term), ("format", "json")];
    let response = match api.get(LogOperation::Search, "/search", &query).await {
        Ok(response) => response,
        Err(_) => return SearchOutcome::Failed(SEARCH_FAILED.to_string()),
    };

    if response.status == 401 {
        return SearchOutcome::Unauthorized;
    }
    if !response.ok() {
        return SearchOutcome::Failed(SEARCH_FAILED.to_string());
    }

    let data: Value = match response.json() {
        Ok(data) => data,
        Err(_) => return SearchOutcome::Failed(SEARCH_FAILED.to_string()),
    };

    if let Some(error) = data.get("error").filter(|e| is_set(e)) {
        let message = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return SearchOutcome::Failed(message);
    }

    match data.get("products").and_then(Value::as_array) {
        Some(values) if values.is_empty() => {
            log_search_result(term, 0);
            SearchOutcome::Empty {
                term: term.to_string(),
            }
        }
        Some(values) => {
            let products = Product::list_from_values(values);
            log_search_result(term, products.len());
            SearchOutcome::Results(products)
        }
        None => SearchOutcome::Failed(INVALID_RESPONSE.to_string()),
    }
}

/// `null`, `false` and `""` do not count as an error.
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added { title: String },
    /// A previous click on the same product is still being processed.
    AlreadyInFlight,
    /// Session is gone; the view sends the user to `/login` shortly after.
    SessionExpired(String),
    Duplicate,
    Failed(String),
}

impl AddOutcome {
    pub fn toast(&self) -> Option<(String, ToastSeverity)> {
        match self {
            AddOutcome::Added { title } => {
                Some((format!("{title} added to wishlist!"), ToastSeverity::Success))
            }
            AddOutcome::AlreadyInFlight => None,
            AddOutcome::SessionExpired(message) | AddOutcome::Failed(message) => {
                Some((message.clone(), ToastSeverity::Error))
            }
            AddOutcome::Duplicate => Some((
                "Unable to add duplicate item to wishlist".to_string(),
                ToastSeverity::Error,
            )),
        }
    }

    /// Message under the product card, as `(text, is_error)`.
    pub fn inline(&self) -> Option<(String, bool)> {
        match self {
            AddOutcome::Added { .. } => Some(("Added to wishlist!".to_string(), false)),
            AddOutcome::AlreadyInFlight => None,
            AddOutcome::SessionExpired(message) | AddOutcome::Failed(message) => {
                Some((message.clone(), true))
            }
            AddOutcome::Duplicate => Some((
                "Duplicate detection active, please try again".to_string(),
                true,
            )),
        }
    }

    pub fn needs_login(&self) -> bool {
        matches!(self, AddOutcome::SessionExpired(_))
    }
}

/// Add a search result to the wishlist. Only one add per product key runs at a time.
pub async fn add_to_wishlist<T: Transport, S: OperationStore>(
    api: &ApiClient<T>,
    ops: &mut S,
    product: &Product,
    key: &str,
) -> AddOutcome {
    if !ops.try_begin(key, OperationStatus::Adding) {
        log_operation_in_flight(LogOperation::WishlistAdd, key);
        return AddOutcome::AlreadyInFlight;
    }

    let outcome = match post_wishlist_item(api, product).await {
        Ok(outcome) => outcome,
        Err(_) => AddOutcome::Failed(NETWORK_ERROR.to_string()),
    };

    ops.finish(key);
    outcome
}

async fn post_wishlist_item<T: Transport>(
    api: &ApiClient<T>,
    product: &Product,
) -> Result<AddOutcome, AppError> {
    let auth = api
        .get(LogOperation::WishlistAdd, "/api/check-auth", &[])
        .await?;
    if !auth.ok() {
        return Ok(AddOutcome::SessionExpired(
            "Please log in again to add items".to_string(),
        ));
    }

    let rating = if product.rating.is_empty() {
        "0".to_string()
    } else {
        product.rating.clone()
    };
    let fields = vec![
        ("title".to_string(), product.title.clone()),
        ("img".to_string(), product.image_url.clone()),
        ("price".to_string(), product.price.clone()),
        ("website".to_string(), product.website.clone()),
        ("rating".to_string(), rating),
        (
            "url".to_string(),
            cache_busted_url(&product.link, chrono::Utc::now().timestamp_millis()),
        ),
    ];

    let response = api
        .post_form(LogOperation::WishlistAdd, "/add-wishlist-item", fields)
        .await?;
    Ok(interpret_add_response(&response, &product.title))
}

fn interpret_add_response(response: &ApiResponse, title: &str) -> AddOutcome {
    if response.ok() {
        return AddOutcome::Added {
            title: title.to_string(),
        };
    }
    if response.status == 401 {
        return AddOutcome::SessionExpired("Please log in to add items".to_string());
    }
    if response.status == 409 || response.body.contains("already in wishlist") {
        return AddOutcome::Duplicate;
    }

    let json_error = response
        .json::<Value>()
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string));
    let message = json_error
        .or_else(|| first_paragraph_text(&response.body))
        .unwrap_or_else(|| "Failed to add to wishlist".to_string());
    AddOutcome::Failed(message)
}

/// Append `_t={millis}` so the backend treats every addition as a new URL.
pub fn cache_busted_url(link: &str, millis: i64) -> String {
    let separator = if link.contains('?') { '&' } else { '?' };
    format!("{link}{separator}_t={millis}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::models::OperationRegistry;
    use crate::shared::services::testing::MockTransport;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn client() -> ApiClient<MockTransport> {
        ApiClient::new(MockTransport::new(), AppConfig::default())
    }

    #[test]
    fn test_requested_term_from_url() {
        assert_eq!(requested_term("  usb hub "), Some("usb hub".to_string()));
        assert_eq!(requested_term(""), None);
        assert_eq!(requested_term("   "), None);
    }

    fn lamp() -> Product {
        Product::from_value(&serde_json::json!({
            "title": "Desk Lamp",
            "price": "$24.99",
            "website": "Shop",
            "link": "https://shop.test/lamp",
            "image_url": "https://img.test/lamp.png"
        }))
    }

    #[tokio::test]
    async fn test_search_normalizes_titles() {
        let api = client();
        api.transport().respond(
            "/search",
            ApiResponse::new(
                200,
                r#"{"products":[{"title":"A"},{"name":"B"},{"product_name":"C"},{"title":""}]}"#,
            ),
        );

        let outcome = search_products(&api, "desk").await;
        let titles: Vec<&str> = outcome.products().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C", "Product"]);
        assert!(outcome.products().iter().all(|p| !p.title.is_empty()));

        let request = &api.transport().requests()[0];
        assert!(request.accept_json);
        assert_eq!(
            request.query_pairs(),
            vec![
                ("product_name".to_string(), "desk".to_string()),
                ("format".to_string(), "json".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_search_unauthorized_stops() {
        let api = client();
        api.transport().respond("/search", ApiResponse::new(401, ""));

        let outcome = search_products(&api, "desk").await;

        assert_eq!(outcome, SearchOutcome::Unauthorized);
        assert_eq!(api.transport().requests().len(), 1);
        assert_eq!(outcome.message(), None);
    }

    #[tokio::test]
    async fn test_search_empty_message() {
        let api = client();
        api.transport()
            .respond("/search", ApiResponse::new(200, r#"{"products":[]}"#));

        let outcome = search_products(&api, "unobtainium").await;

        assert!(outcome.products().is_empty());
        assert_eq!(
            outcome.message().as_deref(),
            Some("No results found for \"unobtainium\". Try a different search term.")
        );
    }

    #[tokio::test]
    async fn test_search_error_variants() {
        let api = client();
        api.transport().respond(
            "/search",
            ApiResponse::new(200, r#"{"error":"Scraper timed out"}"#),
        );
        assert_eq!(
            search_products(&api, "x").await,
            SearchOutcome::Failed("Scraper timed out".into())
        );

        let api = client();
        api.transport()
            .respond("/search", ApiResponse::new(200, r#"{"items":[]}"#));
        assert_eq!(
            search_products(&api, "x").await,
            SearchOutcome::Failed(INVALID_RESPONSE.into())
        );

        let api = client();
        api.transport().respond("/search", ApiResponse::new(500, "oops"));
        assert_eq!(
            search_products(&api, "x").await,
            SearchOutcome::Failed(SEARCH_FAILED.into())
        );

        let api = client();
        api.transport().respond("/search", ApiResponse::new(200, "<html>"));
        assert_eq!(
            search_products(&api, "x").await,
            SearchOutcome::Failed(SEARCH_FAILED.into())
        );
    }

    #[tokio::test]
    async fn test_add_posts_product_fields() {
        let api = client();
        api.transport()
            .respond("/api/check-auth", ApiResponse::new(200, r#"{"username":"ana"}"#));
        api.transport()
            .respond("/add-wishlist-item", ApiResponse::new(200, "{}"));
        let mut ops = Rc::new(RefCell::new(OperationRegistry::new()));

        let outcome = add_to_wishlist(&api, &mut ops, &lamp(), "product-0").await;

        assert_eq!(
            outcome,
            AddOutcome::Added {
                title: "Desk Lamp".into()
            }
        );
        assert_eq!(
            outcome.toast(),
            Some(("Desk Lamp added to wishlist!".to_string(), ToastSeverity::Success))
        );
        let add = &api.transport().requests_to("/add-wishlist-item")[0];
        assert_eq!(add.form_field("title"), Some("Desk Lamp"));
        assert_eq!(add.form_field("rating"), Some("0"));
        assert!(add
            .form_field("url")
            .is_some_and(|u| u.starts_with("https://shop.test/lamp?_t=")));
        assert_eq!(ops.borrow().status("product-0"), None);
    }

    #[tokio::test]
    async fn test_double_click_sends_one_request() {
        let api = client();
        api.transport()
            .respond("/api/check-auth", ApiResponse::new(200, r#"{"username":"ana"}"#));
        api.transport()
            .respond("/add-wishlist-item", ApiResponse::new(200, "{}"));
        let release = api.transport().gate("/add-wishlist-item");

        let registry = Rc::new(RefCell::new(OperationRegistry::new()));
        let mut first_ops = Rc::clone(&registry);
        let mut second_ops = Rc::clone(&registry);
        let product = lamp();

        let (first, second, _) = futures::join!(
            add_to_wishlist(&api, &mut first_ops, &product, "product-0"),
            add_to_wishlist(&api, &mut second_ops, &product, "product-0"),
            async move {
                let _ = release.send(());
            }
        );

        assert!(matches!(first, AddOutcome::Added { .. }));
        assert_eq!(second, AddOutcome::AlreadyInFlight);
        assert_eq!(api.transport().requests_to("/add-wishlist-item").len(), 1);
        assert_eq!(registry.borrow().status("product-0"), None);
    }

    #[tokio::test]
    async fn test_add_with_expired_session() {
        let api = client();
        api.transport()
            .respond("/api/check-auth", ApiResponse::new(401, ""));
        let mut ops = Rc::new(RefCell::new(OperationRegistry::new()));

        let outcome = add_to_wishlist(&api, &mut ops, &lamp(), "k").await;

        assert_eq!(
            outcome,
            AddOutcome::SessionExpired("Please log in again to add items".into())
        );
        assert!(outcome.needs_login());
        assert!(api.transport().requests_to("/add-wishlist-item").is_empty());
    }

    #[tokio::test]
    async fn test_add_network_error_releases_key() {
        let api = client();
        api.transport().fail("/api/check-auth", "offline");
        let mut ops = Rc::new(RefCell::new(OperationRegistry::new()));

        let outcome = add_to_wishlist(&api, &mut ops, &lamp(), "k").await;

        assert_eq!(outcome, AddOutcome::Failed(NETWORK_ERROR.into()));
        assert!(ops.borrow_mut().try_begin("k", OperationStatus::Adding));
    }

    #[test]
    fn test_add_response_interpretation() {
        assert_eq!(
            interpret_add_response(&ApiResponse::new(401, ""), "x"),
            AddOutcome::SessionExpired("Please log in to add items".into())
        );
        assert_eq!(
            interpret_add_response(&ApiResponse::new(409, ""), "x"),
            AddOutcome::Duplicate
        );
        assert_eq!(
            interpret_add_response(&ApiResponse::new(400, "Item already in wishlist"), "x"),
            AddOutcome::Duplicate
        );
        assert_eq!(
            interpret_add_response(&ApiResponse::new(400, r#"{"error":"Bad price"}"#), "x"),
            AddOutcome::Failed("Bad price".into())
        );
        assert_eq!(
            interpret_add_response(&ApiResponse::new(500, "<h1>Oops</h1><p>Database locked</p>"), "x"),
            AddOutcome::Failed("Database locked".into())
        );
        assert_eq!(
            interpret_add_response(&ApiResponse::new(500, ""), "x"),
            AddOutcome::Failed("Failed to add to wishlist".into())
        );
    }

    #[test]
    fn test_cache_busted_url() {
        assert_eq!(cache_busted_url("https://s.test/p", 5), "https://s.test/p?_t=5");
        assert_eq!(cache_busted_url("https://s.test/p?id=1", 5), "https://s.test/p?id=1&_t=5");
    }
}
