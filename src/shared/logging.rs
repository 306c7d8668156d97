//! Structured logging helpers for the Slash web client
//!
//! Every backend round-trip is logged with an `operation` field so browser
//! console output and desktop/server logs can be filtered the same way.

/// Operations that talk to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOperation {
    SessionCheck,
    Credentials,
    OAuthExchange,
    Search,
    WishlistAdd,
    WishlistRemove,
    WishlistFetch,
    WishlistShare,
    Recommendations,
    Proxy,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::SessionCheck => "session_check",
            LogOperation::Credentials => "credentials",
            LogOperation::OAuthExchange => "oauth_exchange",
            LogOperation::Search => "search",
            LogOperation::WishlistAdd => "wishlist_add",
            LogOperation::WishlistRemove => "wishlist_remove",
            LogOperation::WishlistFetch => "wishlist_fetch",
            LogOperation::WishlistShare => "wishlist_share",
            LogOperation::Recommendations => "recommendations",
            LogOperation::Proxy => "proxy",
        }
    }
}

/// Log an outgoing request
pub fn log_request(operation: LogOperation, method: &str, url: &str) {
    tracing::debug!(
        operation = operation.as_str(),
        method = method,
        url = url,
        "Sending request"
    );
}

/// Log the HTTP status of a completed request
pub fn log_response(operation: LogOperation, status: u16) {
    if (200..400).contains(&status) {
        tracing::debug!(
            operation = operation.as_str(),
            status = status,
            "Request completed"
        );
    } else {
        tracing::warn!(
            operation = operation.as_str(),
            status = status,
            "Backend returned an error status"
        );
    }
}

/// Log a failure that prevented any response
pub fn log_failure(operation: LogOperation, error: &str) {
    tracing::error!(
        operation = operation.as_str(),
        error = error,
        "Request failed"
    );
}

/// Log the result of a session check
pub fn log_session_check(authenticated: bool, user: Option<&str>) {
    tracing::info!(
        operation = LogOperation::SessionCheck.as_str(),
        authenticated = authenticated,
        user = user.unwrap_or(""),
        "Session checked"
    );
}

/// Log a completed search
pub fn log_search_result(term: &str, product_count: usize) {
    tracing::info!(
        operation = LogOperation::Search.as_str(),
        term = term,
        product_count = product_count,
        "Search completed"
    );
}

/// Log which wishlist payload format the backend answered with
pub fn log_wishlist_format(format: &str, item_count: usize) {
    tracing::info!(
        operation = LogOperation::WishlistFetch.as_str(),
        format = format,
        item_count = item_count,
        "Wishlist loaded"
    );
}

/// Log a skipped duplicate operation on a busy item
pub fn log_operation_in_flight(operation: LogOperation, key: &str) {
    tracing::debug!(
        operation = operation.as_str(),
        item = key,
        "Operation already in flight, ignoring"
    );
}

/// Log the use of the form-post fallback
pub fn log_fallback(operation: LogOperation, key: &str) {
    tracing::warn!(
        operation = operation.as_str(),
        item = key,
        "Direct request failed, using form fallback"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::SessionCheck.as_str(), "session_check");
        assert_eq!(LogOperation::Credentials.as_str(), "credentials");
        assert_eq!(LogOperation::OAuthExchange.as_str(), "oauth_exchange");
        assert_eq!(LogOperation::Search.as_str(), "search");
        assert_eq!(LogOperation::WishlistAdd.as_str(), "wishlist_add");
        assert_eq!(LogOperation::WishlistRemove.as_str(), "wishlist_remove");
        assert_eq!(LogOperation::WishlistFetch.as_str(), "wishlist_fetch");
        assert_eq!(LogOperation::WishlistShare.as_str(), "wishlist_share");
        assert_eq!(LogOperation::Recommendations.as_str(), "recommendations");
        assert_eq!(LogOperation::Proxy.as_str(), "proxy");
    }
}
