use std::rc::Rc;

use serde::Serialize;

use super::transport::{ApiRequest, ApiResponse, RequestBody, Transport};
use crate::config::AppConfig;
use crate::shared::errors::Result;
use crate::shared::logging::{log_failure, log_request, log_response, LogOperation};

#[cfg(target_arch = "wasm32")]
pub type PlatformTransport = super::browser::BrowserTransport;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTransport = super::native::NativeTransport;

/// Client handle shared by every view through context.
pub type SharedApi = Rc<ApiClient<PlatformTransport>>;

// API client for backend HTTP requests
pub struct ApiClient<T: Transport> {
    transport: T,
    config: AppConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: AppConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute backend URL for `path`, with percent-encoded query values.
    pub fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}/{}",
            self.config.backend_url,
            path.trim_start_matches('/')
        );
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }
        url
    }

    /// Send a prepared request, logging both ends of the round-trip.
    pub async fn send(&self, operation: LogOperation, request: ApiRequest) -> Result<ApiResponse> {
        log_request(operation, request.method.as_str(), &request.url);
        match self.transport.send(request).await {
            Ok(response) => {
                log_response(operation, response.status);
                Ok(response)
            }
            Err(err) => {
                log_failure(operation, &err.to_string());
                Err(err.into())
            }
        }
    }

    // Generic GET request
    pub async fn get(
        &self,
        operation: LogOperation,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse> {
        let request = ApiRequest::get(self.endpoint(path, query)).accept_json();
        self.send(operation, request).await
    }

    // Multipart form POST
    pub async fn post_form(
        &self,
        operation: LogOperation,
        path: &str,
        fields: Vec<(String, String)>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::post(self.endpoint(path, &[]), RequestBody::Multipart(fields));
        self.send(operation, request).await
    }

    // JSON POST
    pub async fn post_json<B: Serialize>(
        &self,
        operation: LogOperation,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse> {
        let json = serde_json::to_string(body)?;
        let request =
            ApiRequest::post(self.endpoint(path, &[]), RequestBody::Json(json)).accept_json();
        self.send(operation, request).await
    }

    /// Multipart POST that hands 3xx answers back instead of following them.
    pub async fn submit_credentials_form(
        &self,
        path: &str,
        fields: Vec<(String, String)>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::post(self.endpoint(path, &[]), RequestBody::Multipart(fields))
            .manual_redirect();
        self.send(LogOperation::Credentials, request).await
    }

    /// Plain HTML form post to a backend path; the answer is not read.
    pub async fn submit_form(
        &self,
        operation: LogOperation,
        path: &str,
        fields: &[(String, String)],
    ) -> Result<()> {
        let action = self.endpoint(path, &[]);
        log_request(operation, "FORM", &action);
        self.transport.submit_form(&action, fields).await.map_err(|err| {
            log_failure(operation, &err.to_string());
            err.into()
        })
    }
}

impl ApiClient<PlatformTransport> {
    /// Client for the current platform using the process-wide configuration.
    pub fn platform() -> Self {
        Self::new(PlatformTransport::new(), AppConfig::global().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::services::testing::MockTransport;

    fn client() -> ApiClient<MockTransport> {
        ApiClient::new(MockTransport::new(), AppConfig::default())
    }

    #[test]
    fn test_endpoint_encodes_query_values() {
        let api = client();
        assert_eq!(
            api.endpoint("/search", &[("product_name", "usb c hub"), ("format", "json")]),
            "http://localhost:5000/search?product_name=usb%20c%20hub&format=json"
        );
        assert_eq!(
            api.endpoint("api/check-auth", &[]),
            "http://localhost:5000/api/check-auth"
        );
    }

    #[tokio::test]
    async fn test_get_accepts_json_and_records() {
        let api = client();
        api.transport()
            .respond("/api/check-auth", ApiResponse::new(200, "{}"));

        let response = api
            .get(LogOperation::SessionCheck, "/api/check-auth", &[])
            .await
            .unwrap();

        assert!(response.ok());
        let requests = api.transport().requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].accept_json);
        assert!(!requests[0].manual_redirect);
    }

    #[tokio::test]
    async fn test_credentials_form_uses_manual_redirect() {
        let api = client();
        api.transport()
            .respond("/login", ApiResponse::new(302, "").with_location("/"));

        let response = api
            .submit_credentials_form("/login", vec![("username".into(), "ana".into())])
            .await
            .unwrap();

        assert!(response.is_redirect());
        let requests = api.transport().requests();
        assert!(requests[0].manual_redirect);
        assert_eq!(requests[0].form_field("username"), Some("ana"));
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_app_error() {
        let api = client();
        api.transport().fail("/share", "connection refused");

        let err = api
            .post_json(LogOperation::WishlistShare, "/share", &serde_json::json!({}))
            .await
            .unwrap_err();

        assert!(err.is_transport());
    }
}
