//! Native transport for desktop builds and server-side rendering.
//!
//! Two reqwest clients share one cookie jar: the default one follows
//! redirects, the other surfaces them for the login/register flow.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{cookie::Jar, header, multipart, redirect::Policy, Client};

use super::transport::{read_body, ApiRequest, ApiResponse, Method, RequestBody, Transport};
use crate::shared::errors::TransportError;

#[derive(Debug, Clone)]
pub struct NativeTransport {
    client: Client,
    manual_client: Client,
}

impl NativeTransport {
    pub fn new() -> Self {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()
            .unwrap_or_default();
        let manual_client = Client::builder()
            .cookie_provider(jar)
            .redirect(Policy::none())
            .build()
            .unwrap_or_default();

        Self {
            client,
            manual_client,
        }
    }
}

impl Default for NativeTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn network(err: reqwest::Error) -> TransportError {
    TransportError::Network(err.to_string())
}

#[async_trait(?Send)]
impl Transport for NativeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let client = if request.manual_redirect {
            &self.manual_client
        } else {
            &self.client
        };

        let mut builder = match request.method {
            Method::Get => client.get(&request.url),
            Method::Post => client.post(&request.url),
        };
        if request.accept_json {
            builder = builder.header(header::ACCEPT, "application/json");
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Multipart(fields) => {
                let form = fields
                    .into_iter()
                    .fold(multipart::Form::new(), |form, (name, value)| form.text(name, value));
                builder.multipart(form)
            }
            RequestBody::Json(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(json),
        };

        let response = builder.send().await.map_err(network)?;
        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = read_body(response.text().await)?;

        Ok(ApiResponse {
            status,
            location,
            opaque_redirect: false,
            body,
        })
    }

    async fn submit_form(
        &self,
        action: &str,
        fields: &[(String, String)],
    ) -> Result<(), TransportError> {
        self.client
            .post(action)
            .form(fields)
            .send()
            .await
            .map_err(network)?;
        Ok(())
    }
}
