//! HTTP transport seam
//!
//! Services build `ApiRequest`s and read `ApiResponse`s; the platform decides
//! how bytes move (browser fetch, reqwest on native, a recorder in tests).

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::shared::errors::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    /// Sent as `multipart/form-data`, like a browser `FormData`.
    Multipart(Vec<(String, String)>),
    /// Serialized JSON document.
    Json(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
    pub accept_json: bool,
    /// Surface 3xx responses instead of following them.
    pub manual_redirect: bool,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: RequestBody::Empty,
            accept_json: false,
            manual_redirect: false,
        }
    }

    pub fn post(url: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body,
            accept_json: false,
            manual_redirect: false,
        }
    }

    pub fn accept_json(mut self) -> Self {
        self.accept_json = true;
        self
    }

    pub fn manual_redirect(mut self) -> Self {
        self.manual_redirect = true;
        self
    }

    /// Path component of the URL, without query string.
    pub fn path(&self) -> &str {
        let after_scheme = self.url.split_once("://").map(|(_, rest)| rest).unwrap_or(&self.url);
        let path_start = after_scheme.find('/').unwrap_or(after_scheme.len());
        let path_and_query = &after_scheme[path_start..];
        path_and_query.split('?').next().unwrap_or("")
    }

    /// Decoded query parameters, in order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let Some((_, query)) = self.url.split_once('?') else {
            return Vec::new();
        };
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect()
    }

    /// Value of a multipart field, if the body is a form.
    pub fn form_field(&self, name: &str) -> Option<&str> {
        match &self.body {
            RequestBody::Multipart(fields) => fields
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }
}

fn decode(value: &str) -> String {
    let spaced = value.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|v| v.into_owned())
        .unwrap_or(spaced)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiResponse {
    pub status: u16,
    pub location: Option<String>,
    /// Browser fetch with `redirect: manual` hides 3xx details behind an
    /// opaque-redirect response with status 0.
    pub opaque_redirect: bool,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn opaque_redirect() -> Self {
        Self {
            opaque_redirect: true,
            ..Default::default()
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_redirect(&self) -> bool {
        self.status == 301 || self.status == 302 || self.opaque_redirect
    }

    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

/// Platform HTTP access. Cookies are always included.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;

    /// Post `fields` as a plain HTML form without reading the answer.
    async fn submit_form(
        &self,
        action: &str,
        fields: &[(String, String)],
    ) -> Result<(), TransportError>;
}

/// Response text, with a failed read reported as a network error.
pub fn read_body<E: std::fmt::Display>(
    text: std::result::Result<String, E>,
) -> Result<String, TransportError> {
    text.map_err(|e| TransportError::Network(format!("could not read response body: {e}")))
}
