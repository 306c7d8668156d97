//! Browser transport (WASM only)
//!
//! Uses the fetch API through gloo-net. Credentials are always included so
//! the backend session cookie travels with every request.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    FormData, HtmlFormElement, HtmlIFrameElement, HtmlInputElement, RequestCredentials,
    RequestRedirect, ResponseType,
};

use super::transport::{read_body, ApiRequest, ApiResponse, Method, RequestBody, Transport};
use crate::shared::errors::TransportError;

/// How long the hidden iframe stays in the page after a fallback submit.
const IFRAME_LINGER_MS: u32 = 2_000;

#[derive(Debug, Clone, Default)]
pub struct BrowserTransport;

impl BrowserTransport {
    pub fn new() -> Self {
        Self
    }
}

fn js_error(context: &str, err: JsValue) -> TransportError {
    TransportError::Browser(format!("{context}: {err:?}"))
}

fn form_data(fields: &[(String, String)]) -> Result<FormData, TransportError> {
    let data = FormData::new().map_err(|e| js_error("FormData", e))?;
    for (name, value) in fields {
        data.append_with_str(name, value)
            .map_err(|e| js_error("FormData.append", e))?;
    }
    Ok(data)
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        builder = builder.credentials(RequestCredentials::Include);

        if request.manual_redirect {
            builder = builder.redirect(RequestRedirect::Manual);
        }
        if request.accept_json {
            builder = builder.header("Accept", "application/json");
        }

        // Content-Type for multipart is left to the browser so it can add the boundary
        let built = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Multipart(fields) => builder.body(form_data(&fields)?),
            RequestBody::Json(json) => builder.header("Content-Type", "application/json").body(json),
        }
        .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let location = response.headers().get("Location");
        let opaque_redirect = response.type_() == ResponseType::Opaqueredirect;
        // Opaque responses have no readable body
        let body = if opaque_redirect {
            String::new()
        } else {
            read_body(response.text().await)?
        };

        Ok(ApiResponse {
            status,
            location,
            opaque_redirect,
            body,
        })
    }

    async fn submit_form(
        &self,
        action: &str,
        fields: &[(String, String)],
    ) -> Result<(), TransportError> {
        let window = web_sys::window().ok_or_else(|| TransportError::Browser("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| TransportError::Browser("no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| TransportError::Browser("no body".into()))?;

        let iframe: HtmlIFrameElement = document
            .create_element("iframe")
            .map_err(|e| js_error("create iframe", e))?
            .dyn_into()
            .map_err(|e| js_error("cast iframe", e.into()))?;
        iframe
            .style()
            .set_property("display", "none")
            .map_err(|e| js_error("hide iframe", e))?;
        body.append_child(&iframe)
            .map_err(|e| js_error("attach iframe", e))?;

        let frame_document = iframe
            .content_document()
            .ok_or_else(|| TransportError::Browser("iframe has no document".into()))?;

        let form: HtmlFormElement = frame_document
            .create_element("form")
            .map_err(|e| js_error("create form", e))?
            .dyn_into()
            .map_err(|e| js_error("cast form", e.into()))?;
        form.set_method("POST");
        form.set_action(action);

        for (name, value) in fields {
            let input: HtmlInputElement = frame_document
                .create_element("input")
                .map_err(|e| js_error("create input", e))?
                .dyn_into()
                .map_err(|e| js_error("cast input", e.into()))?;
            input.set_name(name);
            input.set_value(value);
            form.append_child(&input)
                .map_err(|e| js_error("attach input", e))?;
        }

        frame_document
            .body()
            .ok_or_else(|| TransportError::Browser("iframe has no body".into()))?
            .append_child(&form)
            .map_err(|e| js_error("attach form", e))?;
        form.submit().map_err(|e| js_error("submit form", e))?;

        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(IFRAME_LINGER_MS).await;
            iframe.remove();
        });

        Ok(())
    }
}
