//! REST API Bindings
//!
//! Frontend bindings to the backend endpoints, organized by domain. Each
//! domain module builds plain `ApiRequest` values; `execute` and
//! `fetch_json` are the only places that touch `fetch`.

mod anime;
mod comment;
mod watchlist;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::error::{js_message, ApiError};

// Re-export all public items
pub use anime::*;
pub use comment::*;
pub use watchlist::*;

pub const API_ROOT: &str = "/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully described request, independent of the browser
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None }
    }

    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Build(e.to_string()))?;
        self.body = Some(json);
        Ok(self)
    }
}

async fn send(req: &ApiRequest) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(req.method.as_str());
    opts.set_credentials(RequestCredentials::SameOrigin);
    if let Some(body) = &req.body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&req.path, &opts)
        .map_err(|e| ApiError::Build(js_message(&e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Build(js_message(&e)))?;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_message(&e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| ApiError::Decode("fetch did not resolve to a Response".to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

/// Send a request whose response body is ignored
pub async fn execute(req: &ApiRequest) -> Result<(), ApiError> {
    send(req).await.map(|_| ())
}

/// Send a request and decode its JSON body
pub async fn fetch_json<T: DeserializeOwned>(req: &ApiRequest) -> Result<T, ApiError> {
    let response = send(req).await?;
    let promise = response.text().map_err(|e| ApiError::Decode(js_message(&e)))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Network(js_message(&e)))?
        .as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}
