//! `gloo-net` implementation of the [`Transport`] port.

use gloo_net::http::{Request, RequestBuilder, Response};
use listhub_app::ports::Transport;
use listhub_app::ports::transport::Query;
use listhub_domain::error::RequestError;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// Browser `fetch` transport rooted at one backend origin.
#[derive(Debug, Clone)]
pub struct GlooTransport {
    base: String,
}

impl GlooTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

impl Transport for GlooTransport {
    type File = File;

    async fn get(&self, path: &str, query: &Query) -> Result<Value, RequestError> {
        let request = Request::get(&self.url(path)).query(query.iter().map(|(k, v)| (*k, v)));
        let resp = request.send().await.map_err(fetch_error)?;
        check_response(resp).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, RequestError> {
        send_json(Request::post(&self.url(path)), body).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, RequestError> {
        send_json(Request::put(&self.url(path)), body).await
    }

    async fn delete(&self, path: &str) -> Result<Value, RequestError> {
        let resp = Request::delete(&self.url(path))
            .send()
            .await
            .map_err(fetch_error)?;
        check_response(resp).await
    }

    async fn upload(&self, path: &str, file: File) -> Result<Value, RequestError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob("file", &file).map_err(js_error)?;
        // No explicit content type: the browser sets the multipart boundary.
        let resp = Request::post(&self.url(path))
            .body(form)
            .map_err(fetch_error)?
            .send()
            .await
            .map_err(fetch_error)?;
        check_response(resp).await
    }
}

async fn send_json(builder: RequestBuilder, body: &Value) -> Result<Value, RequestError> {
    let resp = builder
        .json(body)
        .map_err(fetch_error)?
        .send()
        .await
        .map_err(fetch_error)?;
    check_response(resp).await
}

/// Check the HTTP status and parse the body.
///
/// Non-2xx responses fail with the raw response text. Empty success bodies
/// (e.g. after a `DELETE`) parse as `null`.
async fn check_response(resp: Response) -> Result<Value, RequestError> {
    let status = resp.status();
    let text = resp.text().await.map_err(fetch_error)?;
    if !resp.ok() {
        let message = if text.trim().is_empty() {
            format!("HTTP {status} {}", resp.status_text())
        } else {
            text
        };
        tracing::warn!(status, url = %resp.url(), "request failed");
        return Err(RequestError::status(status, message));
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|err| RequestError::transport(err.to_string()))
}

#[allow(clippy::needless_pass_by_value)]
fn fetch_error(err: gloo_net::Error) -> RequestError {
    RequestError::transport(err.to_string())
}

#[allow(clippy::needless_pass_by_value)]
fn js_error(err: JsValue) -> RequestError {
    RequestError::transport(format!("{err:?}"))
}
