//! Transport port — raw HTTP calls against the backend.
//!
//! Implementations own the base origin and the wire encoding. Every method
//! resolves to the parsed JSON body on a 2xx response and to a
//! [`RequestError`] carrying the raw response text otherwise. No retries, no
//! timeouts, no caching.
//!
//! Futures are not required to be `Send`: the browser implementation runs on
//! a single-threaded executor.

use std::future::Future;

use listhub_domain::error::RequestError;
use serde_json::Value;

/// Query-string pairs, in the order they are appended to the URL.
pub type Query = [(&'static str, String)];

/// HTTP transport to the backend.
pub trait Transport {
    /// Platform file handle accepted by [`Transport::upload`].
    type File;

    /// `GET {path}?{query}`.
    fn get(&self, path: &str, query: &Query) -> impl Future<Output = Result<Value, RequestError>>;

    /// `POST {path}` with a JSON body.
    fn post(&self, path: &str, body: &Value) -> impl Future<Output = Result<Value, RequestError>>;

    /// `PUT {path}` with a JSON body.
    fn put(&self, path: &str, body: &Value) -> impl Future<Output = Result<Value, RequestError>>;

    /// `DELETE {path}`.
    fn delete(&self, path: &str) -> impl Future<Output = Result<Value, RequestError>>;

    /// `POST {path}` as `multipart/form-data` with the file under `file`.
    fn upload(
        &self,
        path: &str,
        file: Self::File,
    ) -> impl Future<Output = Result<Value, RequestError>>;
}

