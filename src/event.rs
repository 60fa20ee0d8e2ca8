//! Event translation module
//!
//! Converts wire-level HTTP into the structured invocation contract handed
//! to function handlers, and handler results back into HTTP responses. Both
//! directions are pure mappings; the request body is attached separately by
//! the dispatcher once it has been read from the connection.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::request::Parts;
use hyper::Response;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::form_urlencoded;

/// Structured request passed to a handler, mirroring the gateway proxy
/// event shape (`camelCase` on the wire).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    /// Raw request URI as received, including any query string.
    pub resource: String,
    pub http_method: String,
    pub path: String,
    /// Reserved: no path-capture groups are extracted, always empty.
    pub path_parameters: HashMap<String, String>,
    /// Decoded query parameters; duplicate keys collapse, last value wins.
    pub query_string_parameters: HashMap<String, String>,
    /// Lower-cased header names; repeated headers comma-joined.
    pub headers: HashMap<String, String>,
    /// Raw body text, empty until the dispatcher attaches it.
    pub body: String,
    pub request_context: RequestContext,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub domain_name: String,
}

impl InvocationEvent {
    /// Build a bare event with empty parameter maps.
    #[must_use]
    pub fn new(method: &str, path: &str, resource: &str) -> Self {
        Self {
            resource: resource.to_string(),
            http_method: method.to_string(),
            path: path.to_string(),
            path_parameters: HashMap::new(),
            query_string_parameters: HashMap::new(),
            headers: HashMap::new(),
            body: String::new(),
            request_context: RequestContext {
                domain_name: String::from("localhost"),
            },
        }
    }
}

/// Structured response consumed from a handler.
///
/// The body is assumed to be pre-serialized (typically JSON) and is echoed
/// to the client byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    pub status_code: u16,
    pub body: String,
}

/// Translate a parsed request head into an invocation event.
///
/// The body is not included here; it is read from the connection by the
/// dispatcher and attached afterwards.
#[must_use]
pub fn to_event(parts: &Parts) -> InvocationEvent {
    let path = parts.uri.path().to_string();

    let mut query_string_parameters = HashMap::new();
    let query = parts.uri.query().unwrap_or("");
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        query_string_parameters.insert(key.into_owned(), value.into_owned());
    }

    let mut headers = HashMap::new();
    for name in parts.headers.keys() {
        let values: Vec<&str> = parts
            .headers
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect();
        if !values.is_empty() {
            headers.insert(name.as_str().to_string(), values.join(", "));
        }
    }

    let domain_name = parts
        .headers
        .get(hyper::header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost")
        .to_string();

    InvocationEvent {
        resource: parts.uri.to_string(),
        http_method: parts.method.as_str().to_string(),
        path,
        path_parameters: HashMap::new(),
        query_string_parameters,
        headers,
        body: String::new(),
        request_context: RequestContext { domain_name },
    }
}

/// Translate a handler result into an HTTP response.
///
/// Status code and body are written verbatim; an out-of-range status code
/// surfaces as a build error for the dispatcher's failure path.
pub fn to_http_response(result: &InvocationResult) -> Result<Response<Full<Bytes>>, hyper::http::Error> {
    Response::builder()
        .status(result.status_code)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(result.body.clone())))
}
