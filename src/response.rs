//! HTTP response building module
//!
//! Builders for the responses the core emits on its own, without going
//! through a handler, plus the permissive CORS headers applied to every
//! response leaving the harness.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde_json::json;

/// Build 204 No Content response for CORS preflight requests
pub fn build_preflight_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("204", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response with a structured body
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_message_response(404, "Route not found")
}

/// Build 413 Payload Too Large response with a structured body
pub fn build_413_response() -> Response<Full<Bytes>> {
    build_message_response(413, "Payload too large")
}

/// Build 500 Internal Server Error response with a structured body
///
/// Failure detail stays in the log; the body is always this generic shape.
pub fn build_500_response() -> Response<Full<Bytes>> {
    build_message_response(500, "Internal server error")
}

/// Build a `{"message": ...}` JSON response for the given status
fn build_message_response(status: u16, message: &str) -> Response<Full<Bytes>> {
    let body = json!({ "message": message }).to_string();
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body.clone())))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Apply permissive CORS headers: any origin, any method, any header.
///
/// Applied to every response the harness writes, handler-produced or not.
pub fn apply_cors_headers<B>(response: &mut Response<B>) {
    let headers = response.headers_mut();
    headers.insert(
        "Access-Control-Allow-Origin",
        hyper::header::HeaderValue::from_static("*"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        hyper::header::HeaderValue::from_static("*"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        hyper::header::HeaderValue::from_static("*"),
    );
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
