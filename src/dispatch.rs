//! Request dispatch module
//!
//! Runs exactly one request/response cycle per accepted request: preflight
//! short-circuit, bounded body accumulation, event construction, route
//! resolution, handler invocation and response translation. Any failure in
//! the cycle is caught here, logged, and converted to a generic 500 — it
//! never crosses the boundary of its own request.

use crate::config::Config;
use crate::event;
use crate::handler::HandlerError;
use crate::logger;
use crate::response;
use crate::routing::RouteTable;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::http::request::Parts;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Immutable per-process state shared by all request cycles.
///
/// Built once at startup; the route table is read-only while serving, so no
/// synchronization is needed beyond the `Arc`.
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
}

/// Failures inside one dispatch cycle. All of them collapse to the generic
/// 500 path; the detail goes to the log, never to the client.
enum DispatchError {
    Handler(HandlerError),
    Timeout(Duration),
    InvalidResult(hyper::http::Error),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handler(err) => write!(f, "handler failed: {err}"),
            Self::Timeout(budget) => {
                write!(f, "handler timed out after {}ms", budget.as_millis())
            }
            Self::InvalidResult(err) => write!(f, "invalid handler result: {err}"),
        }
    }
}

/// Body accumulation outcome distinct from dispatch failures: over-limit
/// gets its own status, transport errors fail the cycle.
enum BodyError {
    TooLarge,
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

/// Entry point for one request. Infallible by contract: every failure mode
/// becomes a response on this same connection.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body + Send,
    B::Data: Send,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    if state.config.logging.access_log {
        logger::log_request(req.method(), req.uri());
    }
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // Preflight short-circuits before any routing or body read.
    if req.method() == Method::OPTIONS {
        return Ok(finalize(response::build_preflight_response(), &state));
    }

    // Cheap reject on declared length before reading anything.
    if let Some(resp) = check_declared_body_size(&req, state.config.http.max_body_size) {
        return Ok(finalize(resp, &state));
    }

    let (parts, body) = req.into_parts();
    let response = match read_body(body, state.config.http.max_body_size).await {
        Ok(body_bytes) => match dispatch(&parts, &body_bytes, &state).await {
            Ok(resp) => resp,
            Err(err) => {
                logger::log_dispatch_failure(&parts.method, parts.uri.path(), &err.to_string());
                response::build_500_response()
            }
        },
        Err(BodyError::TooLarge) => response::build_413_response(),
        Err(BodyError::Transport(err)) => {
            logger::log_dispatch_failure(
                &parts.method,
                parts.uri.path(),
                &format!("body read failed: {err}"),
            );
            response::build_500_response()
        }
    };

    Ok(finalize(response, &state))
}

/// Route and invoke: the fallible middle of the cycle.
async fn dispatch(
    parts: &Parts,
    body: &Bytes,
    state: &AppState,
) -> Result<Response<Full<Bytes>>, DispatchError> {
    let mut event = event::to_event(parts);
    event.body = String::from_utf8_lossy(body).into_owned();

    // Path-only selection; the declared method never filters (see routing).
    let Some(route) = state.routes.find(&event.path) else {
        logger::log_route_miss(&event.path);
        return Ok(response::build_404_response());
    };
    if state.config.logging.access_log {
        logger::log_route_match(route.method, &route.path, &event.http_method);
    }

    let result = match tokio::time::timeout(route.timeout, route.handler.invoke(event)).await {
        Ok(Ok(result)) => result,
        Ok(Err(err)) => return Err(DispatchError::Handler(err)),
        Err(_) => return Err(DispatchError::Timeout(route.timeout)),
    };

    event::to_http_response(&result).map_err(DispatchError::InvalidResult)
}

/// Accumulate the request body, capped at the configured limit.
async fn read_body<B>(body: B, max_body_size: u64) -> Result<Bytes, BodyError>
where
    B: Body + Send,
    B::Data: Send,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) => {
            if err.downcast_ref::<LengthLimitError>().is_some() {
                Err(BodyError::TooLarge)
            } else {
                Err(BodyError::Transport(err))
            }
        }
    }
}

/// Validate a declared Content-Length against the body size limit.
/// Returns Some(413 response) if too large, None otherwise.
fn check_declared_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_warning(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(response::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Stamp the headers every outgoing response carries.
fn finalize(mut response: Response<Full<Bytes>>, state: &AppState) -> Response<Full<Bytes>> {
    response::apply_cors_headers(&mut response);
    if let Ok(server) = hyper::header::HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(hyper::header::SERVER, server);
    }
    response
}
