//! Handler invocation boundary
//!
//! A handler is a single-entry capability: given one `InvocationEvent` it
//! asynchronously produces one `InvocationResult` or fails. The core never
//! loads handler code itself; handlers are registered by name up front and
//! resolved into opaque references before the route table is built.

use crate::event::{InvocationEvent, InvocationResult};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Error produced by a failing handler invocation.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Boxed future returned by a handler invocation.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<InvocationResult, HandlerError>> + Send>>;

/// The contract every loaded handler must satisfy.
///
/// Invocation may suspend (I/O-bound) and may fail. The dispatcher performs
/// exactly one invocation attempt per request; no retries, no deduplication.
pub trait Handler: Send + Sync {
    fn invoke(&self, event: InvocationEvent) -> HandlerFuture;
}

// Any async fn / async closure over an event is a handler.
impl<F, Fut> Handler for F
where
    F: Fn(InvocationEvent) -> Fut + Send + Sync,
    Fut: Future<Output = Result<InvocationResult, HandlerError>> + Send + 'static,
{
    fn invoke(&self, event: InvocationEvent) -> HandlerFuture {
        Box::pin(self(event))
    }
}

/// Shared, already-resolved reference to an invocable handler.
pub type HandlerRef = Arc<dyn Handler>;

/// Startup-time registry mapping handler names to resolved references.
///
/// Populated before the server starts; route declarations refer to entries
/// by name. Read-only once the route table has been built.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, HandlerRef>,
}

impl HandlerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under a name, replacing any previous entry.
    pub fn register<H>(&mut self, name: &str, handler: H)
    where
        H: Handler + 'static,
    {
        self.handlers.insert(name.to_string(), Arc::new(handler));
    }

    /// Look up a handler reference by registered name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<HandlerRef> {
        self.handlers.get(name).map(Arc::clone)
    }
}
