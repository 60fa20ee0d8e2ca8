//! Built-in demo function handlers
//!
//! Stand-ins for the function code a real deployment would bundle. They are
//! registered by name so the declared routes in `devkit.toml` can refer to
//! them; replace or extend this set when wiring your own handlers.

use crate::event::{InvocationEvent, InvocationResult};
use crate::handler::HandlerRegistry;
use serde_json::json;

/// Register the demo handlers shipped with the harness.
pub fn register_builtins(registry: &mut HandlerRegistry) {
    registry.register("get_users", |_event: InvocationEvent| async {
        let body = json!([
            { "id": 1, "name": "Alice" },
            { "id": 2, "name": "Bob" }
        ]);
        Ok(InvocationResult {
            status_code: 200,
            body: body.to_string(),
        })
    });

    registry.register("echo", |event: InvocationEvent| async move {
        let body = json!({
            "method": event.http_method,
            "path": event.path,
            "query": event.query_string_parameters,
            "body": event.body,
        });
        Ok(InvocationResult {
            status_code: 200,
            body: body.to_string(),
        })
    });
}
