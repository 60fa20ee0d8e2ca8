//! Route table construction and lookup
//!
//! The table is built once at startup from the declared route list and a
//! handler registry, then shared read-only for the life of the process.
//! Lookup walks the table in declaration order and returns the first
//! matching route; there is no best-match or longest-prefix scoring, so an
//! early catch-all deliberately shadows everything declared after it.
//!
//! Matching is by path only. The declared method is kept for logging but
//! never filters selection: a POST to a path declared only for GET still
//! dispatches to that route's handler. This mirrors the simulated gateway
//! and is a known quirk, not an oversight.

use crate::config::{RouteMethod, RouteSpec};
use crate::handler::{HandlerRef, HandlerRegistry};
use crate::routing::matcher::{normalize_path, PathMatcher};
use std::fmt;
use std::time::Duration;

/// One declared route, with its pattern compiled and handler resolved.
pub struct RouteDescriptor {
    pub method: RouteMethod,
    /// Normalized declared path (leading `/`, or the bare `*` token).
    pub path: String,
    pub matcher: PathMatcher,
    pub handler: HandlerRef,
    /// Invocation budget for the handler call.
    pub timeout: Duration,
}

/// Ordered, immutable collection of route descriptors.
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

/// Startup-time route configuration errors. Fatal: the server must not
/// begin listening with a table that failed to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    NoRoutes,
    UnknownHandler { route: String, handler: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRoutes => write!(f, "no routes declared in configuration"),
            Self::UnknownHandler { route, handler } => {
                write!(f, "route {route} refers to unregistered handler '{handler}'")
            }
        }
    }
}

impl std::error::Error for RouteError {}

impl RouteTable {
    /// Build the table from declared specs, resolving handler names against
    /// the registry and compiling each path pattern once.
    pub fn build(specs: &[RouteSpec], registry: &HandlerRegistry) -> Result<Self, RouteError> {
        if specs.is_empty() {
            return Err(RouteError::NoRoutes);
        }

        let mut routes = Vec::with_capacity(specs.len());
        for spec in specs {
            let handler =
                registry
                    .resolve(&spec.handler)
                    .ok_or_else(|| RouteError::UnknownHandler {
                        route: spec.path.clone(),
                        handler: spec.handler.clone(),
                    })?;
            let path = normalize_path(&spec.path);
            routes.push(RouteDescriptor {
                method: spec.method,
                matcher: PathMatcher::compile(&path),
                path,
                handler,
                timeout: Duration::from_millis(spec.timeout_ms),
            });
        }

        Ok(Self { routes })
    }

    /// Find the first route whose pattern matches the request path.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.matcher.matches(path))
    }

    /// Iterate declared routes in order (startup logging).
    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{InvocationEvent, InvocationResult};

    fn registry_with(names: &[&str]) -> HandlerRegistry {
        let mut registry = HandlerRegistry::new();
        for name in names {
            registry.register(name, |_event: InvocationEvent| async {
                Ok(InvocationResult {
                    status_code: 200,
                    body: String::new(),
                })
            });
        }
        registry
    }

    fn spec(method: RouteMethod, path: &str, handler: &str) -> RouteSpec {
        RouteSpec {
            method,
            path: path.to_string(),
            handler: handler.to_string(),
            timeout_ms: 30_000,
        }
    }

    #[test]
    fn test_empty_route_list_is_fatal() {
        let registry = registry_with(&[]);
        assert_eq!(
            RouteTable::build(&[], &registry).err(),
            Some(RouteError::NoRoutes)
        );
    }

    #[test]
    fn test_unknown_handler_is_fatal() {
        let registry = registry_with(&["known"]);
        let specs = vec![spec(RouteMethod::Get, "/users", "unknown")];
        let err = RouteTable::build(&specs, &registry).err().unwrap();
        assert_eq!(
            err,
            RouteError::UnknownHandler {
                route: String::from("/users"),
                handler: String::from("unknown"),
            }
        );
    }

    #[test]
    fn test_paths_are_normalized_on_build() {
        let registry = registry_with(&["h"]);
        let specs = vec![spec(RouteMethod::Get, "users", "h")];
        let table = RouteTable::build(&specs, &registry).unwrap();
        assert!(table.find("/users").is_some());
        assert_eq!(table.iter().next().unwrap().path, "/users");
    }

    #[test]
    fn test_first_match_wins_in_declaration_order() {
        let registry = registry_with(&["h1", "h2", "h3"]);
        let specs = vec![
            spec(RouteMethod::Get, "/users/*", "h1"),
            spec(RouteMethod::Get, "*", "h2"),
            spec(RouteMethod::Get, "/users/42", "h3"),
        ];
        let table = RouteTable::build(&specs, &registry).unwrap();

        // The wildcard route declared first wins over both the catch-all
        // and the later exact route.
        let matched = table.find("/users/42").unwrap();
        assert_eq!(matched.path, "/users/*");

        // Anything else falls through to the catch-all.
        let matched = table.find("/orders").unwrap();
        assert_eq!(matched.path, "*");
    }

    #[test]
    fn test_early_catch_all_shadows_later_routes() {
        let registry = registry_with(&["h1", "h2"]);
        let specs = vec![
            spec(RouteMethod::Get, "*", "h1"),
            spec(RouteMethod::Get, "/users", "h2"),
        ];
        let table = RouteTable::build(&specs, &registry).unwrap();
        assert_eq!(table.find("/users").unwrap().path, "*");
    }

    #[test]
    fn test_no_match_is_none_regardless_of_method() {
        let registry = registry_with(&["h"]);
        let specs = vec![spec(RouteMethod::Get, "/users", "h")];
        let table = RouteTable::build(&specs, &registry).unwrap();
        assert!(table.find("/missing").is_none());
        // Method never filters: the path either matches or it does not.
        assert_eq!(table.find("/users").unwrap().method, RouteMethod::Get);
    }
}
