// Configuration types module
// Defines the declarative surface consumed from devkit.toml

use serde::Deserialize;
use std::fmt;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub performance: PerformanceConfig,
    /// Declared routes, in order. Order is significant: first match wins.
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub max_body_size: u64,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub max_connections: Option<u64>,
}

/// A declared route: method + path pattern + registered handler name.
///
/// `path` may be an exact path (`/users`), the global catch-all (`*`), or
/// a pattern with an embedded wildcard (`/users/*`).
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    pub method: RouteMethod,
    pub path: String,
    /// Name under which the handler was registered. Resolved once at
    /// startup; an unknown name is a fatal configuration error.
    pub handler: String,
    /// Handler invocation budget in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[allow(clippy::missing_const_for_fn)]
fn default_timeout_ms() -> u64 {
    30_000
}

/// HTTP verbs accepted in route declarations.
///
/// `All` stands for any method. The method is informational in this
/// simulator; see the `routing` module for the path-only matching contract.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    All,
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::All => "ALL",
        };
        f.write_str(name)
    }
}
