// Configuration module entry point
// Loads and validates the declarative harness configuration

mod types;

use std::net::SocketAddr;

// Re-export public types
pub use types::{
    Config, HttpConfig, LoggingConfig, PerformanceConfig, RouteMethod, RouteSpec, ServerConfig,
};

impl Config {
    /// Load configuration from the default `devkit.toml` search path.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("devkit")
    }

    /// Load configuration from the specified file path (without extension),
    /// layered with `DEVKIT_`-prefixed environment overrides and defaults.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("DEVKIT"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 4000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("http.server_name", "gateway-devkit/0.1")?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("performance.keep_alive_timeout", 75)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
