// Server module entry point
// Listener construction and per-connection serving

pub mod connection;
pub mod listener;

pub use connection::accept_connection;
pub use listener::create_reusable_listener;
