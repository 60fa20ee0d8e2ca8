use crate::config::{Config, RouteMethod};
use chrono::Local;
use hyper::{Method, Uri};
use std::net::SocketAddr;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Gateway dev server started successfully");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Declared routes: {}", config.routes.len());
    for route in &config.routes {
        println!("  - {} {} -> {}", route.method, route.path, route.handler);
    }
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri) {
    println!("[{}] [{method}] {uri}", timestamp());
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        println!("[Headers] Count: {count}");
    }
}

pub fn log_route_miss(path: &str) {
    println!("[Route] No match for {path} -> 404");
}

pub fn log_route_match(declared: RouteMethod, pattern: &str, request_method: &str) {
    println!("[Route] {request_method} matched {declared} {pattern}");
}

pub fn log_dispatch_failure(method: &Method, path: &str, detail: &str) {
    eprintln!("[ERROR] Request failed: [{method}] {path}: {detail}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
