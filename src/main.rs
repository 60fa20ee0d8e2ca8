use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

mod config;
mod dispatch;
mod event;
mod functions;
mod handler;
mod logger;
mod response;
mod routing;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // Resolve handlers and build the route table before anything listens;
    // a bad route list must never reach the accept loop.
    let mut registry = handler::HandlerRegistry::new();
    functions::register_builtins(&mut registry);
    let routes = routing::RouteTable::build(&cfg.routes, &registry)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, routes))
}

async fn async_main(
    cfg: config::Config,
    routes: routing::RouteTable,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(dispatch::AppState {
        config: cfg,
        routes,
    });
    let connections = Arc::new(AtomicUsize::new(0));

    // Accept until the process is told to stop. In-flight requests are
    // dropped with the runtime; there is no graceful drain.
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        server::accept_connection(stream, peer_addr, &state, &connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = tokio::signal::ctrl_c() => {
                println!("\n[Shutdown] Ctrl-C received, stopping accept loop");
                break;
            }
        }
    }

    Ok(())
}
