//! Tally GraphQL API Server

use std::process;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};
use tracing::{error, info};

use tally_app::context::AppContext;

use crate::{config::ServerConfig, graphql::GRAPHQL_PATH, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod config;
mod extensions;
mod graphql;
mod healthcheck;
mod items;
mod logging;
mod shutdown;
mod state;
mod stores;
#[cfg(test)]
mod test_helpers;
mod validation;

/// Tally GraphQL API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "the subscriber failed to install, so there is nowhere else to report"
        )]
        {
            eprintln!("Logging initialization error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!(
        database = config.database.database_name(),
        cache_read_through = config.cache.cache_read_through,
        "Starting server on {addr}"
    );

    let (app, db) = match AppContext::from_settings(config.app_settings()).await {
        Ok(initialized) => initialized,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path(GRAPHQL_PATH)
                .post(graphql::handler)
                .get(graphql::graphiql),
        );

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;

    db.shutdown().await;

    info!("server stopped");
}
