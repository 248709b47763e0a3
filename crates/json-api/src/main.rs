//! Coupons JSON API Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info};

use coupons::prelude::CouponsFixture;

use crate::{applications::responses::ApplicationResponse, config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod applications;
mod config;
mod extensions;
mod healthcheck;
mod observability;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Coupons JSON API Server entry point
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

    if let Err(init_error) = observability::init_logging(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let fixture = match CouponsFixture::from_path(&config.coupons.fixture) {
        Ok(fixture) => fixture,
        Err(fixture_error) => {
            error!(
                "failed to load coupons from {}: {fixture_error}",
                config.coupons.fixture.display()
            );

            process::exit(1);
        }
    };

    let state = State::from_fixture(&fixture, config.coupons.demo_code.clone());

    info!(
        course = state.course.name(),
        coupons = state.service.len(),
        "loaded coupons fixture"
    );

    let demo = state.service.apply_coupon(&state.course, &state.demo_code);

    match serde_json::to_string(&ApplicationResponse::from(&demo)) {
        Ok(body) => info!(code = %state.demo_code, "demo application: {body}"),
        Err(source) => error!("failed to serialize demo application: {source}"),
    }

    let addr = config.socket_addr();

    info!("Server running at http://{addr}/");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router::app_router(state)).await;
}
