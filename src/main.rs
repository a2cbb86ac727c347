//! tilebid server binary.
//!
//! Parses the CLI, wires the HTTP bid source into the auction service,
//! and serves the placement endpoint over axum.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tilebid::{create_router, AuctionService, Config, HttpBidSource, RouterConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Initialize logging
    init_logging(config.verbose);

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Configuration:");
    info!("  Upstream bidders ({}):", config.upstreams.len());
    for upstream in &config.upstreams {
        info!("    {}", upstream);
    }
    info!("  Bid timeout:     {}ms per upstream call", config.bid_timeout_ms);
    info!("  Request timeout: {}ms", config.request_timeout_ms);

    // Wire the HTTP bid source into the auction service
    let service = AuctionService::new(
        HttpBidSource::new(),
        config.upstreams.clone(),
        config.bid_timeout(),
    );

    // Build the router
    let router_config = RouterConfig::new()
        .with_request_timeout(config.request_timeout())
        .with_tracing(!config.no_tracing);
    let router = create_router(service, router_config);

    let addr = config.bind_address();

    info!("");
    info!("  Server listening on: http://{}", addr);
    info!("");
    info!("  Try these endpoints:");
    info!("    curl http://{}/health", addr);
    info!(
        "    curl -X POST http://{}/placements/request -H 'Content-Type: application/json' -d @placement.json",
        addr
    );
    info!("");

    // Bind and serve
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing subscriber.
///
/// Respects `RUST_LOG` when set; otherwise defaults to info-level
/// output (debug with `--verbose`).
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "tilebid=debug,tower_http=debug"
    } else {
        "tilebid=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
