//! Configuration management for the bid-aggregation gateway.
//!
//! This module provides a flexible configuration system that supports:
//! - Command-line arguments via clap
//! - Environment variables with `TILEBID_` prefix
//! - Sensible defaults for all optional settings
//!
//! # Example
//!
//! ```ignore
//! use tilebid::config::Config;
//!
//! // Parse from command line and environment
//! let config = Config::parse();
//!
//! // Access configuration values
//! println!("Listening on {}", config.bind_address());
//! println!("Upstreams: {:?}", config.upstreams);
//! ```
//!
//! # Environment Variables
//!
//! All configuration options can be set via environment variables with the `TILEBID_` prefix:
//!
//! - `TILEBID_HOST` - Server bind address (default: 0.0.0.0)
//! - `TILEBID_PORT` - Server port (default: 8080)
//! - `TILEBID_UPSTREAMS` - Upstream bid endpoints as comma-separated `host:port` entries (required)
//! - `TILEBID_BID_TIMEOUT_MS` - Per-call upstream timeout in milliseconds (default: 200)
//! - `TILEBID_REQUEST_TIMEOUT_MS` - Outer request timeout in milliseconds (default: 250)

use std::time::Duration;

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default per-call upstream bid timeout in milliseconds.
pub const DEFAULT_BID_TIMEOUT_MS: u64 = 200;

/// Default outer request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 250;

// =============================================================================
// CLI Arguments
// =============================================================================

/// tilebid - A bid-aggregation gateway for tiled ad placements.
///
/// Fans each placement request out to every configured upstream bidder,
/// waits at most the per-call timeout for each, and merges the
/// highest-priced bids into one response.
#[derive(Parser, Debug, Clone)]
#[command(name = "tilebid")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "TILEBID_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "TILEBID_PORT")]
    pub port: u16,

    // =========================================================================
    // Upstream Configuration
    // =========================================================================
    /// Upstream bid endpoint as `host:port`. Repeat the flag or pass a
    /// comma-separated list for multiple upstreams.
    #[arg(long = "upstream", env = "TILEBID_UPSTREAMS", value_delimiter = ',')]
    pub upstreams: Vec<String>,

    /// Per-call upstream bid timeout in milliseconds.
    ///
    /// Each upstream call is abandoned independently once this elapses.
    #[arg(long, default_value_t = DEFAULT_BID_TIMEOUT_MS, env = "TILEBID_BID_TIMEOUT_MS")]
    pub bid_timeout_ms: u64,

    /// Outer request timeout in milliseconds.
    ///
    /// Bounds the whole inbound exchange and must leave room for the bid
    /// timeout, so it has to be strictly greater.
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_MS, env = "TILEBID_REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: u64,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        // At least one upstream is required to auction anything
        if self.upstreams.is_empty() {
            return Err(
                "At least one upstream bid endpoint is required. \
                 Pass --upstream or set TILEBID_UPSTREAMS"
                    .to_string(),
            );
        }

        // Upstream entries must look like host:port
        for upstream in &self.upstreams {
            if upstream.is_empty() {
                return Err("Upstream endpoint must not be empty".to_string());
            }
            match upstream.rsplit_once(':') {
                Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => {}
                _ => {
                    return Err(format!(
                        "Invalid upstream endpoint '{}': expected host:port",
                        upstream
                    ));
                }
            }
        }

        // Validate timeouts
        if self.bid_timeout_ms == 0 {
            return Err("bid_timeout_ms must be greater than 0".to_string());
        }
        if self.request_timeout_ms <= self.bid_timeout_ms {
            return Err(format!(
                "request_timeout_ms ({}) must be greater than bid_timeout_ms ({})",
                self.request_timeout_ms, self.bid_timeout_ms
            ));
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Per-call upstream bid timeout.
    pub fn bid_timeout(&self) -> Duration {
        Duration::from_millis(self.bid_timeout_ms)
    }

    /// Outer request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

// =============================================================================
// Tests
// =============================================================================
