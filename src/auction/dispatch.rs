//! Concurrent bid dispatch and fan-in collection.
//!
//! [`dispatch`] spawns one bounded call per configured endpoint and returns
//! the receiving end of the fan-in channel. [`collect`] drains that channel
//! into a flat list of bid candidates.
//!
//! The fan-in barrier is the channel itself: every spawned call owns a
//! sender clone and releases it when the call reaches a terminal state
//! (response, error, or timeout abandonment). The receiver sees the stream
//! close exactly when the last call resolves, so a collector can never
//! finish early, and nothing outlives the request that spawned it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::debug;

use crate::exchange::{AdRequest, AdResponse, AdResponseImp, BidSource};

/// Fan a bid request out to every endpoint, each call bounded by `per_call`.
///
/// Calls run concurrently and independently: a slow or failing endpoint
/// neither delays nor cancels its siblings. Failures and timeouts are
/// logged at debug level and dropped; they surface only as fewer bids on
/// the returned stream.
///
/// # Arguments
/// * `source` - The bid source shared by all calls
/// * `endpoints` - Upstream addresses, one call each
/// * `per_call` - Hard timeout applied to each call individually
/// * `request` - The bid request, shared read-only across calls
///
/// # Returns
/// A receiver yielding one [`AdResponse`] per successful call; it closes
/// once all calls have resolved.
pub fn dispatch<S>(
    source: Arc<S>,
    endpoints: &[String],
    per_call: Duration,
    request: Arc<AdRequest>,
) -> mpsc::Receiver<AdResponse>
where
    S: BidSource + 'static,
{
    // Capacity covers one result per endpoint, so a send never blocks and
    // every task can reach its end (and drop its sender) even if the
    // receiver is slow or gone. mpsc requires capacity >= 1.
    let (tx, rx) = mpsc::channel(endpoints.len().max(1));

    for endpoint in endpoints {
        let source = Arc::clone(&source);
        let request = Arc::clone(&request);
        let endpoint = endpoint.clone();
        let tx = tx.clone();

        tokio::spawn(async move {
            match timeout(per_call, source.request_bids(&endpoint, &request)).await {
                Ok(Ok(response)) => {
                    // Send fails only when the receiver is gone, in which
                    // case nobody wants the bid anymore.
                    let _ = tx.send(response).await;
                }
                Ok(Err(e)) => {
                    debug!(endpoint = %endpoint, error = %e, "Dropping failed bid call");
                }
                Err(_) => {
                    debug!(
                        endpoint = %endpoint,
                        timeout_ms = per_call.as_millis() as u64,
                        "Abandoning bid call at timeout"
                    );
                }
            }
        });
    }

    // The spawned clones are now the only senders; the receiver observes
    // the channel close when the last call releases its clone.
    drop(tx);
    rx
}

/// Drain the dispatch stream, pooling every imp from every response.
///
/// Returns once the stream closes, which by construction is after all
/// dispatched calls have resolved. The result keeps arrival order; an
/// empty result means no upstream produced a usable bid.
pub async fn collect(mut responses: mpsc::Receiver<AdResponse>) -> Vec<AdResponseImp> {
    let mut imps = Vec::new();
    while let Some(response) = responses.recv().await {
        imps.extend(response.imp);
    }
    imps
}

// =============================================================================
// Tests
// =============================================================================
