//! Periodic self-probe that defeats idle-suspension of the host.
//!
//! Some hosting environments suspend a service that receives no traffic
//! for a few minutes. [`run`] issues a lightweight GET against the
//! configured URL (normally the service's own health endpoint) on a
//! fixed interval so the host keeps the process warm. Probe failures
//! are absorbed here; liveness probing is best-effort by contract, and
//! this is the only place in the service with blanket failure
//! suppression.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// HTTP timeout for a single probe attempt.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Run the keep-alive loop until `cancel` is triggered.
///
/// Shares no state with request handling and never blocks it.
pub async fn run(url: String, interval: Duration, cancel: CancellationToken) {
    let client = match reqwest::Client::builder().timeout(PROBE_TIMEOUT).build() {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(error = %err, "Keep-alive: failed to build HTTP client, task disabled");
            return;
        }
    };

    tracing::info!(
        url = %url,
        interval_secs = interval.as_secs(),
        "Keep-alive task started"
    );

    let mut ticker = tokio::time::interval(interval);
    // The first tick of `interval` fires immediately; consume it so the
    // first real probe happens after the server has bound its listener.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Keep-alive task stopping");
                break;
            }
            _ = ticker.tick() => {
                match client.get(&url).send().await {
                    Ok(response) => {
                        tracing::debug!(status = %response.status(), "Keep-alive probe sent");
                    }
                    Err(err) => {
                        tracing::debug!(error = %err, "Keep-alive probe failed");
                    }
                }
            }
        }
    }
}
