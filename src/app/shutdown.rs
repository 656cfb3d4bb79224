//! Cooperative stop on Ctrl-C.

use log::warn;
use tokio_util::sync::CancellationToken;

/// Cancels `cancel` on the first Ctrl-C.
///
/// The crawler stops dispatching new fetches, drains the ones in flight and
/// reports on what it has. A second Ctrl-C is left to the default handler.
pub fn cancel_on_ctrl_c(cancel: CancellationToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                match result {
                    Ok(()) => {
                        warn!("Interrupt received, finishing in-flight requests");
                        cancel.cancel();
                    }
                    Err(e) => warn!("Failed to listen for Ctrl-C: {e}"),
                }
            }
            _ = cancel.cancelled() => {}
        }
    })
}
