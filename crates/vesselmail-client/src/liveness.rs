//! Cached server reachability, updated only by probing.

use std::sync::atomic::{AtomicBool, Ordering};

use vesselmail_core::error::{MailError, Result};

use crate::transport::Transport;

/// Starts unreachable. `probe` is the only writer: a well-formed `"OK"`
/// health payload flips it to reachable, anything else to unreachable.
#[derive(Debug, Default)]
pub struct LivenessMonitor {
    reachable: AtomicBool,
}

impl LivenessMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached state; never probes.
    pub fn is_reachable(&self) -> bool {
        self.reachable.load(Ordering::Acquire)
    }

    /// Ask the transport for the health payload and update the cached state.
    ///
    /// Transport errors, non-2xx, decode failures and unexpected values all
    /// collapse into `Offline`.
    pub async fn probe<T: Transport + ?Sized>(&self, transport: &T) -> Result<()> {
        let healthy = match transport.health().await {
            Ok(h) if h.is_ok() => true,
            Ok(h) => {
                tracing::warn!(health = %h.health, "liveness: unexpected health value");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "liveness: probe failed");
                false
            }
        };

        let was = self.reachable.swap(healthy, Ordering::AcqRel);
        if was != healthy {
            tracing::info!(reachable = healthy, "liveness: state changed");
        }

        if healthy {
            Ok(())
        } else {
            Err(MailError::Offline)
        }
    }
}
