//! Send orchestrator: liveness gate + outbox drain.
//!
//! Drain policy:
//! - Unreachable (cached) -> probe once; failure aborts with `Offline` and the
//!   queue is untouched.
//! - Each message is dequeued, re-verified, then delivered.
//! - First failure aborts the drain. The failing message has already left the
//!   queue; everything behind it stays queued. No retries.

use parking_lot::Mutex;

use vesselmail_core::error::{MailError, Result};
use vesselmail_core::{package, verify, PackagedMessage, Queue, RawMessage};

use crate::liveness::LivenessMonitor;
use crate::transport::Transport;

/// Where the orchestrator currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainState {
    NotStarted,
    CheckingLiveness,
    Draining,
    Idle,
}

/// Owns the outbox queue and the liveness state.
pub struct Outbox<T> {
    queue: Queue<PackagedMessage>,
    liveness: LivenessMonitor,
    transport: T,
    state: Mutex<DrainState>,
}

impl<T: Transport> Outbox<T> {
    pub fn new(transport: T) -> Self {
        Self {
            queue: Queue::new(),
            liveness: LivenessMonitor::new(),
            transport,
            state: Mutex::new(DrainState::NotStarted),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn state(&self) -> DrainState {
        *self.state.lock()
    }

    fn set_state(&self, next: DrainState) {
        *self.state.lock() = next;
    }

    pub fn is_reachable(&self) -> bool {
        self.liveness.is_reachable()
    }

    pub fn size(&self) -> usize {
        self.queue.size()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn summary(&self) -> String {
        self.queue.summary()
    }

    pub fn enqueue(&self, msg: PackagedMessage) {
        self.queue.enqueue(msg);
    }

    /// Package a raw message and queue it for sending.
    pub fn add(&self, raw: &RawMessage, secret: &[u8]) -> Result<()> {
        let msg = package(raw, secret)?;
        self.queue.enqueue(msg);
        Ok(())
    }

    /// Probe unconditionally and refresh the cached state.
    pub async fn check_liveness(&self) -> Result<()> {
        self.liveness.probe(&self.transport).await
    }

    /// Send everything queued. Returns how many messages were delivered.
    pub async fn send_all(&self, secret: &[u8]) -> Result<usize> {
        self.ensure_reachable().await?;
        self.set_state(DrainState::Draining);

        let mut sent = 0;
        let res = loop {
            if self.queue.is_empty() {
                break Ok(sent);
            }
            match self.send_next(secret).await {
                Ok(()) => sent += 1,
                Err(e) => break Err(e),
            }
        };

        self.set_state(DrainState::Idle);
        match &res {
            Ok(n) => tracing::info!(sent = n, "outbox: drained"),
            Err(e) => tracing::warn!(
                sent,
                remaining = self.queue.size(),
                error = %e,
                "outbox: drain aborted"
            ),
        }
        res
    }

    /// Send exactly the head of the queue. An empty queue is a `QueueRace`.
    pub async fn send_one(&self, secret: &[u8]) -> Result<()> {
        self.ensure_reachable().await?;

        self.set_state(DrainState::Draining);
        let res = self.send_next(secret).await;
        self.set_state(DrainState::Idle);

        if let Err(e) = &res {
            tracing::warn!(remaining = self.queue.size(), error = %e, "outbox: send failed");
        }
        res
    }

    async fn ensure_reachable(&self) -> Result<()> {
        if self.liveness.is_reachable() {
            return Ok(());
        }

        self.set_state(DrainState::CheckingLiveness);
        if let Err(e) = self.liveness.probe(&self.transport).await {
            self.set_state(DrainState::Idle);
            return Err(e);
        }
        Ok(())
    }

    async fn send_next(&self, secret: &[u8]) -> Result<()> {
        let msg = self.queue.dequeue().ok_or(MailError::QueueRace)?;

        verify(&msg, secret)?;
        self.transport.deliver(&msg).await?;

        tracing::debug!(to = %msg.to(), subject = %msg.subject(), "outbox: delivered");
        Ok(())
    }
}
