//! Inbound handler: verify, then enqueue to the inbox.

use chrono::Utc;

use crate::error::Result;
use crate::message::{verify, PackagedMessage};
use crate::queue::Queue;

/// Receiver-owned inbox. Shared across request handlers behind an `Arc`.
#[derive(Debug, Default)]
pub struct Inbox {
    queue: Queue<PackagedMessage>,
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept an already-decoded message.
    ///
    /// A message that fails verification is rejected and never enqueued; the
    /// caller turns the error into a client-error response.
    pub fn receive(&self, msg: PackagedMessage, secret: &[u8]) -> Result<()> {
        if let Err(e) = verify(&msg, secret) {
            tracing::warn!(
                error = %e,
                from = %msg.from(),
                to = %msg.to(),
                "inbox: rejected message"
            );
            return Err(e);
        }

        tracing::info!(
            from = %msg.from(),
            to = %msg.to(),
            subject = %msg.subject(),
            "inbox: accepted message"
        );
        self.queue.enqueue(msg.mark_received(Utc::now()));
        tracing::debug!(summary = %self.queue.summary(), "inbox: queue state");
        Ok(())
    }

    /// Pop the oldest received message.
    pub fn take_next(&self) -> Option<PackagedMessage> {
        self.queue.dequeue()
    }

    pub fn size(&self) -> usize {
        self.queue.size()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn subjects(&self) -> Vec<String> {
        self.queue.subjects()
    }

    pub fn summary(&self) -> String {
        self.queue.summary()
    }
}
