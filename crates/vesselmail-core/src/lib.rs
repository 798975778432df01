//! vesselmail core: message integrity, queuing, and the shared error surface.
//!
//! This crate defines the signed message lifecycle (raw -> packaged), the
//! HMAC canonicalization shared by signer and verifier, the thread-safe FIFO
//! queue used for both outbox and inbox, and the inbound handler. It carries
//! no transport or runtime dependencies so the client and the gateway can both
//! build on it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `MailError`/`Result` so a malformed or
//! tampered message never brings a process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod identity;
pub mod inbox;
pub mod message;
pub mod protocol;
pub mod queue;
pub mod secret;

pub use error::{MailError, Result};
pub use identity::Identity;
pub use inbox::Inbox;
pub use message::{package, verify, PackagedMessage, RawMessage};
pub use queue::Queue;
pub use secret::{SecretSource, SharedSecret};
