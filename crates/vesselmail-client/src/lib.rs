//! vesselmail client library entry.
//!
//! Wires the outbound side: a transport seam with a reqwest-backed HTTP
//! implementation, the liveness monitor that gates sending, and the outbox
//! orchestrator that drains the queue. `Client` bundles these with the sender
//! identity and shared secret loaded from config.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod client;
pub mod config;
pub mod liveness;
pub mod outbox;
pub mod transport;

pub use client::Client;
pub use liveness::LivenessMonitor;
pub use outbox::{DrainState, Outbox};
pub use transport::{HttpTransport, Transport};
