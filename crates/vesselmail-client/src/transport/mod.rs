//! Outbound transport seam.
//!
//! The orchestrator only needs two calls from the network: the health payload
//! and message delivery. `HttpTransport` implements them against the gateway;
//! tests substitute in-memory stubs.

mod http;

use async_trait::async_trait;

use vesselmail_core::error::Result;
use vesselmail_core::protocol::HealthCheck;
use vesselmail_core::PackagedMessage;

pub use http::HttpTransport;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch and decode the remote health payload.
    /// Errors cover connect/IO failures, non-2xx and undecodable bodies.
    async fn health(&self) -> Result<HealthCheck>;

    /// Deliver one packaged message. Non-2xx surfaces as `Transport { status }`.
    async fn deliver(&self, msg: &PackagedMessage) -> Result<()>;
}
