//! HTTP wire contract shared by the gateway and the client.
//!
//! - `GET  /health`         -> `{"health":"OK"}`
//! - `POST /send-message`   <- JSON `PackagedMessage`; 200 accepted, 400 rejected
//! - `GET  /check-messages` -> `{"count":N,"subjects":[...]}`

pub mod wire;

pub use wire::{HealthCheck, InboxView, HEALTH_OK};

pub const HEALTH_PATH: &str = "/health";
pub const SEND_MESSAGE_PATH: &str = "/send-message";
pub const CHECK_MESSAGES_PATH: &str = "/check-messages";
