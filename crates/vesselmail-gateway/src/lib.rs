//! vesselmail gateway library entry.
//!
//! This crate wires config, shared state, the HTTP router and the message
//! endpoints around the core inbound handler. It is intended to be consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod ops;
pub mod router;
pub mod transport;
