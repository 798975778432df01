//! Top-level facade crate for vesselmail.
//!
//! Re-exports the core message types, the gateway library and the sending
//! client so users can depend on a single crate.

pub mod core {
    pub use vesselmail_core::*;
}

pub mod gateway {
    pub use vesselmail_gateway::*;
}

pub mod client {
    pub use vesselmail_client::*;
}
