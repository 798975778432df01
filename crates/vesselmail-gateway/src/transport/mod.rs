//! Transport layer (HTTP message endpoints).
//!
//! Requests are JSON-decoded by the extractor before they reach the inbox, so
//! the core only ever sees typed `PackagedMessage` values.

pub mod messages;
