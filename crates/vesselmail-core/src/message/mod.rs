//! Message lifecycle: `RawMessage` (mutable, unsigned) -> `PackagedMessage`
//! (immutable, signed).
//!
//! `package` is the only way to produce a signed message locally; `verify`
//! recomputes the signature from the message's current contents. Both share
//! the same canonicalization so signer and verifier cannot drift apart.

mod packaged;
mod raw;
mod signing;

pub use packaged::PackagedMessage;
pub use raw::RawMessage;
pub use signing::{canonical_bytes, package, verify};
