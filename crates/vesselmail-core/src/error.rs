//! Shared error type across vesselmail crates.

use std::fmt;

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// A required raw message field was empty.
    MissingField,
    /// Signature did not verify.
    BadSignature,
    /// Remote endpoint not reachable.
    Offline,
    /// Queue emptied underneath a drain.
    QueueRace,
    /// Outbound delivery failed.
    Transport,
    /// Invalid configuration or secret.
    BadConfig,
    /// Internal error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::MissingField => "MISSING_FIELD",
            ClientCode::BadSignature => "BAD_SIGNATURE",
            ClientCode::Offline => "OFFLINE",
            ClientCode::QueueRace => "QUEUE_RACE",
            ClientCode::Transport => "TRANSPORT",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Raw message fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ToName,
    ToVessel,
    FromName,
    FromVessel,
    Subject,
    Body,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::ToName => "toName",
            Field::ToVessel => "toVessel",
            Field::FromName => "fromName",
            Field::FromVessel => "fromVessel",
            Field::Subject => "subject",
            Field::Body => "body",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a signature was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("signature does not match message contents")]
    Mismatch,
    #[error("signature is not valid hex")]
    MalformedEncoding,
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MailError>;

/// Unified error type used by core, client and gateway.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("missing field: {field}")]
    MissingField { field: Field },
    #[error("signature rejected: {0}")]
    Signature(#[from] SignatureError),
    #[error("server is offline")]
    Offline,
    #[error("queue reported empty during drain")]
    QueueRace,
    #[error("transport failed{}: {reason}", status_suffix(.status))]
    Transport { status: Option<u16>, reason: String },
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MailError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MailError::MissingField { .. } => ClientCode::MissingField,
            MailError::Signature(_) => ClientCode::BadSignature,
            MailError::Offline => ClientCode::Offline,
            MailError::QueueRace => ClientCode::QueueRace,
            MailError::Transport { .. } => ClientCode::Transport,
            MailError::Config(_) => ClientCode::BadConfig,
            MailError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Transport failure without an HTTP status (connect/IO/decode).
    pub fn transport(reason: impl Into<String>) -> Self {
        MailError::Transport {
            status: None,
            reason: reason.into(),
        }
    }
}
