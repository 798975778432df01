use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::queue::Subject;

/// Signed message; the only wire and storage form.
///
/// Fields are private: a `PackagedMessage` is either produced by
/// [`package`](super::package) or decoded off the wire, and its signed
/// contents never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackagedMessage {
    to: Identity,
    from: Identity,
    subject: String,
    body: String,
    signature: String,
    #[serde(rename = "packagedAt")]
    packaged_at: DateTime<Utc>,
    #[serde(rename = "receivedAt", default)]
    received_at: Option<DateTime<Utc>>,
}

impl PackagedMessage {
    pub(crate) fn new(
        to: Identity,
        from: Identity,
        subject: String,
        body: String,
        signature: String,
    ) -> Self {
        Self {
            to,
            from,
            subject,
            body,
            signature,
            packaged_at: Utc::now(),
            received_at: None,
        }
    }

    pub fn to(&self) -> &Identity {
        &self.to
    }

    pub fn from(&self) -> &Identity {
        &self.from
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Lowercase hex HMAC-SHA256.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn packaged_at(&self) -> DateTime<Utc> {
        self.packaged_at
    }

    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        self.received_at
    }

    /// Receipt time is not part of the signed bytes.
    pub(crate) fn mark_received(mut self, at: DateTime<Utc>) -> Self {
        self.received_at = Some(at);
        self
    }
}

impl Subject for PackagedMessage {
    fn subject(&self) -> &str {
        &self.subject
    }
}

impl fmt::Display for PackagedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "To: {}\nFrom: {}\nSubject: {}\nBody: {}\nSignature: {}\n",
            self.to, self.from, self.subject, self.body, self.signature
        )
    }
}
