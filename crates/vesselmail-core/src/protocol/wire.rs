//! JSON bodies besides `PackagedMessage` itself.

use serde::{Deserialize, Serialize};

/// The only health value treated as reachable.
pub const HEALTH_OK: &str = "OK";

/// `GET /health` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub health: String,
}

impl HealthCheck {
    pub fn ok() -> Self {
        Self {
            health: HEALTH_OK.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.health == HEALTH_OK
    }
}

/// `GET /check-messages` body: read-only view of the inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxView {
    pub count: usize,
    pub subjects: Vec<String>,
}
