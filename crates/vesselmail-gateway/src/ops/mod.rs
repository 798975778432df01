//! Operational HTTP endpoints.
//!
//! - `/health` : liveness, probed by clients before they drain their outbox

use axum::Json;

use vesselmail_core::protocol::HealthCheck;

pub async fn health() -> Json<HealthCheck> {
    Json(HealthCheck::ok())
}
