//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use vesselmail_core::protocol::{CHECK_MESSAGES_PATH, HEALTH_PATH, SEND_MESSAGE_PATH};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(ops::health))
        .route(SEND_MESSAGE_PATH, post(transport::messages::send_message))
        .route(CHECK_MESSAGES_PATH, get(transport::messages::check_messages))
        .with_state(state)
}
