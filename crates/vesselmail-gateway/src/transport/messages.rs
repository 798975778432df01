use axum::{extract::State, http::StatusCode, Json};

use vesselmail_core::protocol::InboxView;
use vesselmail_core::PackagedMessage;

use crate::app_state::AppState;
use crate::error::ApiError;

/// `POST /send-message`: verify and append to the inbox.
/// A message that fails verification is answered with 400 and dropped.
pub async fn send_message(
    State(state): State<AppState>,
    Json(msg): Json<PackagedMessage>,
) -> Result<StatusCode, ApiError> {
    state.inbox().receive(msg, state.secret().as_bytes())?;
    Ok(StatusCode::OK)
}

/// `GET /check-messages`: read-only view of what is waiting in the inbox.
pub async fn check_messages(State(state): State<AppState>) -> Json<InboxView> {
    let subjects = state.inbox().subjects();
    Json(InboxView {
        count: subjects.len(),
        subjects,
    })
}
