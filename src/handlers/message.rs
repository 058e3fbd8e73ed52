use crate::app_state::AppState;
use axum::extract::State;

/// Handler for `GET /message`.
///
/// Responds with `200 OK` and one catalog message as `text/plain`.
/// Every call is counted and updates the last-message-length gauge.
#[tracing::instrument(skip(state))]
pub async fn get_message(State(state): State<AppState>) -> String {
    // ---
    let message = state.provider().get_message();
    tracing::debug!(%message, "Serving message");

    message
}
