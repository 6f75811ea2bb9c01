use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.list_upcoming_events.handle(Utc::now()).await {
        Ok(events) => Json(events).into_response(),
        Err(err) => err.into_response(),
    }
}
