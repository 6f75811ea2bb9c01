use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::modules::event_registrations::adapters::inbound::http::event_id_from_path;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(event_id): Path<String>) -> Response {
    let event_id = match event_id_from_path(&event_id) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    match state.get_event.handle(event_id).await {
        Ok(details) => Json(details).into_response(),
        Err(err) => err.into_response(),
    }
}
