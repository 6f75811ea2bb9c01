use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::event_registrations::adapters::inbound::http::{
    ParticipantBody, event_id_from_path, message, unprocessable,
};
use crate::modules::event_registrations::use_cases::cancel_registration::command::CancelRegistration;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<ParticipantBody>, JsonRejection>,
) -> Response {
    let event_id = match event_id_from_path(&event_id) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };

    let command = CancelRegistration {
        event_id,
        participant_id: body.user_id.into(),
    };

    match state.cancel_registration.handle(command).await {
        Ok(()) => message(StatusCode::OK, "Registration cancelled"),
        Err(err) => err.into_response(),
    }
}
