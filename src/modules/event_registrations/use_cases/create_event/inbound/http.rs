use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use serde::{Deserialize, Serialize};

use crate::modules::event_registrations::adapters::inbound::http::unprocessable;
use crate::modules::event_registrations::core::event::EventDraft;
use crate::shell::state::AppState;

// Missing or null fields reach validation as empty values and answer 400.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "datetime")]
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub capacity: Option<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventResponse {
    pub event_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };

    let draft = EventDraft {
        title: body.title.unwrap_or_default(),
        scheduled_time: body.scheduled_time.unwrap_or_default(),
        location: body.location.unwrap_or_default(),
        capacity: body.capacity.unwrap_or_default(),
    };

    match state.create_event.handle(draft).await {
        Ok(event) => (
            StatusCode::CREATED,
            Json(CreateEventResponse {
                event_id: event.id.to_string(),
            }),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}
