// Shared HTTP plumbing for the event registration routes.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::event_registrations::core::event::parse_event_id;
use crate::modules::event_registrations::use_cases::application_error::ApplicationError;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

pub fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(MessageBody {
            message: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Conflict(_) => StatusCode::CONFLICT,
            ApplicationError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        message(status, self.to_string())
    }
}

pub fn unprocessable(rejection: JsonRejection) -> Response {
    message(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
}

pub fn event_id_from_path(raw: &str) -> Result<Uuid, ApplicationError> {
    Ok(parse_event_id(raw)?)
}

/// Clients send participant ids either as strings or as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ParticipantIdInput {
    Text(String),
    Number(i64),
}

impl From<ParticipantIdInput> for String {
    fn from(input: ParticipantIdInput) -> Self {
        match input {
            ParticipantIdInput::Text(text) => text,
            ParticipantIdInput::Number(number) => number.to_string(),
        }
    }
}

/// Body of the register and cancel routes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantBody {
    pub user_id: ParticipantIdInput,
}
