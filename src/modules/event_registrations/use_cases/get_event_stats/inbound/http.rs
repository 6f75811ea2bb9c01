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
    match state.get_event_stats.handle(event_id).await {
        Ok(stats) => Json(stats).into_response(),
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod get_event_stats_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::modules::event_registrations::adapters::outbound::event_store::EventStore;
    use crate::modules::event_registrations::adapters::outbound::registration_ledger::RegistrationLedger;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::events::make_event;
    use crate::tests::fixtures::state::make_test_state;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/events/{id}/stats", get(handle))
            .with_state(state)
    }

    fn stats(event_id: &str) -> Request<Body> {
        Request::get(format!("/events/{event_id}/stats"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_the_stats() {
        let (state, store) = make_test_state();
        let event = make_event(10, Utc.with_ymd_and_hms(2999, 1, 1, 12, 0, 0).unwrap());
        EventStore::insert(store.as_ref(), &event).await.unwrap();
        for participant_id in ["1", "2", "3"] {
            store.admit(event.id, participant_id, Utc::now()).await.unwrap();
        }

        let response = app(state)
            .oneshot(stats(&event.id.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "totalRegistrations": 3,
                "remainingCapacity": 7,
                "percentageUsed": "30.00%"
            })
        );
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_event() {
        let (state, _) = make_test_state();

        let response = app(state)
            .oneshot(stats(&Uuid::now_v7().to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
