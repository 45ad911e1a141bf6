use axum::{extract::State, routing::post, Json, Router};
use lambda_http::tracing::{debug, error};

use crate::{error::ApiError, middleware::envelope::Envelope, state::AppState};
use shared::models::event::responses::AckResponse;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(ingest_event).fallback(method_not_allowed))
}

async fn ingest_event(
    State(state): State<AppState>,
    Envelope(envelope): Envelope,
) -> Result<Json<AckResponse>, ApiError> {
    state
        .telemetry_service
        .record_event(&envelope)
        .await
        .map_err(|e| {
            error!(
                "Failed to record {} event for user {}: {}",
                envelope.action, envelope.user_id, e
            );
            ApiError::from(e)
        })?;
    debug!(
        "Event {} recorded for user {}",
        envelope.action, envelope.user_id
    );
    Ok(Json(AckResponse::ok()))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
