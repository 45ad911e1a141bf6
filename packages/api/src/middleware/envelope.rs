use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use lambda_http::tracing::debug;
use shared::models::event::requests::EventEnvelope;

use crate::error::ApiError;

/// Buffers the whole request body and parses it into an [`EventEnvelope`].
#[derive(Debug, Clone)]
pub struct Envelope(pub EventEnvelope);

impl<S> FromRequest<S> for Envelope
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| {
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    ApiError::PayloadTooLarge
                } else {
                    ApiError::MalformedRequest(e.body_text())
                }
            })?;

        EventEnvelope::from_slice(&body).map(Envelope).map_err(|e| {
            debug!("Rejected event request: {}", e);
            ApiError::from(e)
        })
    }
}
