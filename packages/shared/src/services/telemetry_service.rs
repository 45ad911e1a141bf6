use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::models::event::requests::EventEnvelope;
use crate::models::event::{Action, OutboundRecord};
use crate::repositories::event_repository::EventRepository;
use crate::services::errors::telemetry_service_errors::TelemetryServiceError;

/// Routes a validated envelope to its collection and writes one record.
pub struct TelemetryService {
    repository: Arc<dyn EventRepository + Send + Sync>,
}

impl TelemetryService {
    pub fn new(repository: Arc<dyn EventRepository + Send + Sync>) -> Self {
        TelemetryService { repository }
    }

    /// Performs exactly one insert per call. Failures are not retried and
    /// repeated calls are not deduplicated.
    #[tracing::instrument(
        skip(self, envelope),
        fields(action = %envelope.action, user_id = %envelope.user_id)
    )]
    pub async fn record_event(
        &self,
        envelope: &EventEnvelope,
    ) -> Result<Action, TelemetryServiceError> {
        let action = Action::from_name(&envelope.action)
            .ok_or_else(|| TelemetryServiceError::UnknownAction(envelope.action.clone()))?;

        let record =
            OutboundRecord::new(action, &envelope.user_id, &envelope.payload, Utc::now());

        self.repository
            .insert(action.collection(), &record)
            .await?;

        info!("Recorded {} event in {}", action, action.collection());
        Ok(action)
    }
}
