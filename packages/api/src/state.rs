use std::sync::Arc;

use shared::services::telemetry_service::TelemetryService;

#[derive(Clone)]
pub struct AppState {
    pub telemetry_service: Arc<TelemetryService>,
}
