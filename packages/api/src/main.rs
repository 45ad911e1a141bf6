use lambda_http::{run, tracing, Error};
use std::env::set_var;
use std::sync::Arc;

use api::{create_app, state::AppState};
use shared::config::StoreConfig;
use shared::repositories::event_repository::SupabaseEventRepository;
use shared::services::telemetry_service::TelemetryService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();

    // Fail the cold start rather than build malformed store URLs later
    let config = StoreConfig::from_env()?;
    tracing::info!("Forwarding events to {}", config.base_url());

    let event_repository = Arc::new(SupabaseEventRepository::new(config)?);
    let telemetry_service = Arc::new(TelemetryService::new(event_repository));

    let app_state = AppState { telemetry_service };

    run(create_app(app_state)).await
}
