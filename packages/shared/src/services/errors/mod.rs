pub mod telemetry_service_errors;
