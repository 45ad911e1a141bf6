pub mod errors;
pub mod telemetry_service;
