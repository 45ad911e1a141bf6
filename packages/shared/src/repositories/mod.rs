pub mod errors;
pub mod event_repository;
