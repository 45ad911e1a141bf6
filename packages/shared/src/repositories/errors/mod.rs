pub mod event_repository_errors;
