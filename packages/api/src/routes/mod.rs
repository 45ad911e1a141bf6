pub mod events;

use crate::error::ApiError;

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
