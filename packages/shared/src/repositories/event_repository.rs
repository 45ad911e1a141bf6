use crate::config::StoreConfig;
use crate::models::event::OutboundRecord;
use crate::repositories::errors::event_repository_errors::EventRepositoryError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

#[cfg(test)]
use mockall::automock;

const MAX_ERROR_BODY_CHARS: usize = 512;

#[async_trait]
#[cfg_attr(test, automock)]
pub trait EventRepository: Send + Sync {
    async fn insert(
        &self,
        collection: &str,
        record: &OutboundRecord,
    ) -> Result<(), EventRepositoryError>;
}

/// Writes records through the Supabase (PostgREST) insert endpoint.
pub struct SupabaseEventRepository {
    client: Client,
    config: StoreConfig,
}

impl SupabaseEventRepository {
    pub fn new(config: StoreConfig) -> Result<Self, EventRepositoryError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EventRepositoryError::InvalidRequest(e.to_string()))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl EventRepository for SupabaseEventRepository {
    async fn insert(
        &self,
        collection: &str,
        record: &OutboundRecord,
    ) -> Result<(), EventRepositoryError> {
        let response = self
            .client
            .post(self.config.insert_url(collection))
            .header("apikey", self.config.api_key())
            .bearer_auth(self.config.api_key())
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!("Inserted record into {} ({})", collection, status);
            return Ok(());
        }

        let body: String = response
            .text()
            .await
            .unwrap_or_default()
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect();
        warn!(
            "Store rejected insert into {} with status {}: {}",
            collection, status, body
        );
        Err(EventRepositoryError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
