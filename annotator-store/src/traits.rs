use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::types::{AggregateCounter, MessageRecord, UserRecord};

/// Error construction helpers shared by concrete stores (internal use)
pub(crate) trait StoreErrorMapper {
    /// Store identifier used in every error
    fn store_name(&self) -> &'static str;

    /// Shortcut: response body or record could not be converted
    fn malformed(&self, detail: impl ToString) -> StoreError {
        StoreError::MalformedRecord {
            store: self.store_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: request body could not be serialized
    fn serialization_error(&self, detail: impl ToString) -> StoreError {
        StoreError::SerializationError {
            store: self.store_name().to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Read-only document store holding users, their scored messages and the corpus counter.
///
/// Every method is a single round trip; implementations never retry and never
/// cache. Results are owned copies, callers may keep them as long as they like.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store identifier
    fn id(&self) -> &'static str;

    /// Fetch the first `page_size` users, sorted ascending by user id.
    async fn fetch_users_page(&self, page_size: u32) -> Result<Vec<UserRecord>>;

    /// Fetch all messages matched against `user_id`, sorted by score descending.
    ///
    /// An empty list is a valid answer, not an error.
    async fn fetch_messages_for_user(&self, user_id: &str) -> Result<Vec<MessageRecord>>;

    /// Fetch the singleton aggregate counter.
    async fn fetch_aggregate_counter(&self) -> Result<AggregateCounter>;
}
