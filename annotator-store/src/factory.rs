//! Store factory functions.

use std::sync::Arc;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::traits::RecordStore;

use crate::stores::ElasticsearchStore;

/// Creates a [`RecordStore`] from validated settings.
///
/// The returned store is wrapped in `Arc<dyn RecordStore>` so it can be shared
/// with the navigator and any background tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use annotator_store::{create_store, StoreConfig};
///
/// let store = create_store(StoreConfig {
///     endpoint: "http://search.internal:9200".to_string(),
///     ..StoreConfig::default()
/// }).unwrap();
/// assert_eq!(store.id(), "elasticsearch");
/// ```
pub fn create_store(config: StoreConfig) -> Result<Arc<dyn RecordStore>> {
    Ok(Arc::new(ElasticsearchStore::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn creates_elasticsearch_store() {
        let store = create_store(StoreConfig::default()).unwrap();
        assert_eq!(store.id(), "elasticsearch");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = create_store(StoreConfig {
            endpoint: String::new(),
            ..StoreConfig::default()
        });
        assert!(matches!(result, Err(StoreError::InvalidParameter { .. })));
    }
}
