//! Elasticsearch record store

mod http;
mod store;
mod types;

use reqwest::Client;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::http_client::create_http_client;
use crate::traits::StoreErrorMapper;

pub(crate) use types::{
    CounterSource, ErrorResponse, GetResponse, MessageSource, SearchHit, SearchRequest,
    SearchResponse, UserProfileSource,
};

/// Field the users page is sorted on; its value becomes the user id.
pub(crate) const USER_ID_FIELD: &str = "profile_id";
/// Only the description is needed from user profile documents.
pub(crate) const USER_SOURCE_FIELDS: &str = "doc_desc";
/// Field linking a message to its user.
pub(crate) const MESSAGE_OWNER_FIELD: &str = "profileid";
/// Field messages are ranked by.
pub(crate) const MESSAGE_SCORE_FIELD: &str = "relevantScore";

/// Elasticsearch record store
pub struct ElasticsearchStore {
    pub(crate) client: Client,
    pub(crate) config: StoreConfig,
}

impl ElasticsearchStore {
    /// Create a store after validating `config`.
    pub fn new(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        let client = create_http_client(&config, STORE_NAME)?;
        Ok(Self { client, config })
    }
}

pub(crate) const STORE_NAME: &str = "elasticsearch";

impl StoreErrorMapper for ElasticsearchStore {
    fn store_name(&self) -> &'static str {
        STORE_NAME
    }
}
