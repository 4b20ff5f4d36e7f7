//! Elasticsearch `RecordStore` trait implementation

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::traits::{RecordStore, StoreErrorMapper};
use crate::types::{AggregateCounter, MessageRecord, UserRecord};
use crate::utils::datetime::{parse_timestamp, parse_unix_timestamp};

use super::types::SortOrder;
use super::{
    CounterSource, ElasticsearchStore, MESSAGE_OWNER_FIELD, MESSAGE_SCORE_FIELD, MessageSource,
    STORE_NAME, SearchHit, SearchRequest, USER_ID_FIELD, USER_SOURCE_FIELDS, UserProfileSource,
};

/// Render a keyword-ish JSON value (string or number) as a string
fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl ElasticsearchStore {
    /// Convert a profile hit into a `UserRecord`; the id comes from the sort value
    pub(crate) fn hit_to_user(&self, hit: SearchHit<UserProfileSource>) -> Result<UserRecord> {
        let id = hit
            .sort
            .first()
            .and_then(value_to_id)
            .or(hit.id)
            .ok_or_else(|| self.malformed("user hit has neither a sort value nor an _id"))?;
        let description = hit
            .source
            .and_then(|s| s.doc_desc)
            .ok_or_else(|| self.malformed(format!("user '{id}' has no doc_desc")))?;

        Ok(UserRecord { id, description })
    }

    /// Convert a scored message hit into a `MessageRecord`
    pub(crate) fn hit_to_message(&self, hit: SearchHit<MessageSource>) -> Result<MessageRecord> {
        let hit_id = hit.id.unwrap_or_else(|| "<unknown>".to_string());
        let source = hit
            .source
            .ok_or_else(|| self.malformed(format!("message '{hit_id}' has no _source")))?;

        let owner_user_id = source
            .profileid
            .as_ref()
            .and_then(value_to_id)
            .ok_or_else(|| self.malformed(format!("message '{hit_id}' has no profileid")))?;
        let text = source
            .text
            .ok_or_else(|| self.malformed(format!("message '{hit_id}' has no text")))?;
        let sent_at = source
            .createtime
            .as_ref()
            .and_then(json_timestamp)
            .ok_or_else(|| self.malformed(format!("message '{hit_id}' has no valid createtime")))?;
        let score = source
            .relevant_score
            .filter(|s| s.is_finite())
            .ok_or_else(|| self.malformed(format!("message '{hit_id}' has no relevantScore")))?;

        Ok(MessageRecord {
            owner_user_id,
            text,
            sent_at,
            score,
            time_delta: source.differencetime,
        })
    }

    /// Convert the counter document into an `AggregateCounter`
    pub(crate) fn source_to_counter(&self, source: &CounterSource) -> Result<AggregateCounter> {
        let total_count = match &source.totalnum {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
        .ok_or_else(|| self.malformed("counter has no valid totalnum"))?;
        let last_match_time = source
            .lastmatchtime
            .as_ref()
            .and_then(json_timestamp)
            .ok_or_else(|| self.malformed("counter has no valid lastmatchtime"))?;

        Ok(AggregateCounter {
            total_count,
            last_match_time,
        })
    }
}

fn json_timestamp(value: &Value) -> Option<chrono::DateTime<chrono::Utc>> {
    match value {
        Value::String(s) => parse_timestamp(s),
        Value::Number(n) => n.as_i64().and_then(parse_unix_timestamp),
        _ => None,
    }
}

#[async_trait]
impl RecordStore for ElasticsearchStore {
    fn id(&self) -> &'static str {
        STORE_NAME
    }

    async fn fetch_users_page(&self, page_size: u32) -> Result<Vec<UserRecord>> {
        let body = SearchRequest::sorted_by(page_size, USER_ID_FIELD, SortOrder::Asc)
            .with_source(USER_SOURCE_FIELDS);
        let hits: Vec<SearchHit<UserProfileSource>> = self
            .search(&self.config.users_index, &self.config.users_type, &body)
            .await?;

        hits.into_iter().map(|hit| self.hit_to_user(hit)).collect()
    }

    async fn fetch_messages_for_user(&self, user_id: &str) -> Result<Vec<MessageRecord>> {
        let body = SearchRequest::sorted_by(
            self.config.message_page_cap,
            MESSAGE_SCORE_FIELD,
            SortOrder::Desc,
        )
        .matching(MESSAGE_OWNER_FIELD, user_id);
        let hits: Vec<SearchHit<MessageSource>> = self
            .search(&self.config.messages_index, &self.config.messages_type, &body)
            .await?;

        hits.into_iter()
            .map(|hit| self.hit_to_message(hit))
            .collect()
    }

    async fn fetch_aggregate_counter(&self) -> Result<AggregateCounter> {
        let source: CounterSource = self
            .get_document(
                &self.config.messages_index,
                &self.config.counter_type,
                &self.config.counter_id,
            )
            .await?;
        self.source_to_counter(&source)
    }
}
