//! Elasticsearch wire types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============ Requests ============

/// `_search` request body
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub size: u32,
    /// Source filtering; omitted to return the whole document
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
    pub sort: Vec<BTreeMap<&'a str, SortSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Query<'a>>,
}

impl<'a> SearchRequest<'a> {
    pub fn sorted_by(size: u32, field: &'a str, order: SortOrder) -> Self {
        Self {
            size,
            source: None,
            sort: vec![BTreeMap::from([(field, SortSpec { order })])],
            query: None,
        }
    }

    pub fn with_source(mut self, fields: &'a str) -> Self {
        self.source = Some(fields);
        self
    }

    pub fn matching(mut self, field: &'a str, value: &'a str) -> Self {
        self.query = Some(Query {
            r#match: BTreeMap::from([(field, value)]),
        });
        self
    }
}

#[derive(Debug, Serialize)]
pub struct SortSpec {
    pub order: SortOrder,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Serialize)]
pub struct Query<'a> {
    pub r#match: BTreeMap<&'a str, &'a str>,
}

// ============ Responses ============

/// `_search` response
#[derive(Debug, Deserialize)]
pub struct SearchResponse<S> {
    pub hits: SearchHits<S>,
}

#[derive(Debug, Deserialize)]
pub struct SearchHits<S> {
    /// Informational only; the hit count is `hits.len()`
    #[serde(default)]
    pub total: Option<HitsTotal>,
    #[serde(default = "Vec::new")]
    pub hits: Vec<SearchHit<S>>,
}

/// `hits.total` is a bare number before 7.0 and an object afterwards
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum HitsTotal {
    Count(u64),
    Object { value: u64 },
}

impl HitsTotal {
    pub fn value(&self) -> u64 {
        match self {
            Self::Count(n) | Self::Object { value: n } => *n,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchHit<S> {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "_source")]
    pub source: Option<S>,
    #[serde(default)]
    pub sort: Vec<Value>,
}

/// Single document `GET` response
#[derive(Debug, Deserialize)]
pub struct GetResponse<S> {
    #[serde(default)]
    pub found: bool,
    #[serde(rename = "_source")]
    pub source: Option<S>,
}

/// Error body of a failed request
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: Value,
}

impl ErrorResponse {
    /// `error.reason` when the error is structured, the raw string otherwise
    pub fn reason(&self) -> String {
        match &self.error {
            Value::String(s) => s.clone(),
            other => other
                .get("reason")
                .and_then(Value::as_str)
                .map_or_else(|| other.to_string(), str::to_string),
        }
    }
}

// ============ Document sources ============

#[derive(Debug, Deserialize)]
pub struct UserProfileSource {
    pub doc_desc: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessageSource {
    pub profileid: Option<Value>,
    pub text: Option<String>,
    pub createtime: Option<Value>,
    pub differencetime: Option<f64>,
    #[serde(rename = "relevantScore")]
    pub relevant_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct CounterSource {
    pub totalnum: Option<Value>,
    pub lastmatchtime: Option<Value>,
}
