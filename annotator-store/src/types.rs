use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Records ============

/// A user whose messages can be reviewed.
///
/// Identity is [`id`](Self::id). Records are immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Store-side user identifier.
    pub id: String,
    /// Free-text profile description.
    pub description: String,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

/// A single scored message belonging to a user.
///
/// Messages have no identity of their own; they are addressed by their position
/// in the owner's score-sorted list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    /// Id of the user this message was matched against.
    pub owner_user_id: String,
    /// Message body.
    pub text: String,
    /// When the message was sent.
    #[serde(with = "crate::utils::datetime")]
    pub sent_at: DateTime<Utc>,
    /// Relevance score; lists are ordered by this, highest first.
    pub score: f64,
    /// Store-computed time difference attached to the match, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_delta: Option<f64>,
}

impl MessageRecord {
    /// Score rounded to two decimals, as shown by the score indicator.
    pub fn rounded_score(&self) -> f64 {
        (self.score * 100.0).round() / 100.0
    }
}

/// Singleton counter record describing the whole message corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateCounter {
    /// Total number of matched messages.
    pub total_count: u64,
    /// Time of the most recent match.
    #[serde(with = "crate::utils::datetime")]
    pub last_match_time: DateTime<Utc>,
}
