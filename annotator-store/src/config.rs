//! Store connection settings.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Largest window a single search may return (`index.max_result_window`).
pub const MAX_RESULT_WINDOW: u32 = 10_000;

/// Connection and index settings for a record store.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Base URL, e.g. `http://localhost:9200`.
    pub endpoint: String,
    /// Index holding user profiles.
    pub users_index: String,
    /// Document type of user profiles.
    pub users_type: String,
    /// Index holding scored messages and the counter document.
    pub messages_index: String,
    /// Document type of scored messages.
    pub messages_type: String,
    /// Document type of the counter document.
    pub counter_type: String,
    /// Id of the counter document.
    pub counter_id: String,
    /// Upper bound on messages fetched for one user.
    pub message_page_cap: u32,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9200".to_string(),
            users_index: "twitter_user_profile_v3".to_string(),
            users_type: "article".to_string(),
            messages_index: "demo_twitter".to_string(),
            messages_type: "result".to_string(),
            counter_type: "TotalNum".to_string(),
            counter_id: "1".to_string(),
            message_page_cap: MAX_RESULT_WINDOW,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

impl StoreConfig {
    /// Check settings that would make every request fail.
    pub fn validate(&self) -> Result<()> {
        let invalid = |param: &str, detail: &str| StoreError::InvalidParameter {
            store: "config".to_string(),
            param: param.to_string(),
            detail: detail.to_string(),
        };

        if self.endpoint.trim().is_empty() {
            return Err(invalid("endpoint", "must not be empty"));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(invalid("endpoint", "must start with http:// or https://"));
        }
        for (param, value) in [
            ("usersIndex", &self.users_index),
            ("usersType", &self.users_type),
            ("messagesIndex", &self.messages_index),
            ("messagesType", &self.messages_type),
            ("counterType", &self.counter_type),
            ("counterId", &self.counter_id),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(param, "must not be empty"));
            }
        }
        if self.message_page_cap == 0 || self.message_page_cap > MAX_RESULT_WINDOW {
            return Err(invalid(
                "messagePageCap",
                &format!("must be between 1 and {MAX_RESULT_WINDOW}"),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(invalid("requestTimeoutSecs", "must be greater than 0"));
        }
        Ok(())
    }

    /// Endpoint without trailing slashes, ready for path concatenation.
    pub fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(StoreConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: StoreConfig =
            serde_json::from_str(r#"{"endpoint": "https://es.example.com:9243/"}"#).unwrap();
        assert_eq!(cfg.base_url(), "https://es.example.com:9243");
        assert_eq!(cfg.messages_index, "demo_twitter");
        assert_eq!(cfg.message_page_cap, MAX_RESULT_WINDOW);
    }

    #[test]
    fn rejects_empty_endpoint() {
        let cfg = StoreConfig {
            endpoint: "  ".to_string(),
            ..StoreConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(StoreError::InvalidParameter { param, .. }) if param == "endpoint"
        ));
    }

    #[test]
    fn rejects_endpoint_without_scheme() {
        let cfg = StoreConfig {
            endpoint: "localhost:9200".to_string(),
            ..StoreConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_page_cap_out_of_range() {
        let zero = StoreConfig {
            message_page_cap: 0,
            ..StoreConfig::default()
        };
        let huge = StoreConfig {
            message_page_cap: MAX_RESULT_WINDOW + 1,
            ..StoreConfig::default()
        };
        assert!(zero.validate().is_err());
        assert!(huge.validate().is_err());
    }

    #[test]
    fn rejects_blank_index_name() {
        let cfg = StoreConfig {
            users_index: String::new(),
            ..StoreConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(StoreError::InvalidParameter { param, .. }) if param == "usersIndex"
        ));
    }
}
