//! Generic HTTP client tools
//!
//! Shared request plumbing for HTTP-backed stores: client construction,
//! sending, logging, transport error mapping and JSON parsing. Each store
//! builds its own `RequestBuilder` and interprets its own status codes.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::utils::log_sanitizer::truncate_for_log;

/// Create an HTTP client honouring the configured timeouts
pub fn create_http_client(config: &StoreConfig, store_name: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| StoreError::InvalidParameter {
            store: store_name.to_string(),
            param: "httpClient".to_string(),
            detail: e.to_string(),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `store_name` - store name (for logging and errors)
    /// * `method_name` - request method name (for logging)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any status except gateway errors
    /// * `Err(StoreError::Timeout)` - the request timed out
    /// * `Err(StoreError::NetworkError)` - connection failure or HTTP 502/503/504
    pub async fn execute_request(
        request_builder: RequestBuilder,
        store_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{store_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                StoreError::Timeout {
                    store: store_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                StoreError::NetworkError {
                    store: store_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{store_name}] Response Status: {status_code}");

        // Gateway errors mean the cluster is unreachable, not that the query was wrong
        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{store_name}] Server unavailable (HTTP {status_code})");
            return Err(StoreError::NetworkError {
                store: store_name.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                StoreError::Timeout {
                    store: store_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            } else {
                StoreError::NetworkError {
                    store: store_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{store_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(StoreError::MalformedRecord)` - parsing failed
    pub fn parse_json<T>(response_text: &str, store_name: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{store_name}] JSON parse failed: {e}");
            log::error!(
                "[{store_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            StoreError::MalformedRecord {
                store: store_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Total {
            total: u64,
        }
        let result: Result<Total> = HttpUtils::parse_json(r#"{"total":42}"#, "test");
        assert!(
            matches!(&result, Ok(Total { total: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid_is_malformed() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Total {
            total: u64,
        }
        let result: Result<Total> = HttpUtils::parse_json("<html>502</html>", "test");
        assert!(
            matches!(&result, Err(StoreError::MalformedRecord { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn client_builds_from_default_config() {
        assert!(create_http_client(&StoreConfig::default(), "test").is_ok());
    }

    #[tokio::test]
    async fn connection_refused_is_network_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let config = StoreConfig {
            connect_timeout_secs: 1,
            request_timeout_secs: 2,
            ..StoreConfig::default()
        };
        let client = create_http_client(&config, "test").unwrap();
        let url = "http://127.0.0.1:9/_search";
        let result = HttpUtils::execute_request(client.get(url), "test", "GET", url).await;
        assert!(
            matches!(
                &result,
                Err(StoreError::NetworkError { .. } | StoreError::Timeout { .. })
            ),
            "unexpected result: {result:?}"
        );
    }
}
