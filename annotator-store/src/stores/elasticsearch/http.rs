//! Elasticsearch HTTP request methods

use serde::de::DeserializeOwned;

use crate::error::{Result, StoreError};
use crate::http_client::HttpUtils;
use crate::traits::StoreErrorMapper;

use super::{ElasticsearchStore, ErrorResponse, GetResponse, SearchHit, SearchRequest, SearchResponse};

impl ElasticsearchStore {
    /// Run a `_search` against `index/doc_type` and return its hits
    pub(crate) async fn search<S: DeserializeOwned>(
        &self,
        index: &str,
        doc_type: &str,
        body: &SearchRequest<'_>,
    ) -> Result<Vec<SearchHit<S>>> {
        let url = format!("{}/{index}/{doc_type}/_search", self.config.base_url());
        let body_json = serde_json::to_string(body).map_err(|e| self.serialization_error(e))?;
        log::debug!("Request Body: {body_json}");

        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body_json);
        let (status, response_text) =
            HttpUtils::execute_request(request, self.store_name(), "POST", &url).await?;

        if !(200..300).contains(&status) {
            return Err(self.status_error(status, &response_text));
        }

        let response: SearchResponse<S> = HttpUtils::parse_json(&response_text, self.store_name())?;
        let hits = response.hits.hits;
        log::debug!(
            "[{}] {index}/{doc_type}: {} hits returned, {} total",
            self.store_name(),
            hits.len(),
            response.hits.total.map_or(0, |t| t.value())
        );
        Ok(hits)
    }

    /// Fetch one document's `_source` by id
    pub(crate) async fn get_document<S: DeserializeOwned>(
        &self,
        index: &str,
        doc_type: &str,
        id: &str,
    ) -> Result<S> {
        let url = format!("{}/{index}/{doc_type}/{id}", self.config.base_url());
        let request = self.client.get(&url);
        let (status, response_text) =
            HttpUtils::execute_request(request, self.store_name(), "GET", &url).await?;

        // A missing document answers 404 with a regular `found: false` body
        if status == 404 {
            if let Ok(GetResponse { found: false, .. }) =
                serde_json::from_str::<GetResponse<serde_json::Value>>(&response_text)
            {
                return Err(StoreError::NotFound {
                    store: self.store_name().to_string(),
                    resource: format!("{index}/{doc_type}/{id}"),
                });
            }
        }
        if !(200..300).contains(&status) {
            return Err(self.status_error(status, &response_text));
        }

        let response: GetResponse<S> = HttpUtils::parse_json(&response_text, self.store_name())?;
        match response {
            GetResponse {
                found: true,
                source: Some(source),
            } => Ok(source),
            _ => Err(StoreError::NotFound {
                store: self.store_name().to_string(),
                resource: format!("{index}/{doc_type}/{id}"),
            }),
        }
    }

    /// Map a non-success status to an error, keeping the store's reason if it sent one
    pub(crate) fn status_error(&self, status: u16, response_text: &str) -> StoreError {
        let raw_message = serde_json::from_str::<ErrorResponse>(response_text)
            .ok()
            .map(|e| e.reason());
        log::error!("[{}] HTTP {status}: {raw_message:?}", self.store_name());
        StoreError::Http {
            store: self.store_name().to_string(),
            status,
            raw_message,
        }
    }
}
