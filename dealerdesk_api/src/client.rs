//! HTTP client for the DealerDesk admin REST backend.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{
    query::{
        DealerQuery, OrderQuery, PromotionQuery, Query, TestDriveQuery, UserQuery, VehicleQuery,
    },
    Error,
};

/// HTTP client for the DealerDesk admin REST backend.
///
/// List endpoints are returned as raw [`serde_json::Value`] bodies: the
/// backend's list payload shapes vary between builds (`data` wrappers,
/// bare arrays, renamed totals), so canonicalization happens downstream
/// in the pagination normalizer rather than in typed deserialization
/// here. Each request builds a fresh `reqwest::Client` with a
/// 30-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `http://localhost:8080/api/v1`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at a locally served backend.
    pub fn new() -> Self {
        Self {
            base_api_url: "http://localhost:8080/api/v1".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Also used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get_raw<Q>(&self, path: &str, query: Option<&Q>) -> Result<Value, Error>
    where
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("content-type", "application/json")
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<Value>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches one page of dealers matching the given query.
    pub async fn list_dealers(&self, query: &DealerQuery) -> Result<Value, Error> {
        self.get_raw("/dealers", Some(query)).await
    }

    /// Fetches one page of users matching the given query.
    pub async fn list_users(&self, query: &UserQuery) -> Result<Value, Error> {
        self.get_raw("/users", Some(query)).await
    }

    /// Fetches one page of vehicle variants matching the given query.
    pub async fn list_vehicle_variants(&self, query: &VehicleQuery) -> Result<Value, Error> {
        self.get_raw("/vehicle-variants", Some(query)).await
    }

    /// Fetches one page of sales orders matching the given query.
    pub async fn list_sales_orders(&self, query: &OrderQuery) -> Result<Value, Error> {
        self.get_raw("/sales-orders", Some(query)).await
    }

    /// Fetches one page of test drives matching the given query.
    pub async fn list_test_drives(&self, query: &TestDriveQuery) -> Result<Value, Error> {
        self.get_raw("/test-drives", Some(query)).await
    }

    /// Fetches one page of promotions matching the given query.
    pub async fn list_promotions(&self, query: &PromotionQuery) -> Result<Value, Error> {
        self.get_raw("/promotions", Some(query)).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
