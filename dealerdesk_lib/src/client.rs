//! Fetch-and-normalize wrapper around the API client.
//!
//! Each `*_page` method runs the full list pipeline: fetch the raw
//! payload, normalize it into a canonical [`PageState`], decode the
//! items into typed records. Retries are applied around the fetch only;
//! normalization is pure and never fails.

use std::time::Duration;

use dealerdesk_api::types::{Dealer, Promotion, SalesOrder, TestDrive, User, VehicleVariant};
use dealerdesk_api::{
    Client, DealerQuery, OrderQuery, PromotionQuery, Query, TestDriveQuery, UserQuery,
    VehicleQuery,
};

use crate::error::DealerDeskError;
use crate::pagination::{normalize, PageState};

/// API client wrapper that adds retry with exponential backoff and
/// produces canonical page state instead of raw payloads.
pub struct DashboardClient {
    inner: Client,
}

struct RetryConfig {
    max_retries: usize,
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryConfig {
    fn from_env() -> Self {
        Self {
            max_retries: env_usize("DEALERDESK_RETRY_MAX", 3),
            base_delay_ms: env_u64("DEALERDESK_RETRY_BASE_MS", 500),
            max_delay_ms: env_u64("DEALERDESK_RETRY_MAX_MS", 10000),
        }
    }

    fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let shift = (attempt.saturating_sub(1)).min(30) as u32;
        let exp = 1u64 << shift;
        let delay = self.base_delay_ms.saturating_mul(exp).min(self.max_delay_ms);
        Duration::from_millis(delay)
    }
}

impl Default for DashboardClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardClient {
    /// Creates a new client using the default backend URL.
    pub fn new() -> Self {
        Self {
            inner: Client::new(),
        }
    }

    /// Creates a new client with a custom base URL. Also used for testing.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
        }
    }

    async fn with_retry<T, F, Fut>(&self, label: &str, mut f: F) -> Result<T, DealerDeskError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, DealerDeskError>>,
    {
        let cfg = RetryConfig::from_env();
        let mut attempt = 0usize;
        loop {
            match f().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempt += 1;
                    if attempt > cfg.max_retries || !is_retryable(&err) {
                        return Err(err);
                    }
                    let delay = cfg.delay_for_attempt(attempt);
                    tracing::warn!(
                        "{} request failed (attempt {}/{}), retrying in {:.1}s",
                        label,
                        attempt,
                        cfg.max_retries,
                        delay.as_secs_f64()
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Fetches one page of dealers as canonical page state.
    pub async fn dealers_page(
        &self,
        query: &DealerQuery,
    ) -> Result<PageState<Dealer>, DealerDeskError> {
        let raw = self
            .with_retry("dealers", || async {
                Ok(self.inner.list_dealers(query).await?)
            })
            .await?;
        Ok(normalize(Some(&raw)).decode())
    }

    /// Fetches one page of users as canonical page state.
    pub async fn users_page(&self, query: &UserQuery) -> Result<PageState<User>, DealerDeskError> {
        let raw = self
            .with_retry("users", || async { Ok(self.inner.list_users(query).await?) })
            .await?;
        Ok(normalize(Some(&raw)).decode())
    }

    /// Fetches one page of vehicle variants as canonical page state.
    pub async fn vehicle_variants_page(
        &self,
        query: &VehicleQuery,
    ) -> Result<PageState<VehicleVariant>, DealerDeskError> {
        let raw = self
            .with_retry("vehicle-variants", || async {
                Ok(self.inner.list_vehicle_variants(query).await?)
            })
            .await?;
        Ok(normalize(Some(&raw)).decode())
    }

    /// Fetches one page of sales orders as canonical page state.
    pub async fn sales_orders_page(
        &self,
        query: &OrderQuery,
    ) -> Result<PageState<SalesOrder>, DealerDeskError> {
        let raw = self
            .with_retry("sales-orders", || async {
                Ok(self.inner.list_sales_orders(query).await?)
            })
            .await?;
        Ok(normalize(Some(&raw)).decode())
    }

    /// Fetches one page of test drives as canonical page state.
    pub async fn test_drives_page(
        &self,
        query: &TestDriveQuery,
    ) -> Result<PageState<TestDrive>, DealerDeskError> {
        let raw = self
            .with_retry("test-drives", || async {
                Ok(self.inner.list_test_drives(query).await?)
            })
            .await?;
        Ok(normalize(Some(&raw)).decode())
    }

    /// Fetches one page of promotions as canonical page state.
    pub async fn promotions_page(
        &self,
        query: &PromotionQuery,
    ) -> Result<PageState<Promotion>, DealerDeskError> {
        let raw = self
            .with_retry("promotions", || async {
                Ok(self.inner.list_promotions(query).await?)
            })
            .await?;
        Ok(normalize(Some(&raw)).decode())
    }

    /// Walks dealer pages to build the reference collection used for
    /// region filter options. Bounded to `MAX_PAGES` as a runaway guard.
    pub async fn all_dealers(&self) -> Result<Vec<Dealer>, DealerDeskError> {
        const PAGE_SIZE: i64 = 100;
        const MAX_PAGES: i64 = 50;

        let mut dealers = Vec::new();
        let mut page = 1;
        loop {
            let query = DealerQuery::default()
                .with_page(page)
                .with_page_size(PAGE_SIZE);
            let state = self.dealers_page(&query).await?;
            let fetched = state.items.len();
            dealers.extend(state.items);
            if fetched == 0 || page >= state.total_pages || page >= MAX_PAGES {
                break;
            }
            page += 1;
        }
        Ok(dealers)
    }
}

fn is_retryable(err: &DealerDeskError) -> bool {
    match err {
        DealerDeskError::Api(api_err) => match api_err {
            dealerdesk_api::Error::RequestFailed => true,
            dealerdesk_api::Error::HttpStatus { status, .. } => *status == 429 || *status >= 500,
        },
        _ => false,
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(default)
}
