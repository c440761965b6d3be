use url::Url;

use crate::types::{DealerID, TestDriveStatus};

use super::common::{Query, QueryCommon};

/// Query builder for the `/test-drives` list endpoint.
#[derive(Default)]
pub struct TestDriveQuery {
    pub common: QueryCommon,
    pub status: Option<TestDriveStatus>,
    pub dealer_id: Option<DealerID>,
    pub variant_id: Option<i64>,
    pub search: Option<String>,
    pub sort_by: TestDriveSortBy,
}

impl Query for TestDriveQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(status) = self.status {
            url.query_pairs_mut()
                .append_pair("status", status.as_str());
        }
        if let Some(dealer_id) = self.dealer_id {
            url.query_pairs_mut()
                .append_pair("dealerId", &dealer_id.to_string());
        }
        if let Some(variant_id) = self.variant_id {
            url.query_pairs_mut()
                .append_pair("variantId", &variant_id.to_string());
        }
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        url.query_pairs_mut().append_pair(
            "sortBy",
            format!(
                "{}{}",
                self.common.sort_direction.prefix(),
                self.sort_by
            )
            .as_str(),
        );
        url
    }
}

impl TestDriveQuery {
    pub fn with_status(mut self, status: TestDriveStatus) -> Self {
        self.status = Some(status);
        self
    }
    pub fn with_dealer_id(mut self, dealer_id: DealerID) -> Self {
        self.dealer_id = Some(dealer_id);
        self
    }
    pub fn with_variant_id(mut self, variant_id: i64) -> Self {
        self.variant_id = Some(variant_id);
        self
    }
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
    pub fn with_sort_by(mut self, sort_by: TestDriveSortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

#[derive(Clone, Copy, Default)]
pub enum TestDriveSortBy {
    #[default]
    ScheduledAt,
    CreatedAt,
    Status,
}
impl std::fmt::Display for TestDriveSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TestDriveSortBy::ScheduledAt => "scheduledAt",
                TestDriveSortBy::CreatedAt => "createdAt",
                TestDriveSortBy::Status => "status",
            }
        )
    }
}
