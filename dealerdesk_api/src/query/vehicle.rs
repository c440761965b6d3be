use url::Url;

use crate::types::VehicleStatus;

use super::common::{Query, QueryCommon};

/// Query builder for the `/vehicle-variants` list endpoint.
#[derive(Default)]
pub struct VehicleQuery {
    pub common: QueryCommon,
    pub status: Option<VehicleStatus>,
    pub search: Option<String>,
    pub sort_by: VehicleSortBy,
}

impl Query for VehicleQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(status) = self.status {
            url.query_pairs_mut()
                .append_pair("status", status.as_str());
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

impl VehicleQuery {
    pub fn with_status(mut self, status: VehicleStatus) -> Self {
        self.status = Some(status);
        self
    }
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
    pub fn with_sort_by(mut self, sort_by: VehicleSortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

#[derive(Clone, Copy, Default)]
pub enum VehicleSortBy {
    #[default]
    Name,
    Price,
    CreatedAt,
}
impl std::fmt::Display for VehicleSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VehicleSortBy::Name => "name",
                VehicleSortBy::Price => "price",
                VehicleSortBy::CreatedAt => "createdAt",
            }
        )
    }
}
