use url::Url;

use crate::types::DealerStatus;

use super::common::{Query, QueryCommon};

/// Query builder for the `/dealers` list endpoint.
#[derive(Default)]
pub struct DealerQuery {
    pub common: QueryCommon,
    pub status: Option<DealerStatus>,
    pub region: Option<String>,
    pub search: Option<String>,
    pub sort_by: DealerSortBy,
}

impl Query for DealerQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(status) = self.status {
            url.query_pairs_mut()
                .append_pair("status", status.as_str());
        }
        if let Some(region) = &self.region {
            url.query_pairs_mut().append_pair("region", region.as_str());
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

impl DealerQuery {
    pub fn with_status(mut self, status: DealerStatus) -> Self {
        self.status = Some(status);
        self
    }
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
    pub fn with_sort_by(mut self, sort_by: DealerSortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

#[derive(Clone, Copy, Default)]
pub enum DealerSortBy {
    #[default]
    Name,
    Region,
    CreatedAt,
}
impl std::fmt::Display for DealerSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DealerSortBy::Name => "name",
                DealerSortBy::Region => "region",
                DealerSortBy::CreatedAt => "createdAt",
            }
        )
    }
}
