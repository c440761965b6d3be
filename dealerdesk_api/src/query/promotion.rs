use url::Url;

use crate::types::DealerID;

use super::common::{Query, QueryCommon};

/// Query builder for the `/promotions` list endpoint.
#[derive(Default)]
pub struct PromotionQuery {
    pub common: QueryCommon,
    pub dealer_id: Option<DealerID>,
    pub search: Option<String>,
    pub sort_by: PromotionSortBy,
}

impl Query for PromotionQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(dealer_id) = self.dealer_id {
            url.query_pairs_mut()
                .append_pair("dealerId", &dealer_id.to_string());
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

impl PromotionQuery {
    pub fn with_dealer_id(mut self, dealer_id: DealerID) -> Self {
        self.dealer_id = Some(dealer_id);
        self
    }
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
    pub fn with_sort_by(mut self, sort_by: PromotionSortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

#[derive(Clone, Copy, Default)]
pub enum PromotionSortBy {
    #[default]
    StartDate,
    EndDate,
    CreatedAt,
}
impl std::fmt::Display for PromotionSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PromotionSortBy::StartDate => "startDate",
                PromotionSortBy::EndDate => "endDate",
                PromotionSortBy::CreatedAt => "createdAt",
            }
        )
    }
}
