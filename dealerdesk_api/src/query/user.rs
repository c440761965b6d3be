use url::Url;

use crate::types::{DealerID, UserRole, UserStatus};

use super::common::{Query, QueryCommon};

/// Query builder for the `/users` list endpoint.
#[derive(Default)]
pub struct UserQuery {
    pub common: QueryCommon,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub dealer_id: Option<DealerID>,
    pub search: Option<String>,
    pub sort_by: UserSortBy,
}

impl Query for UserQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(role) = self.role {
            url.query_pairs_mut().append_pair("role", role.as_str());
        }
        if let Some(status) = self.status {
            url.query_pairs_mut()
                .append_pair("status", status.as_str());
        }
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

impl UserQuery {
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }
    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }
    pub fn with_dealer_id(mut self, dealer_id: DealerID) -> Self {
        self.dealer_id = Some(dealer_id);
        self
    }
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
    pub fn with_sort_by(mut self, sort_by: UserSortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

#[derive(Clone, Copy, Default)]
pub enum UserSortBy {
    #[default]
    Name,
    Role,
    CreatedAt,
}
impl std::fmt::Display for UserSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                UserSortBy::Name => "fullName",
                UserSortBy::Role => "role",
                UserSortBy::CreatedAt => "createdAt",
            }
        )
    }
}
