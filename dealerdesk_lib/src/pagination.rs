//! Canonical pagination state and the list-response normalizer.
//!
//! The backend's list endpoints disagree on payload shape: some wrap
//! everything under `data`, some return the item array directly, some
//! name the grand total `totalResults` and others `total`. Every screen
//! consumes the same canonical [`PageState`] instead, produced by
//! [`normalize`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Page size assumed when the payload does not carry one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Canonical, view-ready description of one page of a list result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageState<T> {
    /// Items of the current page.
    pub items: Vec<T>,
    /// 1-indexed page number as reported by the backend. Not clamped
    /// here; consumers use [`PageState::clamped_page`].
    pub page: i64,
    pub page_size: i64,
    /// Grand total across all pages.
    pub total_items: i64,
    /// Always derived from `total_items` and `page_size`, never trusted
    /// from the backend.
    pub total_pages: i64,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
            total_pages: 1,
        }
    }
}

/// Converts an arbitrary backend list payload into a canonical [`PageState`].
///
/// Resolution order: unwrap `data` if present, else use the payload
/// directly; treat the whole value as the item array if it is one, else
/// read `items`, else empty. `page` defaults to 1, `pageSize` to 10;
/// `totalItems` falls back `totalResults` → `total` → item count. The
/// chain order is observable behavior and must not change.
///
/// Never fails: any malformed or absent input yields the default empty
/// state. Pure function of its input.
pub fn normalize(response: Option<&Value>) -> PageState<Value> {
    let Some(response) = response else {
        return PageState::default();
    };
    let data = response.get("data").unwrap_or(response);

    let items: Vec<Value> = if let Some(arr) = data.as_array() {
        arr.clone()
    } else if let Some(arr) = data.get("items").and_then(Value::as_array) {
        arr.clone()
    } else {
        Vec::new()
    };

    let page = int_field(data, "page").unwrap_or(1);
    let page_size = int_field(data, "pageSize").unwrap_or(DEFAULT_PAGE_SIZE);
    let total_items = int_field(data, "totalResults")
        .or_else(|| int_field(data, "total"))
        .unwrap_or(items.len() as i64);

    PageState {
        total_pages: total_pages_for(total_items, page_size),
        items,
        page,
        page_size,
        total_items,
    }
}

/// `max(1, ceil(total_items / page_size))`, with a non-positive page
/// size yielding 1.
pub(crate) fn total_pages_for(total_items: i64, page_size: i64) -> i64 {
    if page_size <= 0 {
        return 1;
    }
    let total = total_items.max(0);
    ((total + page_size - 1) / page_size).max(1)
}

fn int_field(data: &Value, key: &str) -> Option<i64> {
    match data.get(key) {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    }
}

impl PageState<Value> {
    /// Decodes the raw items into typed records. Items that fail to
    /// decode are dropped with a warning; pagination fields (including
    /// `total_items`, which counts the raw payload) are kept as-is.
    pub fn decode<T: DeserializeOwned>(self) -> PageState<T> {
        let PageState {
            items,
            page,
            page_size,
            total_items,
            total_pages,
        } = self;
        let mut decoded = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<T>(item) {
                Ok(record) => decoded.push(record),
                Err(e) => tracing::warn!("Dropping undecodable list item: {}", e),
            }
        }
        PageState {
            items: decoded,
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

impl<T> PageState<T> {
    /// `page` clamped to `[1, total_pages]`, for pager controls.
    pub fn clamped_page(&self) -> i64 {
        self.page.clamp(1, self.total_pages.max(1))
    }

    pub fn has_more(&self) -> bool {
        self.clamped_page() < self.total_pages
    }

    pub fn is_first_page(&self) -> bool {
        self.clamped_page() == 1
    }

    pub fn is_last_page(&self) -> bool {
        !self.has_more()
    }
}
