use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Pagination metadata, passed through from the pagination collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    pub count: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub last_page: u64,
    pub has_more_pages: bool,
}

impl PageMeta {
    /// Derives the page arithmetic when the collaborator only reports totals.
    /// `last_page` is at least 1 so an empty result still reads as page 1 of 1.
    pub fn from_totals(total: u64, per_page: u64, current_page: u64, count: u64) -> Self {
        let last_page = if per_page == 0 { 1 } else { total.div_ceil(per_page).max(1) };
        Self {
            total,
            count,
            per_page,
            current_page,
            last_page,
            has_more_pages: current_page < last_page,
        }
    }
}

/// One page of projected documents plus its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionEnvelope {
    pub data: Vec<Value>,
    pub meta: PageMeta,
}

impl CollectionEnvelope {
    pub fn new(data: Vec<Value>, meta: PageMeta) -> Self {
        Self { data, meta }
    }

    pub fn to_api_value(&self) -> Value {
        json!({ "data": self.data, "meta": self.meta })
    }
}
