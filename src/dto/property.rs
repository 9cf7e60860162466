use serde::Serialize;

use crate::domain::filters::{SearchFilters, SortBy, SortOrder};
use crate::domain::property::Property;

/// A fully validated search request as produced by the filter parser.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySearchRequest {
    pub filters: SearchFilters,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    /// 1-based page number.
    pub page: usize,
    /// Page size; the parser guarantees `1..=MAX_PAGE_SIZE`.
    pub limit: usize,
}

/// Paging envelope returned alongside every search result page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaginationInfo {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
}

#[derive(Debug, Serialize)]
pub struct PropertySearchPage {
    pub properties: Vec<Property>,
    pub pagination: PaginationInfo,
}
