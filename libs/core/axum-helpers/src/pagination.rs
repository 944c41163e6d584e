//! Page/limit pagination shared by every list endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

pub fn default_page() -> u64 {
    DEFAULT_PAGE
}

pub fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

/// Pagination metadata returned next to a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    /// 1-based page number that was requested
    pub current_page: u64,
    /// Page size
    pub limit: u64,
    /// Number of records matching the filter, across all pages
    pub total: u64,
    /// Number of pages needed to show `total` records
    pub total_page: u64,
}

impl Pagination {
    pub fn new(current_page: u64, limit: u64, total: u64) -> Self {
        let total_page = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            current_page,
            limit,
            total,
            total_page,
        }
    }

    /// Number of records to skip before the requested page.
    pub fn skip(page: u64, limit: u64) -> u64 {
        page.saturating_sub(1).saturating_mul(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_page_rounds_up() {
        assert_eq!(Pagination::new(1, 20, 41).total_page, 3);
        assert_eq!(Pagination::new(1, 20, 40).total_page, 2);
        assert_eq!(Pagination::new(1, 20, 1).total_page, 1);
    }

    #[test]
    fn test_empty_result_has_zero_pages() {
        let page = Pagination::new(1, 20, 0);
        assert_eq!(page.total, 0);
        assert_eq!(page.total_page, 0);
    }

    #[test]
    fn test_skip() {
        assert_eq!(Pagination::skip(1, 20), 0);
        assert_eq!(Pagination::skip(3, 20), 40);
        assert_eq!(Pagination::skip(0, 20), 0);
        assert_eq!(Pagination::skip(u64::MAX, u64::MAX), u64::MAX);
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(Pagination::new(2, 10, 15)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"current_page": 2, "limit": 10, "total": 15, "total_page": 2})
        );
    }
}
