//! Pagination arithmetic for listing endpoints.
//!
//! Pages are 1-based. Requesting a page beyond the last valid page is
//! not an error: the query returns an empty list while `total_count`
//! and `total_pages` stay accurate. That behaviour is an explicit
//! policy, not a bug.

use crate::error::CoreError;

/// Default number of passengers per page.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Maximum number of passengers per page.
pub const MAX_PAGE_SIZE: i64 = 500;

/// Validate `page` and `page_size` against their allowed ranges.
pub fn validate_page_params(page: i64, page_size: i64) -> Result<(), CoreError> {
    if page < 1 {
        return Err(CoreError::Validation("page must be >= 1".into()));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(CoreError::Validation(format!(
            "page_size must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }
    Ok(())
}

/// Row offset for a 1-based page number.
///
/// Saturates on overflow: a saturated offset is past the end of any
/// dataset, so an absurdly large page number yields an empty page
/// rather than a panic or a negative offset.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    (page - 1).saturating_mul(page_size)
}

/// Total number of pages: `ceil(total_count / page_size)`, 0 when the
/// dataset is empty.
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    (total_count + page_size - 1) / page_size
}
