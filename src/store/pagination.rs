//! Pagination Module
//!
//! Translates a 1-based page number and page size into an index window.

use crate::store::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

// == Page Request ==
/// A requested page of the employee listing.
///
/// Values are taken as the client sent them. Non-positive values select
/// nothing rather than being corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: i64,
    /// Number of records per page
    pub page_size: i64,
}

impl PageRequest {
    // == Constructor ==
    /// Creates a page request from raw client values.
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    // == Bounds ==
    /// Returns the half-open index range `[start, end)` this page covers.
    ///
    /// `start = (page - 1) * page_size` and `end = start + page_size`.
    /// Returns `None` when the page cannot select any record: a page or page
    /// size below 1, or a window past the addressable range.
    pub fn bounds(&self) -> Option<(usize, usize)> {
        if self.page < 1 || self.page_size < 1 {
            return None;
        }

        let start = (self.page - 1).checked_mul(self.page_size)?;
        let end = start.checked_add(self.page_size)?;

        Some((usize::try_from(start).ok()?, usize::try_from(end).ok()?))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}
