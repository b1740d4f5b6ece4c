//! Request DTOs for the employee server API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

use crate::store::{PageRequest, DEFAULT_PAGE};

/// Query string for the list operation (GET /employees)
///
/// Both values are kept as raw text so that an unparsable value falls back
/// to its default instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<String>,
    /// Records per page
    #[serde(default, rename = "pageSize")]
    pub page_size: Option<String>,
}

impl ListQuery {
    /// Resolves the query into a page request.
    ///
    /// Absent or non-integer values become page 1 and `default_page_size`.
    pub fn page_request(&self, default_page_size: i64) -> PageRequest {
        PageRequest::new(
            parse_or(self.page.as_deref(), DEFAULT_PAGE),
            parse_or(self.page_size.as_deref(), default_page_size),
        )
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(default)
}
