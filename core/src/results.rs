//! Wrappers for list responses: plain, paginated and bulk.

use serde_json::Value;

use crate::http::find_header;

pub const TOTAL_COUNT_HEADER: &str = "x-pagination-total-count";
pub const PAGE_COUNT_HEADER: &str = "x-pagination-page-count";
pub const LIMIT_HEADER: &str = "x-pagination-limit";
pub const PAGE_HEADER: &str = "x-pagination-page";

/// Outcome of a list call.
///
/// `Paginated` is only produced when the response carries both the total
/// count and the current page headers.
#[derive(Debug, Clone, PartialEq)]
pub enum ListResult<T> {
    Plain(Vec<T>),
    Paginated(PaginatedResult<T>),
}

impl<T> ListResult<T> {
    pub fn items(&self) -> &[T] {
        match self {
            ListResult::Plain(items) => items,
            ListResult::Paginated(page) => &page.items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResult::Plain(items) => items,
            ListResult::Paginated(page) => page.items,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn pagination(&self) -> Option<&PaginatedResult<T>> {
        match self {
            ListResult::Plain(_) => None,
            ListResult::Paginated(page) => Some(page),
        }
    }
}

/// A page of items plus the pagination metadata reported in headers.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_results: u64,
    pub total_pages: u64,
    pub results_per_page: u64,
    pub current_page: u64,
}

impl<T> PaginatedResult<T> {
    /// Build a page when both required pagination headers are present and
    /// non-empty.
    pub fn from_headers(items: Vec<T>, headers: &[(String, String)]) -> Result<Self, Vec<T>> {
        let present = |name: &str| find_header(headers, name).filter(|v| !v.trim().is_empty());
        let (Some(total), Some(page)) = (present(TOTAL_COUNT_HEADER), present(PAGE_HEADER)) else {
            return Err(items);
        };

        let number = |raw: Option<&str>| raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0);
        Ok(Self {
            items,
            total_results: number(Some(total)),
            total_pages: number(find_header(headers, PAGE_COUNT_HEADER)),
            results_per_page: number(find_header(headers, LIMIT_HEADER)),
            current_page: number(Some(page)),
        })
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page > 0 && self.current_page < self.total_pages
    }

    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn is_first_page(&self) -> bool {
        !self.has_prev_page()
    }

    pub fn is_last_page(&self) -> bool {
        !self.has_next_page()
    }

    /// Number of the following page, or the current one on the last page.
    pub fn next_page(&self) -> u64 {
        if self.has_next_page() {
            self.current_page + 1
        } else {
            self.current_page
        }
    }

    /// Number of the preceding page, or the current one on the first page.
    pub fn prev_page(&self) -> u64 {
        if self.has_prev_page() {
            self.current_page - 1
        } else {
            self.current_page
        }
    }
}

/// Items created or updated by a bulk endpoint, with the per-item failures
/// the API reported alongside them.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkResult<T> {
    pub items: Vec<T>,
    pub errors: Value,
}
