// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Pagination.
//!
//! A paginated select runs two statements built from the same base query:
//!
//! ```text
//! base:  SELECT * FROM orders WHERE total > ?
//!
//! count: SELECT COUNT(*) FROM ( base ) count_query
//! rows:  base LIMIT 10 OFFSET 20                     -- PostgreSQL, page 3 of 10
//! ```
//!
//! The two statements are not run atomically; the count may disagree with
//! the rows when the table changes in between.

use crate::{dialect::Dialect, error::ValidationError};

/// A validated page request.
///
/// Page numbers start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page_number: i64,
    page_size:   i64,
    offset:      i64,
    end_row:     i64
}

impl PageRequest {
    /// Validate a page request.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidPageNumber`] when `page_number < 1`
    /// - [`ValidationError::InvalidPageSize`] when `page_size < 1`
    /// - [`ValidationError::PageOffsetOverflow`] when the last row of the page
    ///   does not fit into `i64`
    ///
    /// # Example
    ///
    /// ```rust
    /// use fastsql_core::PageRequest;
    ///
    /// let page = PageRequest::new(3, 10).unwrap();
    /// assert_eq!(page.offset(), 20);
    /// assert_eq!(page.end_row(), 30);
    ///
    /// assert!(PageRequest::new(0, 10).is_err());
    /// ```
    pub fn new(page_number: i64, page_size: i64) -> Result<Self, ValidationError> {
        if page_number < 1 {
            return Err(ValidationError::InvalidPageNumber(page_number));
        }
        if page_size < 1 {
            return Err(ValidationError::InvalidPageSize(page_size));
        }
        let overflow = ValidationError::PageOffsetOverflow {
            page_number,
            page_size
        };
        let offset = (page_number - 1)
            .checked_mul(page_size)
            .ok_or_else(|| overflow.clone())?;
        let end_row = offset.checked_add(page_size).ok_or(overflow)?;
        Ok(Self {
            page_number,
            page_size,
            offset,
            end_row
        })
    }

    /// Requested page, starting at 1.
    #[must_use]
    pub const fn page_number(&self) -> i64 {
        self.page_number
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Rows skipped before this page.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.offset
    }

    /// 1-based index of the last row on this page.
    #[must_use]
    pub const fn end_row(&self) -> i64 {
        self.end_row
    }
}

/// One page of entities plus the unpaginated total.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PageResult<E> {
    /// Entities on this page.
    pub items:       Vec<E>,
    /// Rows matching the condition across all pages.
    pub total_count: u64,
    /// Requested page, starting at 1.
    pub page_number: i64,
    /// Rows per page.
    pub page_size:   i64
}

impl<E> PageResult<E> {
    /// Assemble a page result.
    pub fn new(items: Vec<E>, total_count: u64, page: &PageRequest) -> Self {
        Self {
            items,
            total_count,
            page_number: page.page_number,
            page_size: page.page_size
        }
    }

    /// Number of pages needed for `total_count` rows.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        let size = self.page_size.unsigned_abs().max(1);
        self.total_count.div_ceil(size)
    }

    /// Check if a later page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page_number.unsigned_abs() < self.total_pages()
    }

    /// Convert the items, keeping the paging information.
    pub fn map<T>(self, f: impl FnMut(E) -> T) -> PageResult<T> {
        PageResult {
            items:       self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size:   self.page_size
        }
    }
}

/// Wrap a query so it returns the number of rows it would select.
///
/// The base query is embedded unchanged for every dialect.
///
/// ```rust
/// use fastsql_core::page::build_count_query;
///
/// assert_eq!(
///     build_count_query("SELECT * FROM orders"),
///     "SELECT COUNT(*) FROM ( SELECT * FROM orders ) count_query"
/// );
/// ```
#[must_use]
pub fn build_count_query(base: &str) -> String {
    format!("SELECT COUNT(*) FROM ( {base} ) count_query")
}

/// Restrict a query to one page of rows.
///
/// | Dialect | Result |
/// |---------|--------|
/// | MySQL | `base LIMIT offset,size` |
/// | PostgreSQL | `base LIMIT size OFFSET offset` |
/// | Oracle | `SELECT * FROM ( SELECT A.*, ROWNUM RN FROM ( base ) A WHERE ROWNUM <= end ) WHERE RN >= offset+1` |
///
/// Oracle assigns `ROWNUM` before an outer `WHERE` applies, so the window
/// needs two nested filters. `RN` is 1-based, so the lower bound is
/// `offset+1`; `RN >= offset` would repeat the previous page's last row.
#[must_use]
pub fn build_rows_query(base: &str, page: &PageRequest, dialect: Dialect) -> String {
    match dialect {
        Dialect::MySql => format!("{base} LIMIT {},{}", page.offset, page.page_size),
        Dialect::PostgreSql => format!("{base} LIMIT {} OFFSET {}", page.page_size, page.offset),
        Dialect::Oracle => format!(
            "SELECT * FROM ( SELECT A.*, ROWNUM RN FROM ( {base} ) A WHERE ROWNUM <= {} ) WHERE RN >= {}",
            page.end_row,
            page.offset + 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "SELECT * FROM orders WHERE total > ?";

    fn page(number: i64, size: i64) -> PageRequest {
        PageRequest::new(number, size).unwrap()
    }

    #[test]
    fn offsets() {
        assert_eq!(page(1, 20).offset(), 0);
        assert_eq!(page(3, 10).offset(), 20);
        assert_eq!(page(3, 10).end_row(), 30);
    }

    #[test]
    fn rejects_bad_requests() {
        assert_eq!(PageRequest::new(0, 10), Err(ValidationError::InvalidPageNumber(0)));
        assert_eq!(PageRequest::new(-1, 10), Err(ValidationError::InvalidPageNumber(-1)));
        assert_eq!(PageRequest::new(1, 0), Err(ValidationError::InvalidPageSize(0)));
        assert_eq!(
            PageRequest::new(i64::MAX, 2),
            Err(ValidationError::PageOffsetOverflow {
                page_number: i64::MAX,
                page_size:   2
            })
        );
        assert!(PageRequest::new(2, i64::MAX).is_err());
    }

    #[test]
    fn count_query_wraps_base_unchanged() {
        let count = build_count_query(BASE);
        assert_eq!(count, format!("SELECT COUNT(*) FROM ( {BASE} ) count_query"));
        assert!(count.contains(BASE));
    }

    #[test]
    fn mysql_rows() {
        assert!(build_rows_query(BASE, &page(1, 20), Dialect::MySql).ends_with("LIMIT 0,20"));
        assert_eq!(
            build_rows_query(BASE, &page(3, 10), Dialect::MySql),
            format!("{BASE} LIMIT 20,10")
        );
    }

    #[test]
    fn postgresql_rows() {
        assert!(
            build_rows_query(BASE, &page(1, 20), Dialect::PostgreSql).ends_with("LIMIT 20 OFFSET 0")
        );
        assert_eq!(
            build_rows_query(BASE, &page(3, 10), Dialect::PostgreSql),
            format!("{BASE} LIMIT 10 OFFSET 20")
        );
    }

    #[test]
    fn oracle_rows() {
        assert_eq!(
            build_rows_query(BASE, &page(3, 10), Dialect::Oracle),
            format!(
                "SELECT * FROM ( SELECT A.*, ROWNUM RN FROM ( {BASE} ) A WHERE ROWNUM <= 30 ) WHERE RN >= 21"
            )
        );
        assert!(build_rows_query(BASE, &page(1, 5), Dialect::Oracle).ends_with("WHERE RN >= 1"));
    }

    #[test]
    fn page_result_totals() {
        let result = PageResult::new(vec![1, 2, 3, 4, 5], 12, &page(2, 5));
        assert_eq!(result.total_pages(), 3);
        assert!(result.has_next());

        let last = PageResult::new(vec![11, 12], 12, &page(3, 5));
        assert!(!last.has_next());

        let empty = PageResult::<i32>::new(Vec::new(), 0, &page(1, 5));
        assert_eq!(empty.total_pages(), 0);
        assert!(!empty.has_next());
    }

    #[test]
    fn page_result_map() {
        let result = PageResult::new(vec![1, 2], 2, &page(1, 10)).map(|n| n * 10);
        assert_eq!(result.items, vec![10, 20]);
        assert_eq!(result.total_count, 2);
        assert_eq!(result.page_size, 10);
    }
}
