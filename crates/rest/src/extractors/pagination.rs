//! Pagination extractor.
//!
//! Extracts `limit` and `offset` from the query string. Parsing is lenient:
//! a missing, unparseable or out-of-range value silently falls back to its
//! default, so this extractor never rejects a request.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

/// Page size used when `limit` is missing, unparseable or not positive.
pub const DEFAULT_LIMIT: i64 = 10;

/// Offset used when `offset` is missing, unparseable or negative.
pub const DEFAULT_OFFSET: i64 = 0;

/// Axum extractor for pagination parameters.
///
/// # Example
///
/// ```rust,ignore
/// use medication_rest::extractors::Pagination;
///
/// async fn list_handler(pagination: Pagination) {
///     let limit = pagination.limit();
///     let offset = pagination.offset();
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of items to return. Always positive.
    limit: i64,
    /// Number of leading items to skip. Never negative.
    offset: i64,
}

/// Raw query parameters. Kept as strings so bad values can fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
struct PaginationQuery {
    limit: Option<String>,
    offset: Option<String>,
}

impl Pagination {
    /// Creates a Pagination, replacing out-of-range values with defaults.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: if limit > 0 { limit } else { DEFAULT_LIMIT },
            offset: if offset >= 0 { offset } else { DEFAULT_OFFSET },
        }
    }

    /// Builds pagination from raw query values.
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_LIMIT);
        let offset = offset
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_OFFSET);
        Self::new(limit, offset)
    }

    /// Returns the page size.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Returns the offset.
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<PaginationQuery>::from_request_parts(parts, state)
            .await
            .map(|Query(q)| q)
            .unwrap_or_default();

        Ok(Pagination::from_raw(
            query.limit.as_deref(),
            query.offset.as_deref(),
        ))
    }
}
