//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters accepted by `GET /movies`.
///
/// Pagination values are normalized in `cinelog_core::pagination`
/// rather than rejected; filter fields combine with AND.
#[derive(Debug, Deserialize)]
pub struct MovieListQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Case-insensitive substring match on title.
    pub title: Option<String>,
    /// Exact match on release year.
    pub release_year: Option<i32>,
    /// Case-insensitive substring match on any associated genre's name.
    pub genre: Option<String>,
}
