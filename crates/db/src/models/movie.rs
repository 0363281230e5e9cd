//! Movie entity model and DTOs.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::director::Director;
use crate::models::genre::Genre;
use crate::models::rating::MovieRating;

/// A row from the `movies` table.
///
/// The free-text cast field is stored as `movie_cast` (`cast` is
/// reserved in SQL); responses expose it as `cast`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub director_id: DbId,
    pub release_year: Option<i32>,
    pub movie_cast: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A movie with its relations eagerly loaded.
///
/// Everything the projection layer needs is on this struct, so building
/// a response never goes back to the database.
#[derive(Debug, Clone)]
pub struct MovieWithRelations {
    pub movie: Movie,
    /// `None` only when the director row is missing despite the foreign
    /// key; reads substitute a sentinel instead of failing.
    pub director: Option<Director>,
    pub genres: Vec<Genre>,
    /// Insertion-ordered.
    pub ratings: Vec<MovieRating>,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub director_id: DbId,
    pub release_year: Option<i32>,
    pub cast: Option<String>,
    /// Genre IDs to associate. Duplicates are tolerated, unknown IDs
    /// are rejected by the orchestration layer before this DTO reaches
    /// the repository.
    pub genres: Vec<DbId>,
}

/// DTO for updating an existing movie.
///
/// The director reference is deliberately absent: updates never change
/// it. The genre set is replaced wholesale, not merged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovie {
    pub title: String,
    pub release_year: Option<i32>,
    pub cast: Option<String>,
    pub genres: Vec<DbId>,
}

/// Optional conjunctive filters for movie listing.
///
/// Absent fields impose no constraint; provided fields combine with AND.
#[derive(Debug, Clone, Default)]
pub struct MovieFilters {
    /// Case-insensitive substring match on title.
    pub title: Option<String>,
    /// Exact match on release year.
    pub release_year: Option<i32>,
    /// Case-insensitive substring match on any associated genre's name.
    pub genre: Option<String>,
}
