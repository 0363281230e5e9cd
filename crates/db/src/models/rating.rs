//! Movie rating entity model and DTO.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movie_ratings` table.
///
/// Ratings are append-only and immutable once created; they disappear
/// only through the movie delete cascade.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieRating {
    pub id: DbId,
    pub movie_id: DbId,
    pub score: i32,
    pub created_at: Timestamp,
}

/// DTO for adding a rating to a movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRating {
    /// Integer score in `[1, 10]`, validated by the orchestration layer.
    pub score: i32,
}
