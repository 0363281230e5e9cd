//! Repository for the `movie_ratings` table.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::rating::MovieRating;

/// Column list for movie_ratings queries.
const COLUMNS: &str = "id, movie_id, score, created_at";

/// Append-only access to ratings. Rows are immutable once created and
/// removed only by the movie delete cascade.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert a rating for a movie, returning the created row.
    pub async fn create(
        pool: &PgPool,
        movie_id: DbId,
        score: i32,
    ) -> Result<MovieRating, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_ratings (movie_id, score) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieRating>(&query)
            .bind(movie_id)
            .bind(score)
            .fetch_one(pool)
            .await
    }
}
