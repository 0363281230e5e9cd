//! Read-only repository for the `genres` table.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::Genre;

/// Column list for genres queries.
const COLUMNS: &str = "id, name, description";

/// Read access to genres. Rows are managed externally; this service
/// never writes them.
pub struct GenreRepo;

impl GenreRepo {
    /// Fetch all genres whose IDs appear in `ids`.
    ///
    /// Unknown IDs are simply missing from the result; callers detect
    /// gaps by comparing counts against the distinct input set. Empty
    /// input short-circuits without touching the database.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Genre>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Genre>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
