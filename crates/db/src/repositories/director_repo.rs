//! Read-only repository for the `directors` table.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::director::Director;

/// Column list for directors queries.
const COLUMNS: &str = "id, name, birth_year, description";

/// Read access to directors. Rows are managed externally; this service
/// never writes them.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Find a director by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE id = $1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
