//! Genre entity model.

use cinelog_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `genres` table. Names are unique.
///
/// Like directors, genres are managed externally and only read here.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}
