//! Director entity model.

use cinelog_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `directors` table.
///
/// Rows are seeded and maintained outside this service; the catalog
/// only reads them to validate and embed movie references.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: String,
    pub birth_year: Option<i32>,
    pub description: Option<String>,
}
