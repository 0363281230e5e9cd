//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the write operations the entity supports
//!
//! Directors and genres are managed externally and therefore carry no
//! write DTOs.

pub mod director;
pub mod genre;
pub mod movie;
pub mod rating;
