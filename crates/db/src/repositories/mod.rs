//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. No business rules here; the
//! orchestration layer validates references before writing.

pub mod director_repo;
pub mod genre_repo;
pub mod movie_repo;
pub mod rating_repo;

pub use director_repo::DirectorRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
pub use rating_repo::RatingRepo;
