//! Repository for the `movies` table and its relations.
//!
//! Listing and single fetches eagerly load the director, genres, and
//! ratings of every returned movie, so the projection layer never goes
//! back to the database.

use std::collections::HashMap;

use cinelog_core::pagination;
use cinelog_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::director::Director;
use crate::models::genre::Genre;
use crate::models::movie::{CreateMovie, Movie, MovieFilters, MovieWithRelations, UpdateMovie};
use crate::models::rating::MovieRating;

/// Column list for movies queries.
const COLUMNS: &str = "id, title, director_id, release_year, movie_cast, created_at, updated_at";

/// Shared WHERE clause applying the optional conjunctive filters.
///
/// `$1` is a title substring, `$2` an exact release year, `$3` a
/// genre-name substring; a NULL bind leaves the corresponding predicate
/// unconstrained.
const FILTER_WHERE: &str = "($1::TEXT IS NULL OR m.title ILIKE '%' || $1 || '%') \
       AND ($2::INT IS NULL OR m.release_year = $2) \
       AND ($3::TEXT IS NULL OR EXISTS ( \
              SELECT 1 FROM genres_movie gm \
              JOIN genres g ON g.id = gm.genre_id \
              WHERE gm.movie_id = m.id AND g.name ILIKE '%' || $3 || '%'))";

/// Provides read and write access to movies, including association
/// maintenance for the genre set.
pub struct MovieRepo;

impl MovieRepo {
    /// Return one page of movies matching `filters`, plus the total
    /// matching count (pre-pagination).
    ///
    /// Rows are ordered by `id` so pagination is deterministic. `page`
    /// and `page_size` must already be normalized by the caller.
    pub async fn list_paged(
        pool: &PgPool,
        filters: &MovieFilters,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<MovieWithRelations>, i64), sqlx::Error> {
        let offset = pagination::offset(page, page_size);

        let query = format!(
            "SELECT {COLUMNS} FROM movies m \
             WHERE {FILTER_WHERE} \
             ORDER BY m.id \
             LIMIT $4 OFFSET $5"
        );
        let movies: Vec<Movie> = sqlx::query_as(&query)
            .bind(filters.title.as_deref())
            .bind(filters.release_year)
            .bind(filters.genre.as_deref())
            .bind(page_size)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM movies m WHERE {FILTER_WHERE}");
        let total: i64 = sqlx::query_scalar(&count_query)
            .bind(filters.title.as_deref())
            .bind(filters.release_year)
            .bind(filters.genre.as_deref())
            .fetch_one(pool)
            .await?;

        tracing::debug!(page, page_size, total, "movie page fetched");

        let loaded = Self::load_relations(pool, movies).await?;
        Ok((loaded, total))
    }

    /// Find a movie by its ID, relations included.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieWithRelations>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        let Some(movie) = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let mut loaded = Self::load_relations(pool, vec![movie]).await?;
        Ok(loaded.pop())
    }

    /// Insert a movie and its genre links in one transaction, returning
    /// the fully loaded row.
    ///
    /// `genres` must already be resolved and validated; unknown IDs
    /// would violate the association foreign key.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMovie,
        genres: &[Genre],
    ) -> Result<MovieWithRelations, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO movies (title, director_id, release_year, movie_cast) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let movie: Movie = sqlx::query_as(&query)
            .bind(&input.title)
            .bind(input.director_id)
            .bind(input.release_year)
            .bind(&input.cast)
            .fetch_one(&mut *tx)
            .await?;

        insert_genre_links(&mut tx, movie.id, genres).await?;

        tx.commit().await?;

        let mut loaded = Self::load_relations(pool, vec![movie]).await?;
        loaded.pop().ok_or(sqlx::Error::RowNotFound)
    }

    /// Update a movie's fields and replace its genre set wholesale.
    ///
    /// The director reference is never touched. Returns `None` if no
    /// movie with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
        genres: &[Genre],
    ) -> Result<Option<MovieWithRelations>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE movies \
             SET title = $2, release_year = $3, movie_cast = $4, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let Some(movie) = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.release_year)
            .bind(&input.cast)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        // Wholesale replacement: clear the association set, then re-link.
        sqlx::query("DELETE FROM genres_movie WHERE movie_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        insert_genre_links(&mut tx, id, genres).await?;

        tx.commit().await?;

        let mut loaded = Self::load_relations(pool, vec![movie]).await?;
        Ok(loaded.pop())
    }

    /// Delete a movie. Returns `false` if no row with `id` exists.
    ///
    /// Ratings and genre links go with it via `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Batch-load directors, genres, and ratings for the given movie
    /// rows, preserving row order.
    async fn load_relations(
        pool: &PgPool,
        movies: Vec<Movie>,
    ) -> Result<Vec<MovieWithRelations>, sqlx::Error> {
        if movies.is_empty() {
            return Ok(Vec::new());
        }

        let movie_ids: Vec<DbId> = movies.iter().map(|m| m.id).collect();
        let director_ids: Vec<DbId> = movies.iter().map(|m| m.director_id).collect();

        let directors: Vec<Director> = sqlx::query_as(
            "SELECT id, name, birth_year, description FROM directors WHERE id = ANY($1)",
        )
        .bind(&director_ids)
        .fetch_all(pool)
        .await?;
        let directors_by_id: HashMap<DbId, Director> =
            directors.into_iter().map(|d| (d.id, d)).collect();

        let genre_rows: Vec<(DbId, DbId, String, Option<String>)> = sqlx::query_as(
            "SELECT gm.movie_id, g.id, g.name, g.description \
             FROM genres_movie gm \
             JOIN genres g ON g.id = gm.genre_id \
             WHERE gm.movie_id = ANY($1) \
             ORDER BY gm.movie_id, g.id",
        )
        .bind(&movie_ids)
        .fetch_all(pool)
        .await?;
        let mut genres_by_movie: HashMap<DbId, Vec<Genre>> = HashMap::new();
        for (movie_id, id, name, description) in genre_rows {
            genres_by_movie.entry(movie_id).or_default().push(Genre {
                id,
                name,
                description,
            });
        }

        let ratings: Vec<MovieRating> = sqlx::query_as(
            "SELECT id, movie_id, score, created_at \
             FROM movie_ratings \
             WHERE movie_id = ANY($1) \
             ORDER BY id",
        )
        .bind(&movie_ids)
        .fetch_all(pool)
        .await?;
        let mut ratings_by_movie: HashMap<DbId, Vec<MovieRating>> = HashMap::new();
        for rating in ratings {
            ratings_by_movie
                .entry(rating.movie_id)
                .or_default()
                .push(rating);
        }

        let assembled = movies
            .into_iter()
            .map(|movie| {
                let director = directors_by_id.get(&movie.director_id).cloned();
                let genres = genres_by_movie.remove(&movie.id).unwrap_or_default();
                let ratings = ratings_by_movie.remove(&movie.id).unwrap_or_default();
                MovieWithRelations {
                    movie,
                    director,
                    genres,
                    ratings,
                }
            })
            .collect();

        Ok(assembled)
    }
}

/// Link a movie to each genre in `genres` within the given transaction.
async fn insert_genre_links(
    tx: &mut Transaction<'_, Postgres>,
    movie_id: DbId,
    genres: &[Genre],
) -> Result<(), sqlx::Error> {
    if genres.is_empty() {
        return Ok(());
    }

    let genre_ids: Vec<DbId> = genres.iter().map(|g| g.id).collect();
    sqlx::query("INSERT INTO genres_movie (movie_id, genre_id) SELECT $1, unnest($2::BIGINT[])")
        .bind(movie_id)
        .bind(&genre_ids)
        .execute(&mut **tx)
        .await?;

    Ok(())
}
