//! Handlers for the movie catalog.
//!
//! Each handler is the orchestration procedure for one operation:
//! validate references, perform the mutation, project the result.
//! Every violated precondition raises a distinct [`CoreError`] variant
//! that the error layer maps to a response code.

use std::collections::HashSet;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_core::pagination;
use cinelog_core::rating;
use cinelog_core::types::DbId;
use cinelog_db::models::genre::Genre;
use cinelog_db::models::movie::{CreateMovie, MovieFilters, UpdateMovie};
use cinelog_db::models::rating::CreateRating;
use cinelog_db::repositories::{DirectorRepo, GenreRepo, MovieRepo, RatingRepo};

use crate::error::{AppError, AppResult};
use crate::projection::{self, PaginatedMovies};
use crate::query::MovieListQuery;
use crate::response::ApiResponse;
use crate::state::AppState;

fn movie_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// Resolve the supplied genre ids, requiring every distinct id to exist.
///
/// Duplicates in the input are tolerated; unknown ids are not, and
/// partial validity is not partial success.
async fn resolve_genres(state: &AppState, genre_ids: &[DbId]) -> AppResult<Vec<Genre>> {
    let genres = GenreRepo::find_by_ids(&state.pool, genre_ids).await?;

    let distinct: HashSet<DbId> = genre_ids.iter().copied().collect();
    if genres.len() != distinct.len() {
        tracing::warn!(
            supplied = distinct.len(),
            resolved = genres.len(),
            "genre validation failed"
        );
        return Err(AppError::Core(CoreError::InvalidReference(
            "One or more genres not found".to_string(),
        )));
    }

    Ok(genres)
}

/// GET /api/v1/movies
///
/// List movies with pagination and optional conjunctive filters on
/// title (substring), release year (exact), and genre name (substring).
/// Pagination values are normalized, never rejected; `total_items`
/// reflects the filtered set, not the whole catalog.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieListQuery>,
) -> AppResult<impl IntoResponse> {
    let page = pagination::normalize_page(params.page);
    let page_size = pagination::normalize_page_size(params.page_size);

    let filters = MovieFilters {
        title: params.title,
        release_year: params.release_year,
        genre: params.genre,
    };

    let (movies, total_items) =
        MovieRepo::list_paged(&state.pool, &filters, page, page_size).await?;

    let items = movies.iter().map(projection::to_list_item).collect();

    Ok(Json(ApiResponse::success(PaginatedMovies {
        page,
        page_size,
        total_items,
        items,
    })))
}

/// GET /api/v1/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::find_by_id(&state.pool, movie_id)
        .await?
        .ok_or_else(|| movie_not_found(movie_id))?;

    Ok(Json(ApiResponse::success(projection::to_detail(&movie))))
}

/// POST /api/v1/movies
///
/// The director is validated before the genres so error messages are
/// deterministic.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    if DirectorRepo::find_by_id(&state.pool, input.director_id)
        .await?
        .is_none()
    {
        tracing::warn!(director_id = input.director_id, "director validation failed");
        return Err(AppError::Core(CoreError::InvalidReference(
            "Director not found".to_string(),
        )));
    }

    let genres = resolve_genres(&state, &input.genres).await?;

    let movie = MovieRepo::create(&state.pool, &input, &genres).await?;

    tracing::info!(movie_id = movie.movie.id, "Movie created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(projection::to_detail(&movie))),
    ))
}

/// PUT /api/v1/movies/{id}
///
/// Replaces title, release year, cast, and the full genre set. The
/// director reference is never altered by this operation.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<impl IntoResponse> {
    if MovieRepo::find_by_id(&state.pool, movie_id).await?.is_none() {
        return Err(movie_not_found(movie_id));
    }

    let genres = resolve_genres(&state, &input.genres).await?;

    let movie = MovieRepo::update(&state.pool, movie_id, &input, &genres)
        .await?
        .ok_or_else(|| movie_not_found(movie_id))?;

    tracing::info!(movie_id, "Movie updated");

    Ok(Json(ApiResponse::success(projection::to_detail(&movie))))
}

/// DELETE /api/v1/movies/{id}
///
/// Ratings and genre links are removed by the storage cascade.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MovieRepo::delete(&state.pool, movie_id).await?;

    if !deleted {
        return Err(movie_not_found(movie_id));
    }

    tracing::info!(movie_id, "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/movies/{id}/ratings
///
/// Returns the movie's updated detail projection rather than the bare
/// rating, so callers immediately observe the new aggregate.
pub async fn add_rating(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(input): Json<CreateRating>,
) -> AppResult<impl IntoResponse> {
    if MovieRepo::find_by_id(&state.pool, movie_id).await?.is_none() {
        return Err(movie_not_found(movie_id));
    }

    if let Err(err) = rating::validate_score(input.score) {
        tracing::warn!(movie_id, score = input.score, "rating validation failed");
        return Err(err.into());
    }

    let created = RatingRepo::create(&state.pool, movie_id, input.score).await?;

    tracing::info!(
        movie_id,
        rating_id = created.id,
        score = created.score,
        "Rating added"
    );

    // Re-fetch so the projection includes the new rating.
    let movie = MovieRepo::find_by_id(&state.pool, movie_id)
        .await?
        .ok_or_else(|| movie_not_found(movie_id))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(projection::to_detail(&movie))),
    ))
}
