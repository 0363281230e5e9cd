//! Route definitions for the movie catalog.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes mounted at `/movies`.
///
/// ```text
/// GET    /               -> list_movies
/// POST   /               -> create_movie
/// GET    /{id}           -> get_movie
/// PUT    /{id}           -> update_movie
/// DELETE /{id}           -> delete_movie
/// POST   /{id}/ratings   -> add_rating
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies).post(movies::create_movie))
        .route(
            "/{id}",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
        .route("/{id}/ratings", post(movies::add_rating))
}
