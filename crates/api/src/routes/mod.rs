//! Route modules, one per resource.

pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /movies                  list, create
/// /movies/{id}             get, update, delete
/// /movies/{id}/ratings     add rating
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movies", movies::router())
}
