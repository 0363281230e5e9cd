//! Aggregation and projection of loaded movie entities into response
//! shapes.
//!
//! Pure functions of a [`MovieWithRelations`]: everything needed is
//! already loaded, so building a projection never touches the database.

use cinelog_core::rating;
use cinelog_core::types::DbId;
use cinelog_db::models::director::Director;
use cinelog_db::models::movie::MovieWithRelations;
use serde::Serialize;

/// Director as embedded in movie responses.
#[derive(Debug, Clone, Serialize)]
pub struct DirectorSummary {
    pub id: DbId,
    pub name: String,
    pub birth_year: Option<i32>,
    pub description: Option<String>,
}

impl DirectorSummary {
    /// Sentinel substituted when a movie's director row is unresolved.
    ///
    /// Reads must not fail on a dangling reference; the write path
    /// validates directors on every create, so this should not appear
    /// in practice.
    pub fn unknown() -> Self {
        Self {
            id: 0,
            name: "Unknown".to_string(),
            birth_year: None,
            description: None,
        }
    }
}

impl From<&Director> for DirectorSummary {
    fn from(director: &Director) -> Self {
        Self {
            id: director.id,
            name: director.name.clone(),
            birth_year: director.birth_year,
            description: director.description.clone(),
        }
    }
}

/// A movie as it appears in listing responses.
#[derive(Debug, Clone, Serialize)]
pub struct MovieListItem {
    pub id: DbId,
    pub title: String,
    pub release_year: Option<i32>,
    pub director: DirectorSummary,
    /// Associated genre names, in the order the repository returned them.
    pub genres: Vec<String>,
    /// Mean score rounded to one decimal; absent when there are no ratings.
    pub average_rating: Option<f64>,
    pub ratings_count: i64,
}

/// Detailed movie representation: the list item plus cast and the last
/// update timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieListItem,
    pub cast: Option<String>,
    /// RFC 3339 formatted, absent when unknown.
    pub updated_at: Option<String>,
}

/// Paginated wrapper for movie listings.
#[derive(Debug, Serialize)]
pub struct PaginatedMovies {
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub items: Vec<MovieListItem>,
}

/// Build the listing projection for a loaded movie.
pub fn to_list_item(entry: &MovieWithRelations) -> MovieListItem {
    let director = match &entry.director {
        Some(director) => DirectorSummary::from(director),
        None => {
            tracing::warn!(
                movie_id = entry.movie.id,
                "movie director unresolved, substituting sentinel"
            );
            DirectorSummary::unknown()
        }
    };

    let scores: Vec<i32> = entry.ratings.iter().map(|r| r.score).collect();

    MovieListItem {
        id: entry.movie.id,
        title: entry.movie.title.clone(),
        release_year: entry.movie.release_year,
        director,
        genres: entry.genres.iter().map(|g| g.name.clone()).collect(),
        average_rating: rating::average(&scores),
        ratings_count: entry.ratings.len() as i64,
    }
}

/// Build the detail projection for a loaded movie.
pub fn to_detail(entry: &MovieWithRelations) -> MovieDetail {
    MovieDetail {
        summary: to_list_item(entry),
        cast: entry.movie.movie_cast.clone(),
        updated_at: Some(entry.movie.updated_at.to_rfc3339()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use cinelog_db::models::genre::Genre;
    use cinelog_db::models::movie::Movie;
    use cinelog_db::models::rating::MovieRating;

    use super::*;

    fn movie_row(id: DbId) -> Movie {
        Movie {
            id,
            title: "Stalker".to_string(),
            director_id: 1,
            release_year: Some(1979),
            movie_cast: Some("Alexander Kaidanovsky".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn director_row() -> Director {
        Director {
            id: 1,
            name: "Andrei Tarkovsky".to_string(),
            birth_year: Some(1932),
            description: None,
        }
    }

    fn rating_row(id: DbId, movie_id: DbId, score: i32) -> MovieRating {
        MovieRating {
            id,
            movie_id,
            score,
            created_at: Utc::now(),
        }
    }

    fn loaded(
        director: Option<Director>,
        genres: Vec<Genre>,
        ratings: Vec<MovieRating>,
    ) -> MovieWithRelations {
        MovieWithRelations {
            movie: movie_row(1),
            director,
            genres,
            ratings,
        }
    }

    #[test]
    fn average_is_absent_without_ratings() {
        let item = to_list_item(&loaded(Some(director_row()), Vec::new(), Vec::new()));
        assert_eq!(item.average_rating, None);
        assert_eq!(item.ratings_count, 0);
    }

    #[test]
    fn average_is_rounded_mean_of_scores() {
        let ratings = vec![rating_row(1, 1, 8), rating_row(2, 1, 6)];
        let item = to_list_item(&loaded(Some(director_row()), Vec::new(), ratings));
        assert_eq!(item.average_rating, Some(7.0));
        assert_eq!(item.ratings_count, 2);
    }

    #[test]
    fn unresolved_director_becomes_sentinel() {
        let item = to_list_item(&loaded(None, Vec::new(), Vec::new()));
        assert_eq!(item.director.id, 0);
        assert_eq!(item.director.name, "Unknown");
    }

    #[test]
    fn genre_names_keep_repository_order() {
        let genres = vec![
            Genre {
                id: 2,
                name: "Sci-Fi".to_string(),
                description: None,
            },
            Genre {
                id: 1,
                name: "Drama".to_string(),
                description: None,
            },
        ];
        let item = to_list_item(&loaded(Some(director_row()), genres, Vec::new()));
        assert_eq!(item.genres, vec!["Sci-Fi", "Drama"]);
    }

    #[test]
    fn detail_carries_cast_and_updated_at() {
        let detail = to_detail(&loaded(Some(director_row()), Vec::new(), Vec::new()));
        assert_eq!(detail.cast.as_deref(), Some("Alexander Kaidanovsky"));
        assert!(detail.updated_at.is_some());
    }

    #[test]
    fn detail_serializes_flat() {
        let detail = to_detail(&loaded(Some(director_row()), Vec::new(), Vec::new()));
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["title"], "Stalker");
        assert_eq!(value["cast"], "Alexander Kaidanovsky");
        assert!(value["average_rating"].is_null());
    }
}
