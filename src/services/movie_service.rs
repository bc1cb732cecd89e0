//! Domain service for the movie catalog.
//!
//! Besides the [`MovieService`] trait this module holds the payload
//! validation shared by create and update, so both paths reject the same
//! values with the same field errors.

use crate::api::types::{CreateMovieRequest, MovieDetailDto, MovieDto, UpdateMovieRequest};
use crate::models::movie::{MovieChanges, MovieOrder, NewMovie, parse_release_date};
use crate::services::{CatalogError, FieldError, Page};

pub const MAX_TITLE_LEN: usize = 500;
pub const MAX_RATING: f64 = 10.0;

/// Sorting and paging for the movie listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieListQuery {
    pub order: Option<MovieOrder>,
    pub limit: u64,
    pub offset: u64,
}

#[async_trait::async_trait]
pub trait MovieService: Send + Sync {
    /// One page of movies with genre, cast and item link, plus the size of
    /// the whole table.
    async fn list_movies(
        &self,
        query: MovieListQuery,
        base_url: &str,
    ) -> Result<Page<MovieDetailDto>, CatalogError>;

    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the movie does not exist.
    async fn get_movie(&self, id: i32) -> Result<MovieDetailDto, CatalogError>;

    /// Most recent releases first.
    async fn newest_movies(
        &self,
        limit: u64,
        base_url: &str,
    ) -> Result<Vec<MovieDetailDto>, CatalogError>;

    /// Best rated movies above the recommendation threshold.
    ///
    /// `total` counts every movie in the catalog, not only the recommended ones.
    async fn recommended_movies(
        &self,
        limit: u64,
        base_url: &str,
    ) -> Result<Page<MovieDetailDto>, CatalogError>;

    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] listing every rejected field.
    async fn create_movie(&self, request: CreateMovieRequest) -> Result<MovieDto, CatalogError>;

    /// Overwrites only the fields present in `request`.
    ///
    /// # Errors
    ///
    /// - Returns [`CatalogError::NotFound`] if the movie does not exist
    /// - Returns [`CatalogError::Validation`] for rejected fields
    async fn update_movie(
        &self,
        id: i32,
        request: UpdateMovieRequest,
    ) -> Result<MovieDto, CatalogError>;

    /// Removes the movie, its cast links and any favorite references to it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the movie does not exist.
    async fn delete_movie(&self, id: i32) -> Result<(), CatalogError>;
}

#[must_use]
pub fn movie_link(base_url: &str, id: i32) -> String {
    format!("{}/movies/{id}", base_url.trim_end_matches('/'))
}

fn required<T>(value: Option<T>, path: &str, errors: &mut Vec<FieldError>) -> Option<T> {
    if value.is_none() {
        errors.push(FieldError::new(path, format!("{path} is required")));
    }
    value
}

fn check_title(raw: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    let title = raw.trim();
    if title.is_empty() {
        errors.push(FieldError::new("title", "title cannot be empty"));
        return None;
    }
    if title.chars().count() > MAX_TITLE_LEN {
        errors.push(FieldError::new(
            "title",
            format!("title must be {MAX_TITLE_LEN} characters or less"),
        ));
        return None;
    }
    Some(title.to_string())
}

fn check_rating(rating: f64, errors: &mut Vec<FieldError>) -> Option<f64> {
    if rating.is_finite() && (0.0..=MAX_RATING).contains(&rating) {
        Some(rating)
    } else {
        errors.push(FieldError::new(
            "rating",
            format!("rating must be between 0 and {MAX_RATING}"),
        ));
        None
    }
}

fn check_awards(awards: i32, errors: &mut Vec<FieldError>) -> Option<i32> {
    if awards < 0 {
        errors.push(FieldError::new("awards", "awards cannot be negative"));
        return None;
    }
    Some(awards)
}

fn check_release_date(
    raw: &str,
    errors: &mut Vec<FieldError>,
) -> Option<chrono::DateTime<chrono::Utc>> {
    let parsed = parse_release_date(raw);
    if parsed.is_none() {
        errors.push(FieldError::new(
            "release_date",
            "release_date must be a date (YYYY-MM-DD) or an RFC 3339 timestamp",
        ));
    }
    parsed
}

fn check_length(length: i32, errors: &mut Vec<FieldError>) -> Option<i32> {
    if length <= 0 {
        errors.push(FieldError::new("length", "length must be a positive number of minutes"));
        return None;
    }
    Some(length)
}

fn check_genre_id(genre_id: i32, errors: &mut Vec<FieldError>) -> Option<i32> {
    if genre_id <= 0 {
        errors.push(FieldError::new("genre_id", "genre_id must be a positive integer"));
        return None;
    }
    Some(genre_id)
}

/// Validates a create payload, reporting every rejected field at once.
pub fn validate_new_movie(request: CreateMovieRequest) -> Result<NewMovie, CatalogError> {
    let mut errors = Vec::new();

    let title = required(request.title, "title", &mut errors)
        .and_then(|t| check_title(&t, &mut errors));
    let rating = required(request.rating, "rating", &mut errors)
        .and_then(|r| check_rating(r, &mut errors));
    let awards = required(request.awards, "awards", &mut errors)
        .and_then(|a| check_awards(a, &mut errors));
    let release_date = required(request.release_date, "release_date", &mut errors)
        .and_then(|d| check_release_date(&d, &mut errors));
    let length = request.length.and_then(|l| check_length(l, &mut errors));
    let genre_id = request.genre_id.and_then(|g| check_genre_id(g, &mut errors));

    match (title, rating, awards, release_date) {
        (Some(title), Some(rating), Some(awards), Some(release_date)) if errors.is_empty() => {
            Ok(NewMovie {
                title,
                rating,
                awards,
                release_date,
                length,
                genre_id,
            })
        }
        _ => Err(CatalogError::Validation(errors)),
    }
}

/// Validates an update payload. Absent fields stay `None`; zero and empty
/// values are treated as real values and validated like any other.
pub fn validate_movie_changes(request: UpdateMovieRequest) -> Result<MovieChanges, CatalogError> {
    let mut errors = Vec::new();

    let changes = MovieChanges {
        title: request.title.and_then(|t| check_title(&t, &mut errors)),
        rating: request.rating.and_then(|r| check_rating(r, &mut errors)),
        awards: request.awards.and_then(|a| check_awards(a, &mut errors)),
        release_date: request
            .release_date
            .and_then(|d| check_release_date(&d, &mut errors)),
        length: request.length.map(|value| match value {
            Some(l) => check_length(l, &mut errors),
            None => None,
        }),
        genre_id: request.genre_id.map(|value| match value {
            Some(g) => check_genre_id(g, &mut errors),
            None => None,
        }),
    };

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(CatalogError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateMovieRequest {
        CreateMovieRequest {
            title: Some("  The Matrix  ".to_string()),
            rating: Some(8.7),
            awards: Some(4),
            release_date: Some("1999-03-31".to_string()),
            length: Some(136),
            genre_id: Some(5),
        }
    }

    fn paths(err: CatalogError) -> Vec<String> {
        match err {
            CatalogError::Validation(errors) => errors.into_iter().map(|e| e.path).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn new_movie_title_is_trimmed() {
        let movie = validate_new_movie(full_request()).unwrap();
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.length, Some(136));
    }

    #[test]
    fn new_movie_reports_every_missing_field() {
        let err = validate_new_movie(CreateMovieRequest::default()).unwrap_err();
        assert_eq!(
            paths(err),
            vec!["title", "rating", "awards", "release_date"]
        );
    }

    #[test]
    fn new_movie_rejects_blank_title_and_bad_rating() {
        let request = CreateMovieRequest {
            title: Some("   ".to_string()),
            rating: Some(11.0),
            ..full_request()
        };
        assert_eq!(paths(validate_new_movie(request).unwrap_err()), vec!["title", "rating"]);
    }

    #[test]
    fn new_movie_rejects_bad_optional_fields() {
        let request = CreateMovieRequest {
            length: Some(0),
            genre_id: Some(-3),
            ..full_request()
        };
        assert_eq!(
            paths(validate_new_movie(request).unwrap_err()),
            vec!["length", "genre_id"]
        );
    }

    #[test]
    fn changes_keep_zero_values() {
        let request = UpdateMovieRequest {
            rating: Some(0.0),
            awards: Some(0),
            ..Default::default()
        };
        let changes = validate_movie_changes(request).unwrap();
        assert_eq!(changes.rating, Some(0.0));
        assert_eq!(changes.awards, Some(0));
        assert!(changes.title.is_none());
    }

    #[test]
    fn changes_distinguish_null_from_absent() {
        let request = UpdateMovieRequest {
            genre_id: Some(None),
            ..Default::default()
        };
        let changes = validate_movie_changes(request).unwrap();
        assert_eq!(changes.genre_id, Some(None));
        assert_eq!(changes.length, None);
    }

    #[test]
    fn changes_reject_empty_title() {
        let request = UpdateMovieRequest {
            title: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(paths(validate_movie_changes(request).unwrap_err()), vec!["title"]);
    }

    #[test]
    fn link_has_no_double_slash() {
        assert_eq!(movie_link("http://localhost:3001/", 7), "http://localhost:3001/movies/7");
        assert_eq!(movie_link("https://api.example.com", 12), "https://api.example.com/movies/12");
    }
}
