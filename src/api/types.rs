use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::{actors, genres, movies};
use crate::models::movie::format_release_date;
use crate::services::FieldError;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Meta {
    pub status: u16,
}

/// Success envelope: `{ok: true, meta: {status}, msg?, data?}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub meta: Meta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::with_status(StatusCode::OK, data)
    }

    pub fn created(data: T) -> Self {
        Self::with_status(StatusCode::CREATED, data)
    }

    pub fn with_status(status: StatusCode, data: T) -> Self {
        Self {
            ok: true,
            meta: Meta {
                status: status.as_u16(),
            },
            msg: None,
            data: Some(data),
        }
    }

    #[must_use]
    pub fn with_msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = Some(msg.into());
        self
    }
}

impl ApiResponse<()> {
    /// A success envelope carrying only a message.
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            ok: true,
            meta: Meta {
                status: StatusCode::OK.as_u16(),
            },
            msg: Some(msg.into()),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.meta.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// Failure envelope: `{ok: false, status, msg}` or `{ok: false, status, errors}`.
#[derive(Debug, Serialize)]
pub struct ApiFailure {
    pub ok: bool,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ApiFailure {
    pub fn message(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            status: status.as_u16(),
            msg: Some(msg.into()),
            errors: None,
        }
    }

    #[must_use]
    pub fn fields(status: StatusCode, errors: Vec<FieldError>) -> Self {
        Self {
            ok: false,
            status: status.as_u16(),
            msg: None,
            errors: Some(errors),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreDto {
    pub id: i32,
    pub name: String,
    pub ranking: i32,
}

impl From<genres::Model> for GenreDto {
    fn from(genre: genres::Model) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
            ranking: genre.ranking,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActorDto {
    pub id: i32,
    pub name: String,
    pub rating: Option<f64>,
    pub favorite_movie_id: Option<i32>,
}

impl From<actors::Model> for ActorDto {
    fn from(actor: actors::Model) -> Self {
        Self {
            id: actor.id,
            name: actor.name,
            rating: actor.rating,
            favorite_movie_id: actor.favorite_movie_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovieDto {
    pub id: i32,
    pub title: String,
    pub rating: f64,
    pub awards: i32,
    pub release_date: String,
    pub length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<i32>,
}

impl From<movies::Model> for MovieDto {
    fn from(movie: movies::Model) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            rating: movie.rating,
            awards: movie.awards,
            release_date: format_release_date(&movie.release_date),
            length: movie.length,
            genre_id: movie.genre_id,
        }
    }
}

/// A movie with its relations and, for collection responses, its own URL.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovieDetailDto {
    #[serde(flatten)]
    pub movie: MovieDto,
    pub genre: Option<GenreDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actors: Option<Vec<ActorDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenreListData {
    pub items: usize,
    pub total: u64,
    pub genres: Vec<GenreDto>,
}

#[derive(Debug, Serialize)]
pub struct GenreData {
    pub genre: GenreDto,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct MovieListData {
    pub items: usize,
    pub total: u64,
    pub movies: Vec<MovieDetailDto>,
}

#[derive(Debug, Serialize)]
pub struct MoviesData {
    pub movies: Vec<MovieDetailDto>,
}

#[derive(Debug, Serialize)]
pub struct MovieData<T> {
    pub movie: T,
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime: u64,
}

/// Query string accepted by the list endpoints. Values stay raw so the
/// handlers can answer malformed numbers with the failure envelope.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
    pub order: Option<String>,
    pub offset: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateMovieRequest {
    pub title: Option<String>,
    pub rating: Option<f64>,
    pub awards: Option<i32>,
    pub release_date: Option<String>,
    pub length: Option<i32>,
    pub genre_id: Option<i32>,
}

/// Partial update body. A missing key leaves the column alone; for `length`
/// and `genre_id` an explicit `null` clears it.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub rating: Option<f64>,
    pub awards: Option<i32>,
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub length: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub genre_id: Option<Option<i32>>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
