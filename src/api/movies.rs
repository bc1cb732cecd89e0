use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, header},
};
use std::sync::Arc;
use tracing::debug;

use super::{
    ApiError, ApiResponse, AppState, CreateMovieRequest, ListParams, MovieData, MovieListData,
    MovieDetailDto, MovieDto, MoviesData, UpdateMovieRequest,
};
use crate::api::validation::{validate_id, validate_limit, validate_movie_order, validate_offset};
use crate::services::MovieListQuery;

/// Base for item links: the configured public URL, else the request's host.
fn base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(public_url) = &state.config.server.public_url {
        return public_url.trim_end_matches('/').to_string();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{host}")
}

fn page_limit(state: &AppState, raw: Option<&str>) -> Result<u64, ApiError> {
    let catalog = &state.config.catalog;
    validate_limit(raw, catalog.default_page_size, catalog.max_page_size)
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<ApiResponse<MovieListData>, ApiError> {
    let Query(params) = params?;

    let query = MovieListQuery {
        order: validate_movie_order(params.order.as_deref())?,
        limit: page_limit(&state, params.limit.as_deref())?,
        offset: validate_offset(params.offset.as_deref())?,
    };

    if let Some(search) = params.search.as_deref() {
        debug!(search, "Ignoring search parameter on movie listing");
    }

    let page = state
        .movie_service
        .list_movies(query, &base_url(&state, &headers))
        .await?;

    Ok(ApiResponse::success(MovieListData {
        items: page.items.len(),
        total: page.total,
        movies: page.items,
    }))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<MovieData<MovieDetailDto>>, ApiError> {
    let id = validate_id(&id, "Movie")?;
    let movie = state.movie_service.get_movie(id).await?;

    Ok(ApiResponse::success(MovieData { movie }))
}

pub async fn newest_movies(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<ApiResponse<MoviesData>, ApiError> {
    let Query(params) = params?;
    let limit = page_limit(&state, params.limit.as_deref())?;

    let movies = state
        .movie_service
        .newest_movies(limit, &base_url(&state, &headers))
        .await?;

    Ok(ApiResponse::success(MoviesData { movies }))
}

pub async fn recommended_movies(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<ApiResponse<MovieListData>, ApiError> {
    let Query(params) = params?;
    let limit = page_limit(&state, params.limit.as_deref())?;

    let page = state
        .movie_service
        .recommended_movies(limit, &base_url(&state, &headers))
        .await?;

    Ok(ApiResponse::success(MovieListData {
        items: page.items.len(),
        total: page.total,
        movies: page.items,
    }))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> Result<ApiResponse<MovieData<MovieDto>>, ApiError> {
    let Json(request) = payload?;
    let movie = state.movie_service.create_movie(request).await?;

    Ok(ApiResponse::created(MovieData { movie }))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateMovieRequest>, JsonRejection>,
) -> Result<ApiResponse<MovieData<MovieDto>>, ApiError> {
    let id = validate_id(&id, "Movie")?;
    let Json(request) = payload?;
    let movie = state.movie_service.update_movie(id, request).await?;

    Ok(ApiResponse::success(MovieData { movie }).with_msg("Movie updated successfully"))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let id = validate_id(&id, "Movie")?;
    state.movie_service.delete_movie(id).await?;

    Ok(ApiResponse::message("Movie deleted successfully"))
}
