use axum::extract::{Path, Query, State, rejection::QueryRejection};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, GenreData, GenreListData, ListParams};
use crate::api::validation::{validate_genre_order, validate_id, validate_limit, validate_name};

pub async fn list_genres(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<ApiResponse<GenreListData>, ApiError> {
    let Query(params) = params?;
    let catalog = &state.config.catalog;

    let limit = validate_limit(
        params.limit.as_deref(),
        catalog.default_page_size,
        catalog.max_page_size,
    )?;
    let order = validate_genre_order(params.order.as_deref())?;

    let page = state.genre_service.list_genres(order, limit).await?;

    Ok(ApiResponse::success(GenreListData {
        items: page.items.len(),
        total: page.total,
        genres: page.items,
    }))
}

pub async fn get_genre(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<GenreData>, ApiError> {
    let id = validate_id(&id, "Genre")?;
    let genre = state.genre_service.get_genre(id).await?;

    Ok(ApiResponse::success(GenreData { genre, total: 1 }))
}

/// First genre whose name contains the path segment, case-sensitively.
pub async fn get_genre_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<ApiResponse<GenreData>, ApiError> {
    let name = validate_name(&name)?;
    let genre = state.genre_service.find_genre_by_name(name).await?;

    Ok(ApiResponse::success(GenreData { genre, total: 1 }))
}
