//! Read-only queries over the genre table.

use crate::api::types::GenreDto;
use crate::models::genre::GenreOrder;
use crate::services::{CatalogError, Page};

/// Domain service trait for genres.
#[async_trait::async_trait]
pub trait GenreService: Send + Sync {
    /// One page of genres plus the total number of genres.
    async fn list_genres(
        &self,
        order: Option<GenreOrder>,
        limit: u64,
    ) -> Result<Page<GenreDto>, CatalogError>;

    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no genre has this id.
    async fn get_genre(&self, id: i32) -> Result<GenreDto, CatalogError>;

    /// First genre whose name contains `name` (case-sensitive).
    ///
    /// # Errors
    ///
    /// - Returns [`CatalogError::InvalidArgument`] for a blank name
    /// - Returns [`CatalogError::NotFound`] if nothing matches
    async fn find_genre_by_name(&self, name: &str) -> Result<GenreDto, CatalogError>;
}
