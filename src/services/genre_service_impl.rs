//! `SeaORM` implementation of [`GenreService`].

use crate::api::types::GenreDto;
use crate::db::Store;
use crate::models::genre::GenreOrder;
use crate::services::{CatalogError, GenreService, Page};

pub struct SeaOrmGenreService {
    store: Store,
}

impl SeaOrmGenreService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl GenreService for SeaOrmGenreService {
    async fn list_genres(
        &self,
        order: Option<GenreOrder>,
        limit: u64,
    ) -> Result<Page<GenreDto>, CatalogError> {
        let repo = self.store.genres();
        let total = repo.count().await?;
        let genres = repo.list(order, limit).await?;

        Ok(Page {
            total,
            items: genres.into_iter().map(GenreDto::from).collect(),
        })
    }

    async fn get_genre(&self, id: i32) -> Result<GenreDto, CatalogError> {
        self.store
            .genres()
            .get(id)
            .await?
            .map(GenreDto::from)
            .ok_or_else(|| CatalogError::not_found("Genre", id))
    }

    async fn find_genre_by_name(&self, name: &str) -> Result<GenreDto, CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::InvalidArgument(
                "Genre name is required".to_string(),
            ));
        }

        self.store
            .genres()
            .find_by_name_fragment(name)
            .await?
            .map(GenreDto::from)
            .ok_or_else(|| CatalogError::NotFound(format!("No genre matches '{name}'")))
    }
}
