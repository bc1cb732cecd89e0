pub mod error;
pub use error::{CatalogError, FieldError};

pub mod genre_service;
pub mod genre_service_impl;
pub use genre_service::GenreService;
pub use genre_service_impl::SeaOrmGenreService;

pub mod movie_service;
pub mod movie_service_impl;
pub use movie_service::{MovieListQuery, MovieService};
pub use movie_service_impl::SeaOrmMovieService;

/// A slice of a collection together with the size of the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub total: u64,
    pub items: Vec<T>,
}
