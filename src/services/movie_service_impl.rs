//! `SeaORM` implementation of [`MovieService`].

use crate::api::types::{
    ActorDto, CreateMovieRequest, GenreDto, MovieDetailDto, MovieDto, UpdateMovieRequest,
};
use crate::db::Store;
use crate::entities::movies;
use crate::services::movie_service::{
    MovieListQuery, movie_link, validate_movie_changes, validate_new_movie,
};
use crate::services::{CatalogError, MovieService, Page};
use sea_orm::{DbErr, SqlErr};
use tracing::{debug, warn};

const UNKNOWN_GENRE: &str = "genre_id must reference an existing genre";

/// Which relations a movie response carries.
#[derive(Debug, Clone, Copy)]
struct Shape {
    actors: bool,
    genre_id: bool,
}

impl Shape {
    const LISTING: Self = Self {
        actors: true,
        genre_id: true,
    };
    const DETAIL: Self = Self {
        actors: true,
        genre_id: false,
    };
    const RECOMMENDED: Self = Self {
        actors: false,
        genre_id: false,
    };
}

pub struct SeaOrmMovieService {
    store: Store,
    recommended_min_rating: f64,
}

impl SeaOrmMovieService {
    #[must_use]
    pub const fn new(store: Store, recommended_min_rating: f64) -> Self {
        Self {
            store,
            recommended_min_rating,
        }
    }

    async fn ensure_genre_exists(&self, genre_id: Option<i32>) -> Result<(), CatalogError> {
        let Some(genre_id) = genre_id else {
            return Ok(());
        };
        if self.store.genres().get(genre_id).await?.is_none() {
            return Err(CatalogError::field("genre_id", UNKNOWN_GENRE));
        }
        Ok(())
    }

    async fn build_details(
        &self,
        movies: Vec<movies::Model>,
        shape: Shape,
        base_url: Option<&str>,
    ) -> Result<Vec<MovieDetailDto>, CatalogError> {
        let repo = self.store.movies();

        let (genres, casts) = tokio::join!(repo.load_genres(&movies), async {
            if shape.actors {
                repo.load_actors(&movies).await.map(Some)
            } else {
                Ok(None)
            }
        });
        let genres = genres?;
        let mut casts = casts?.map(Vec::into_iter);

        let details = movies
            .into_iter()
            .zip(genres)
            .map(|(movie, genre)| {
                let actors = casts
                    .as_mut()
                    .and_then(Iterator::next)
                    .map(|cast| cast.into_iter().map(ActorDto::from).collect());
                let link = base_url.map(|base| movie_link(base, movie.id));

                let mut movie = MovieDto::from(movie);
                if !shape.genre_id {
                    movie.genre_id = None;
                }

                MovieDetailDto {
                    movie,
                    genre: genre.map(GenreDto::from),
                    actors,
                    link,
                }
            })
            .collect();

        Ok(details)
    }
}

fn map_write_error(err: DbErr) -> CatalogError {
    if matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ) {
        warn!(error = %err, "Movie write rejected by foreign key");
        return CatalogError::field("genre_id", UNKNOWN_GENRE);
    }
    err.into()
}

#[async_trait::async_trait]
impl MovieService for SeaOrmMovieService {
    async fn list_movies(
        &self,
        query: MovieListQuery,
        base_url: &str,
    ) -> Result<Page<MovieDetailDto>, CatalogError> {
        let repo = self.store.movies();
        let total = repo.count().await?;
        let movies = repo
            .list_page(query.order, query.limit, query.offset)
            .await?;

        debug!(
            order = query.order.map(|o| o.as_str()),
            limit = query.limit,
            offset = query.offset,
            returned = movies.len(),
            "Listed movies"
        );

        let items = self
            .build_details(movies, Shape::LISTING, Some(base_url))
            .await?;
        Ok(Page { total, items })
    }

    async fn get_movie(&self, id: i32) -> Result<MovieDetailDto, CatalogError> {
        let movie = self
            .store
            .movies()
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Movie", id))?;

        self.build_details(vec![movie], Shape::DETAIL, None)
            .await?
            .pop()
            .ok_or_else(|| CatalogError::not_found("Movie", id))
    }

    async fn newest_movies(
        &self,
        limit: u64,
        base_url: &str,
    ) -> Result<Vec<MovieDetailDto>, CatalogError> {
        let movies = self.store.movies().newest(limit).await?;
        self.build_details(movies, Shape::DETAIL, Some(base_url))
            .await
    }

    async fn recommended_movies(
        &self,
        limit: u64,
        base_url: &str,
    ) -> Result<Page<MovieDetailDto>, CatalogError> {
        let repo = self.store.movies();
        let total = repo.count().await?;
        let movies = repo
            .recommended(self.recommended_min_rating, limit)
            .await?;

        let items = self
            .build_details(movies, Shape::RECOMMENDED, Some(base_url))
            .await?;
        Ok(Page { total, items })
    }

    async fn create_movie(&self, request: CreateMovieRequest) -> Result<MovieDto, CatalogError> {
        let movie = validate_new_movie(request)?;
        self.ensure_genre_exists(movie.genre_id).await?;

        let created = self
            .store
            .movies()
            .create(movie)
            .await
            .map_err(map_write_error)?;
        Ok(MovieDto::from(created))
    }

    async fn update_movie(
        &self,
        id: i32,
        request: UpdateMovieRequest,
    ) -> Result<MovieDto, CatalogError> {
        let changes = validate_movie_changes(request)?;
        if let Some(genre_id) = changes.genre_id {
            self.ensure_genre_exists(genre_id).await?;
        }

        self.store
            .movies()
            .update(id, changes)
            .await
            .map_err(map_write_error)?
            .map(MovieDto::from)
            .ok_or_else(|| CatalogError::not_found("Movie", id))
    }

    async fn delete_movie(&self, id: i32) -> Result<(), CatalogError> {
        self.store
            .movies()
            .delete_cascade(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| CatalogError::not_found("Movie", id))
    }
}
