use crate::entities::{actor_movie, actors, genres, movies, prelude::*};
use crate::models::movie::{MovieChanges, MovieOrder, NewMovie};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{debug, info};

/// Rows touched by a movie delete cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCascade {
    pub actors_cleared: u64,
    pub links_removed: u64,
}

pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    const fn order_column(order: Option<MovieOrder>) -> movies::Column {
        match order {
            Some(MovieOrder::Title) => movies::Column::Title,
            Some(MovieOrder::Rating) => movies::Column::Rating,
            Some(MovieOrder::ReleaseDate) => movies::Column::ReleaseDate,
            Some(MovieOrder::Length) => movies::Column::Length,
            Some(MovieOrder::Awards) => movies::Column::Awards,
            None => movies::Column::Id,
        }
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Movies::find().count(&self.conn).await
    }

    pub async fn list_page(
        &self,
        order: Option<MovieOrder>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<movies::Model>, DbErr> {
        Movies::find()
            .order_by_asc(Self::order_column(order))
            .order_by_asc(movies::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.conn)
            .await
    }

    pub async fn newest(&self, limit: u64) -> Result<Vec<movies::Model>, DbErr> {
        Movies::find()
            .order_by_desc(movies::Column::ReleaseDate)
            .order_by_asc(movies::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await
    }

    pub async fn recommended(
        &self,
        min_rating: f64,
        limit: u64,
    ) -> Result<Vec<movies::Model>, DbErr> {
        Movies::find()
            .filter(movies::Column::Rating.gte(min_rating))
            .order_by_desc(movies::Column::Rating)
            .order_by_asc(movies::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<movies::Model>, DbErr> {
        Movies::find_by_id(id).one(&self.conn).await
    }

    /// Genre of each movie, in the same order as `movies`.
    pub async fn load_genres(
        &self,
        movies: &[movies::Model],
    ) -> Result<Vec<Option<genres::Model>>, DbErr> {
        movies.load_one(Genres, &self.conn).await
    }

    /// Cast of each movie, in the same order as `movies`, sorted by actor id.
    pub async fn load_actors(
        &self,
        movies: &[movies::Model],
    ) -> Result<Vec<Vec<actors::Model>>, DbErr> {
        let mut casts = movies
            .load_many_to_many(Actors, ActorMovie, &self.conn)
            .await?;
        for cast in &mut casts {
            cast.sort_by_key(|a| a.id);
        }
        Ok(casts)
    }

    pub async fn create(&self, movie: NewMovie) -> Result<movies::Model, DbErr> {
        let now = chrono::Utc::now();
        let model = movies::ActiveModel {
            title: Set(movie.title),
            rating: Set(movie.rating),
            awards: Set(movie.awards),
            release_date: Set(movie.release_date),
            length: Set(movie.length),
            genre_id: Set(movie.genre_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        info!(movie_id = model.id, title = %model.title, "Created movie");
        Ok(model)
    }

    /// Applies `changes` to the movie. Returns `None` when it does not exist.
    pub async fn update(
        &self,
        id: i32,
        changes: MovieChanges,
    ) -> Result<Option<movies::Model>, DbErr> {
        let txn = self.conn.begin().await?;

        let Some(existing) = Movies::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        if changes.is_empty() {
            txn.rollback().await?;
            return Ok(Some(existing));
        }

        let mut active: movies::ActiveModel = existing.into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(rating) = changes.rating {
            active.rating = Set(rating);
        }
        if let Some(awards) = changes.awards {
            active.awards = Set(awards);
        }
        if let Some(release_date) = changes.release_date {
            active.release_date = Set(release_date);
        }
        if let Some(length) = changes.length {
            active.length = Set(length);
        }
        if let Some(genre_id) = changes.genre_id {
            active.genre_id = Set(genre_id);
        }
        active.updated_at = Set(chrono::Utc::now());

        let updated = active.update(&txn).await?;
        txn.commit().await?;

        debug!(movie_id = id, "Updated movie");
        Ok(Some(updated))
    }

    /// Deletes a movie together with everything pointing at it, in one
    /// transaction: favorite references are cleared, cast links removed, then
    /// the row itself is deleted. Returns `None` when the movie does not exist.
    pub async fn delete_cascade(&self, id: i32) -> Result<Option<DeleteCascade>, DbErr> {
        let txn = self.conn.begin().await?;

        if Movies::find_by_id(id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Ok(None);
        }

        let cascade = match cascade_steps(&txn, id).await {
            Ok(cascade) => cascade,
            Err(err) => {
                txn.rollback().await?;
                return Err(err);
            }
        };

        txn.commit().await?;

        info!(
            movie_id = id,
            actors_cleared = cascade.actors_cleared,
            links_removed = cascade.links_removed,
            "Deleted movie"
        );
        Ok(Some(cascade))
    }
}

/// Clears favorites, removes cast links and deletes the movie row.
async fn cascade_steps(txn: &DatabaseTransaction, id: i32) -> Result<DeleteCascade, DbErr> {
    let cleared = Actors::update_many()
        .col_expr(
            actors::Column::FavoriteMovieId,
            Expr::value(Option::<i32>::None),
        )
        .col_expr(actors::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
        .filter(actors::Column::FavoriteMovieId.eq(id))
        .exec(txn)
        .await?;

    let unlinked = ActorMovie::delete_many()
        .filter(actor_movie::Column::MovieId.eq(id))
        .exec(txn)
        .await?;

    Movies::delete_by_id(id).exec(txn).await?;

    Ok(DeleteCascade {
        actors_cleared: cleared.rows_affected,
        links_removed: unlinked.rows_affected,
    })
}
