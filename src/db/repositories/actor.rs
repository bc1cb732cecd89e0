use crate::entities::{actor_movie, actors, prelude::*};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};

pub struct ActorRepository {
    conn: DatabaseConnection,
}

impl ActorRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn create(
        &self,
        name: &str,
        rating: Option<f64>,
        favorite_movie_id: Option<i32>,
    ) -> Result<actors::Model, DbErr> {
        let now = chrono::Utc::now();
        actors::ActiveModel {
            name: Set(name.to_string()),
            rating: Set(rating),
            favorite_movie_id: Set(favorite_movie_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.conn)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<actors::Model>, DbErr> {
        Actors::find_by_id(id).one(&self.conn).await
    }

    pub async fn link_movie(&self, actor_id: i32, movie_id: i32) -> Result<(), DbErr> {
        let now = chrono::Utc::now();
        ActorMovie::insert(actor_movie::ActiveModel {
            actor_id: Set(actor_id),
            movie_id: Set(movie_id),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .on_conflict(
            sea_orm::sea_query::OnConflict::columns([
                actor_movie::Column::ActorId,
                actor_movie::Column::MovieId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .do_nothing()
        .exec(&self.conn)
        .await?;

        Ok(())
    }

    pub async fn count_links_for_movie(&self, movie_id: i32) -> Result<u64, DbErr> {
        ActorMovie::find()
            .filter(actor_movie::Column::MovieId.eq(movie_id))
            .count(&self.conn)
            .await
    }

    pub async fn count_favoring(&self, movie_id: i32) -> Result<u64, DbErr> {
        Actors::find()
            .filter(actors::Column::FavoriteMovieId.eq(movie_id))
            .count(&self.conn)
            .await
    }
}
