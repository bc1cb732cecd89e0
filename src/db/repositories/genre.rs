use crate::entities::{genres, prelude::*};
use crate::models::genre::GenreOrder;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

pub struct GenreRepository {
    conn: DatabaseConnection,
}

impl GenreRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Genres::find().count(&self.conn).await
    }

    pub async fn list(
        &self,
        order: Option<GenreOrder>,
        limit: u64,
    ) -> Result<Vec<genres::Model>, DbErr> {
        let column = match order {
            Some(GenreOrder::Name) => genres::Column::Name,
            Some(GenreOrder::Ranking) => genres::Column::Ranking,
            None => genres::Column::Id,
        };

        Genres::find()
            .order_by_asc(column)
            .order_by_asc(genres::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<genres::Model>, DbErr> {
        Genres::find_by_id(id).one(&self.conn).await
    }

    /// First genre (by id) whose name contains `fragment`, compared
    /// case-sensitively.
    ///
    /// `LIKE` is case-insensitive on SQLite, so it only narrows the candidates
    /// and the exact comparison happens here.
    pub async fn find_by_name_fragment(
        &self,
        fragment: &str,
    ) -> Result<Option<genres::Model>, DbErr> {
        let candidates = Genres::find()
            .filter(genres::Column::Name.contains(fragment))
            .order_by_asc(genres::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(candidates.into_iter().find(|g| g.name.contains(fragment)))
    }

    pub async fn create(&self, name: &str, ranking: i32) -> Result<genres::Model, DbErr> {
        let now = chrono::Utc::now();
        genres::ActiveModel {
            name: Set(name.to_string()),
            ranking: Set(ranking),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.conn)
        .await
    }
}
