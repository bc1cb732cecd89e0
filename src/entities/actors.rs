use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "actors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub rating: Option<f64>,
    pub favorite_movie_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movies::Entity",
        from = "Column::FavoriteMovieId",
        to = "super::movies::Column::Id"
    )]
    FavoriteMovie,
    #[sea_orm(has_many = "super::actor_movie::Entity")]
    ActorMovie,
}

impl Related<super::actor_movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActorMovie.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
